//! Pointer interaction for the Plaza TUI.
//!
//! Components register clickable regions while rendering; the event loop
//! resolves mouse clicks against the regions of the last frame.

mod hit_area;

pub use hit_area::{HitArea, HitAreaRegistry};
