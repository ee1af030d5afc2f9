//! Data records shown by the feed and profile screens.

mod post;
mod profile;
pub mod seed;

pub use post::{Post, PostId, PostRecord};
pub use profile::{ProfileCard, ProfileStat};
pub use seed::Seed;
