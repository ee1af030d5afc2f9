//! Hit area system for click interactions.
//!
//! This module provides a registry-based approach to handling clickable regions
//! in the TUI. Components register hit areas during rendering, and the event
//! loop queries the registry to determine what action to take on mouse events.

use ratatui::layout::Rect;

use crate::app::Action;

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: Action,
}

impl HitArea {
    pub fn new(rect: Rect, action: Action) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Later registrations sit on top of earlier ones.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    /// Clear all registered areas.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a clickable region. Empty rects are ignored.
    pub fn register(&mut self, rect: Rect, action: Action) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Find the action under a point, topmost first.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Action> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// Rect registered for `action`, if any.
    pub fn rect_for(&self, action: Action) -> Option<Rect> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.action == action)
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
