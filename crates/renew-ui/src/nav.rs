//! In-page navigation: smooth-scroll targets and the scroll-to-top button.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Coach,
    Pricing,
}

/// Tracks the page scroll offset and one outstanding scroll request.
#[derive(Debug, Clone)]
pub struct Navigator {
    pending: Option<NavTarget>,
    offset: f32,
    threshold: f32,
}

impl Navigator {
    pub fn new(threshold: f32) -> Self {
        Self {
            pending: None,
            offset: 0.0,
            threshold,
        }
    }

    /// Ask for a scroll; a later request replaces an earlier one.
    pub fn request(&mut self, target: NavTarget) {
        self.pending = Some(target);
    }

    pub fn pending(&self) -> Option<NavTarget> {
        self.pending
    }

    /// Consume the request if it is for `target`.
    pub fn take(&mut self, target: NavTarget) -> bool {
        if self.pending == Some(target) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn show_scroll_top(&self) -> bool {
        self.offset > self.threshold
    }
}
