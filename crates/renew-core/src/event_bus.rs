//! Event bus between the chat session and the UI.
//!
//! Single-threaded (WASM constraint), shared through `Rc<RefCell<..>>`.
//! The session pushes, the UI drains once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use renew_types::event::CoachEvent;

/// Shared event bus: clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<CoachEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn emit(&self, event: CoachEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<CoachEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Used by the app to decide whether to request a repaint.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_pending()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
