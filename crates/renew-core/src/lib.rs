//! Coach core: the chat session state machine and everything it needs,
//! free of browser dependencies so it tests natively.

pub mod event_bus;
pub mod ports;
pub mod selector;
pub mod session;
pub mod scheduler;
pub mod email;
