pub mod message;
pub mod event;
pub mod reply;
pub mod content;
pub mod config;
pub mod error;


pub use error::CoachError;
pub type Result<T> = std::result::Result<T, CoachError>;
