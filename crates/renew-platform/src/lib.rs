//! Browser adapters for the coach core.

pub mod delay;
pub mod form;
pub mod page_config;

pub use delay::{GlooDelay, InstantDelay};
pub use form::{FormspreeAdapter, NullForm};
pub use page_config::load_page_config;

#[cfg(test)]
mod tests;
