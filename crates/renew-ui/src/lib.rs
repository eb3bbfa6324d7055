//! egui rendering of the landing page. Panels take state by reference and
//! hand user intent back as `PageAction`s; nothing here touches the browser.

pub mod theme;
pub mod nav;
pub mod state;
pub mod panels;

#[cfg(test)]
mod tests;
