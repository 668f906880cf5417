//! Generators for derived site data.
//!
//! Turns the exported listings into structures the site renders directly:
//!
//! - **Menu**: navigation links from ranked pages and collection options
//!
//! Generators are pure functions over pre-loaded export data; all filesystem
//! access stays in the source layer.

pub mod menu;

pub use menu::{MenuEntry, build_menu};
