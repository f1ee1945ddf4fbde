//! In-page behaviors for the Folio portfolio page.
//!
//! Three independent behaviors are wired once the page structure is ready:
//!
//! - [`scroll_spy`]: marks the navigation link of the section being read.
//! - [`project_filter`]: shows only the projects matching a technology label.
//! - [`theme`]: flips the `dark-mode` class on `<body>`.
//!
//! The behaviors only talk to a [`PageSurface`], so they run the same against
//! the browser DOM (the `wasm32` build) and against an in-memory page in tests.

pub mod config;
pub mod page;
pub mod project_filter;
pub mod scroll_spy;
pub mod surface;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(test)]
mod fake;

pub use config::BehaviorConfig;
pub use page::{install, Installed};
pub use surface::{Handler, Marker, PageSurface};
pub use theme::Theme;
