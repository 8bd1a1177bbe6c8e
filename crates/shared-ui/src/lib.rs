//! Presentation components shared by the campus portal pages.
//!
//! Every component links its own stylesheet through `document::Link`, so a
//! page only has to render the component to get its styling.

pub mod components;

pub use components::*;
