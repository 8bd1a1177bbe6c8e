mod component;
pub mod state;

pub use component::*;
pub use state::{GlareConfig, GlareTracker, GlareVisual};
