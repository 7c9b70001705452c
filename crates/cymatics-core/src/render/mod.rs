//! CPU plot rendering.
//!
//! Both plot renderers allocate their canvas (and, for the surface, a depth
//! buffer) inside the call and return only the finished bitmap, so nothing
//! is retained between frames.

pub mod canvas;
pub mod compose;
pub mod font;
pub mod heatmap;
pub mod surface;

pub use compose::{compose, render_frame, RenderedFrame};
pub use heatmap::render_heatmap;
pub use surface::render_surface;
