pub mod clock;
pub mod colormap;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod field;
pub mod layout;
pub mod render;
pub mod state;

pub use clock::FrameClock;
pub use colormap::{ColorMap, Normalize};
pub use config::{FieldParams, ViewerConfig};
pub use constants::*;
pub use error::CymaticsError;
pub use field::WaveField;
pub use layout::{Layout, Rect, Widget};
pub use render::{render_frame, RenderedFrame};
pub use state::*;
