#![forbid(unsafe_code)]

pub mod colormap;
pub mod draw;
pub mod error;
pub mod overlay;

pub use colormap::DepthColorMap;
pub use draw::draw_filled_circle;
pub use error::RenderError;
pub use overlay::{draw_projections_on_image, render_projections, OverlayOptions};
