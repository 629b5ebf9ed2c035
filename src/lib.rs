//! Visualization helpers for LiDAR point clouds and their camera-image
//! projections.
//!
//! - [`io`]: PCD loading and raster image codec
//! - [`filters`]: projection preprocessing
//! - [`render`]: depth color map and the projection overlay renderer
//! - [`scatter`]: 3D scatter scenes and viewers
#![forbid(unsafe_code)]

pub use lidarviz_core as core;
pub use lidarviz_filters as filters;
pub use lidarviz_io as io;
pub use lidarviz_render as render;
pub use lidarviz_scatter as scatter;

pub use lidarviz_core::{CoreError, ImageSize, PointCloud, ProjectedPoints};
pub use lidarviz_render::{draw_projections_on_image, DepthColorMap, OverlayOptions, RenderError};
pub use lidarviz_scatter::{visualize_3d_masks, visualize_pcd, SceneViewer};
