#![forbid(unsafe_code)]

pub mod scene;
pub mod viewer;

pub use scene::{cloud_scene, mask_scene, AxisGizmo, Color, PointGroup, ScatterScene, SceneLayout};
#[cfg(feature = "rerun")]
pub use viewer::RerunViewer;
pub use viewer::{visualize_3d_masks, visualize_pcd, LogViewer, SceneViewer, ViewerError};
