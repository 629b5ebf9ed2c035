#![forbid(unsafe_code)]

pub mod bbox;
pub mod cloud;
pub mod error;
pub mod projected;

pub use bbox::Aabb;
pub use cloud::PointCloud;
pub use error::CoreError;
pub use projected::{ImageSize, ProjectedPoints};
