#![forbid(unsafe_code)]

pub mod pcd;
pub mod raster;

pub use pcd::{extract_xyz, read_pcd};
pub use raster::{load_image, save_image};
