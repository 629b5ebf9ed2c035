#![forbid(unsafe_code)]

pub mod projection;

pub use projection::{preprocess, remove_negative_depth, remove_out_of_bounds};
