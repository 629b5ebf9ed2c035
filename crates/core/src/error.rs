use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("projected coordinates must have equal lengths (u={u}, v={v}, z={z})")]
    LengthMismatch { u: usize, v: usize, z: usize },

    #[error("point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}
