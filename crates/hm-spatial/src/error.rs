//! Spatial-subsystem error type.

use thiserror::Error;

use hm_core::HexCoord;

/// Errors produced by `hm-spatial`.
///
/// An unreachable destination is *not* an error: searches return an empty
/// [`Route`][crate::Route] for that.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("coordinate {0} is outside the map")]
    OffMap(HexCoord),

    #[error("map dimensions {width}x{height} are invalid")]
    BadDimensions { width: u32, height: u32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
