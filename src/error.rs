//! Error taxonomy for the decode + pyramid core.
//!
//! All errors are raised synchronously by the call that detects them and
//! are recoverable; no partially constructed buffer is ever returned.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested geometry cannot describe an image buffer.
    #[error(
        "invalid dimensions: {width}x{height}, {channels} channel(s), \
         {bytes_per_channel} byte(s) per channel"
    )]
    InvalidDimension {
        width: usize,
        height: usize,
        channels: usize,
        bytes_per_channel: usize,
    },

    /// Pixel or channel coordinates outside the buffer geometry.
    #[error("index out of range: ({x}, {y}) channel {channel}")]
    IndexOutOfRange { x: usize, y: usize, channel: usize },

    /// Requested numeric width disagrees with the buffer's bytes-per-channel.
    #[error("type width {requested} byte(s) does not match buffer channel width {actual}")]
    TypeMismatch { requested: usize, actual: usize },

    /// Unknown depth format identifier.
    #[error("unsupported depth format: {0:?}")]
    UnsupportedFormat(String),

    /// Color reduction only accepts 1- or 3-channel input.
    #[error("unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),

    /// Color and depth buffers of an RGB-D pair must share dimensions.
    #[error(
        "dimension mismatch: color {color_width}x{color_height}, \
         depth {depth_width}x{depth_height}"
    )]
    DimensionMismatch {
        color_width: usize,
        color_height: usize,
        depth_width: usize,
        depth_height: usize,
    },
}
