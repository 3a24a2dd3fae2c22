#![doc = include_str!("../README.md")]

pub mod color;
pub mod config;
pub mod depth;
pub mod error;
pub mod image;
pub mod pyramid;
pub mod rgbd;

// --- High-level re-exports -------------------------------------------------

pub use crate::color::reduce_color;
pub use crate::depth::{decode_depth, DepthFormat};
pub use crate::error::Error;
pub use crate::image::{ImageF32, RawImage, INVALID_DEPTH};
pub use crate::pyramid::{build_pyramid, Pyramid, PyramidOptions};
pub use crate::rgbd::RgbdImage;

/// Small prelude for quick experiments.
///
/// ```
/// use rgbd_pyramid::prelude::*;
///
/// let color = RawImage::prepare(4, 4, 3, 1).unwrap();
/// let mut depth = RawImage::prepare(4, 4, 1, 2).unwrap();
/// depth.write_u16(1, 1, 0, 1500).unwrap();
///
/// let pair = RgbdImage::from_redwood(&color, &depth).unwrap();
/// let levels = build_pyramid(&pair, 2, true);
/// assert_eq!(levels.len(), 2);
/// assert_eq!((levels[1].width(), levels[1].height()), (2, 2));
/// ```
pub mod prelude {
    pub use crate::depth::DepthFormat;
    pub use crate::image::{ImageF32, RawImage};
    pub use crate::pyramid::{build_pyramid, Pyramid, PyramidOptions};
    pub use crate::rgbd::RgbdImage;
}
