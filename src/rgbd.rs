//! Paired canonical color and depth frames.

use crate::color::reduce_color;
use crate::depth::{decode_depth, DepthFormat};
use crate::error::Error;
use crate::image::{ImageF32, RawImage};

/// Immutable bundle of one canonical color buffer and one canonical depth
/// buffer of matching dimensions. Pyramid derivation produces new
/// instances, never mutates existing ones.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbdImage {
    color: ImageF32,
    depth: ImageF32,
}

impl RgbdImage {
    /// Decode a raw depth buffer with the given format, reduce the raw
    /// color buffer, and bundle the results.
    pub fn pair(
        color_raw: &RawImage,
        depth_raw: &RawImage,
        format: DepthFormat,
    ) -> Result<Self, Error> {
        let depth = decode_depth(depth_raw, format)?;
        let color = reduce_color(color_raw)?;
        Self::from_parts(color, depth)
    }

    /// Bundle already-canonical buffers, checking the dimension invariant.
    pub fn from_parts(color: ImageF32, depth: ImageF32) -> Result<Self, Error> {
        if color.w != depth.w || color.h != depth.h {
            return Err(Error::DimensionMismatch {
                color_width: color.w,
                color_height: color.h,
                depth_width: depth.w,
                depth_height: depth.h,
            });
        }
        Ok(Self { color, depth })
    }

    pub fn from_direct(color_raw: &RawImage, depth_raw: &RawImage) -> Result<Self, Error> {
        Self::pair(color_raw, depth_raw, DepthFormat::Direct)
    }

    pub fn from_redwood(color_raw: &RawImage, depth_raw: &RawImage) -> Result<Self, Error> {
        Self::pair(color_raw, depth_raw, DepthFormat::Redwood)
    }

    pub fn from_tum(color_raw: &RawImage, depth_raw: &RawImage) -> Result<Self, Error> {
        Self::pair(color_raw, depth_raw, DepthFormat::Tum)
    }

    pub fn from_sun(color_raw: &RawImage, depth_raw: &RawImage) -> Result<Self, Error> {
        Self::pair(color_raw, depth_raw, DepthFormat::Sun)
    }

    pub fn from_nyu(color_raw: &RawImage, depth_raw: &RawImage) -> Result<Self, Error> {
        Self::pair(color_raw, depth_raw, DepthFormat::Nyu)
    }

    /// Luminance channel in `[0, 1]`.
    pub fn color(&self) -> &ImageF32 {
        &self.color
    }

    /// Depth channel in meters, `0.0` = no measurement.
    pub fn depth(&self) -> &ImageF32 {
        &self.depth
    }

    pub fn width(&self) -> usize {
        self.color.w
    }

    pub fn height(&self) -> usize {
        self.color.h
    }
}
