//! Color reduction to canonical luminance.
//!
//! 1-channel input is normalized to `[0, 1]`; 3-channel input is reduced
//! with the ITU-R BT.601 luma weights. The reduction is independent of the
//! depth format and pinned by literal fixture bytes in `tests/decode.rs`.

use crate::error::Error;
use crate::image::{ImageF32, RawImage};

/// ITU-R BT.601 luma weights (sum to 1).
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Reduce an 8-bit 1- or 3-channel buffer to canonical luminance.
pub fn reduce_color(raw: &RawImage) -> Result<ImageF32, Error> {
    if raw.bytes_per_channel() != 1 {
        return Err(Error::TypeMismatch {
            requested: 1,
            actual: raw.bytes_per_channel(),
        });
    }
    let mut out = ImageF32::new(raw.width(), raw.height());
    match raw.num_channels() {
        1 => {
            for (dst, &src) in out.data.iter_mut().zip(raw.data()) {
                *dst = src as f32 / 255.0;
            }
        }
        3 => {
            for (dst, px) in out.data.iter_mut().zip(raw.data().chunks_exact(3)) {
                let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
                *dst = (LUMA_R * r + LUMA_G * g + LUMA_B * b) / 255.0;
            }
        }
        n => return Err(Error::UnsupportedChannelCount(n)),
    }
    Ok(out)
}
