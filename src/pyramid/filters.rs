//! Smoothing and decimation kernels for pyramid construction.
//!
//! Color uses a separable 3-tap binomial with borders clamped to the image
//! extents. Depth uses the same binomial weights in a validity-masked 3×3
//! window: samples equal to the `0.0` sentinel are excluded from the
//! weighted average, and a window with no valid sample stays invalid.
//! Decimation is a 2×2 box mean (valid-sample mean for depth).

use crate::image::{ImageF32, ImageView, INVALID_DEPTH};
use rayon::prelude::*;

/// Normalised 3-tap binomial filter `[1, 2, 1] / 4`.
pub const BINOMIAL_3TAP: [f32; 3] = [0.25, 0.5, 0.25];

/// Unnormalised 3×3 binomial weights for the masked depth pass. The
/// normalisation constant cancels against the accumulated weight sum.
const BINOMIAL_3X3: [[f32; 3]; 3] = [[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]];

/// Floor-halved dimension, clamped so a pyramid never drops below 1×1.
#[inline]
pub fn halved(dim: usize) -> usize {
    (dim / 2).max(1)
}

/// Separable binomial smoothing of a luminance image.
pub fn smooth_color(src: &ImageF32) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut tmp = ImageF32::new(w, h);
    tmp.data.par_chunks_mut(w).enumerate().for_each(|(y, dst)| {
        let row = src.row(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let xm = x.saturating_sub(1);
            let xp = (x + 1).min(w - 1);
            *px = BINOMIAL_3TAP[0] * row[xm] + BINOMIAL_3TAP[1] * row[x] + BINOMIAL_3TAP[2] * row[xp];
        }
    });

    let mut out = ImageF32::new(w, h);
    out.data.par_chunks_mut(w).enumerate().for_each(|(y, dst)| {
        let ym = y.saturating_sub(1);
        let yp = (y + 1).min(h - 1);
        let (top, mid, bot) = (tmp.row(ym), tmp.row(y), tmp.row(yp));
        for (x, px) in dst.iter_mut().enumerate() {
            *px = BINOMIAL_3TAP[0] * top[x] + BINOMIAL_3TAP[1] * mid[x] + BINOMIAL_3TAP[2] * bot[x];
        }
    });
    out
}

/// Validity-masked binomial smoothing of a depth image.
pub fn smooth_depth(src: &ImageF32) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut out = ImageF32::new(w, h);
    out.data.par_chunks_mut(w).enumerate().for_each(|(y, dst)| {
        for (x, px) in dst.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            let mut weight = 0.0f32;
            for (dy, taps) in BINOMIAL_3X3.iter().enumerate() {
                let sy = (y + dy).saturating_sub(1).min(h - 1);
                let row = src.row(sy);
                for (dx, &tap) in taps.iter().enumerate() {
                    let sx = (x + dx).saturating_sub(1).min(w - 1);
                    let v = row[sx];
                    if v > INVALID_DEPTH {
                        sum += tap * v;
                        weight += tap;
                    }
                }
            }
            *px = if weight > 0.0 {
                sum / weight
            } else {
                INVALID_DEPTH
            };
        }
    });
    out
}

/// 2×2 box-mean decimation of a luminance image.
pub fn downsample_color(src: &ImageF32) -> ImageF32 {
    let (nw, nh) = (halved(src.w), halved(src.h));
    let mut out = ImageF32::new(nw, nh);
    for y in 0..nh {
        let y0 = (2 * y).min(src.h - 1);
        let y1 = (2 * y + 1).min(src.h - 1);
        for x in 0..nw {
            let x0 = (2 * x).min(src.w - 1);
            let x1 = (2 * x + 1).min(src.w - 1);
            let sum = src.get(x0, y0) + src.get(x1, y0) + src.get(x0, y1) + src.get(x1, y1);
            out.set(x, y, sum / 4.0);
        }
    }
    out
}

/// 2×2 decimation of a depth image averaging only valid samples; a block
/// with no valid sample stays invalid.
pub fn downsample_depth(src: &ImageF32) -> ImageF32 {
    let (nw, nh) = (halved(src.w), halved(src.h));
    let mut out = ImageF32::new(nw, nh);
    for y in 0..nh {
        let y0 = (2 * y).min(src.h - 1);
        let y1 = (2 * y + 1).min(src.h - 1);
        for x in 0..nw {
            let x0 = (2 * x).min(src.w - 1);
            let x1 = (2 * x + 1).min(src.w - 1);
            let mut sum = 0.0f32;
            let mut count = 0usize;
            for v in [
                src.get(x0, y0),
                src.get(x1, y0),
                src.get(x0, y1),
                src.get(x1, y1),
            ] {
                if v > INVALID_DEPTH {
                    sum += v;
                    count += 1;
                }
            }
            let mean = if count > 0 {
                sum / count as f32
            } else {
                INVALID_DEPTH
            };
            out.set(x, y, mean);
        }
    }
    out
}
