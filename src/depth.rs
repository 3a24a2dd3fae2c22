//! Sensor-specific raw depth decoding into canonical meters.
//!
//! The five conventions form a closed set, so the format tag is an enum
//! selecting a decode routine rather than a trait object:
//!
//! | Format  | Raw layout        | Rule                                              |
//! |---------|-------------------|---------------------------------------------------|
//! | Direct  | 1 ch × 4 B f32    | identity copy                                     |
//! | Redwood | 1 ch × 2 B u16 mm | `raw / 1000`                                      |
//! | TUM     | 1 ch × 2 B u16 mm | `raw / 1000`, saturated readings (≥ 4 m) invalid  |
//! | SUN     | 1 ch × 2 B u16 mm | rotate low 3 bits to the top, then as TUM (≥ 7 m) |
//! | NYU     | 1 ch × 2 B u16 mm | opposite byte order, calibration border zeroed    |
//!
//! Invalid measurements come out as [`INVALID_DEPTH`] (`0.0`), never NaN.

use crate::error::Error;
use crate::image::{ImageF32, ImageViewMut, RawImage, INVALID_DEPTH};
use log::debug;

/// All 16-bit formats store millimeters.
const MM_PER_M: f32 = 1000.0;

/// TUM depth cameras saturate around this range; readings at or above it
/// are unreliable and decoded as invalid.
pub const TUM_MAX_DEPTH_M: f32 = 4.0;

/// Saturation cutoff for SUN frames, applied after the bit rotation.
pub const SUN_MAX_DEPTH_M: f32 = 7.0;

/// Kinect calibration crop for NYU frames (640×480 reference): only
/// columns `41..width-39` and rows `45..height-9` carry measurements.
pub const NYU_CROP_LEFT: usize = 41;
pub const NYU_CROP_RIGHT: usize = 39;
pub const NYU_CROP_TOP: usize = 45;
pub const NYU_CROP_BOTTOM: usize = 9;

/// Tag selecting one of the five supported depth encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepthFormat {
    Direct,
    Redwood,
    Tum,
    Sun,
    Nyu,
}

impl DepthFormat {
    /// Map a configuration-level format name to the tag. An unknown name is
    /// the one place the API surfaces [`Error::UnsupportedFormat`].
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "direct" => Ok(Self::Direct),
            "redwood" => Ok(Self::Redwood),
            "tum" => Ok(Self::Tum),
            "sun" => Ok(Self::Sun),
            "nyu" => Ok(Self::Nyu),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Redwood => "redwood",
            Self::Tum => "tum",
            Self::Sun => "sun",
            Self::Nyu => "nyu",
        }
    }
}

/// Decode a raw buffer into canonical depth. Output dimensions always
/// equal the input's; the decoder never resizes.
pub fn decode_depth(raw: &RawImage, format: DepthFormat) -> Result<ImageF32, Error> {
    debug!(
        "decode_depth {}x{} format={}",
        raw.width(),
        raw.height(),
        format.name()
    );
    match format {
        DepthFormat::Direct => decode_direct(raw),
        DepthFormat::Redwood => decode_u16(raw, |v| v as f32 / MM_PER_M),
        DepthFormat::Tum => decode_u16(raw, |v| {
            let d = v as f32 / MM_PER_M;
            if d >= TUM_MAX_DEPTH_M {
                INVALID_DEPTH
            } else {
                d
            }
        }),
        DepthFormat::Sun => decode_u16(raw, |v| {
            // Firmware packs the 3 low bits at the top of the word.
            let rot = (v >> 3) | (v << 13);
            let d = rot as f32 / MM_PER_M;
            if rot == 0 || d >= SUN_MAX_DEPTH_M {
                INVALID_DEPTH
            } else {
                d
            }
        }),
        DepthFormat::Nyu => decode_nyu(raw),
    }
}

fn expect_depth_shape(raw: &RawImage, bytes_per_channel: usize) -> Result<(), Error> {
    if raw.num_channels() != 1 {
        return Err(Error::UnsupportedChannelCount(raw.num_channels()));
    }
    if raw.bytes_per_channel() != bytes_per_channel {
        return Err(Error::TypeMismatch {
            requested: bytes_per_channel,
            actual: raw.bytes_per_channel(),
        });
    }
    Ok(())
}

fn decode_direct(raw: &RawImage) -> Result<ImageF32, Error> {
    expect_depth_shape(raw, 4)?;
    Ok(ImageF32::from_ne_bytes(raw.width(), raw.height(), raw.data()))
}

fn decode_u16(raw: &RawImage, convert: impl Fn(u16) -> f32) -> Result<ImageF32, Error> {
    expect_depth_shape(raw, 2)?;
    let mut out = ImageF32::new(raw.width(), raw.height());
    for (dst, src) in out.data.iter_mut().zip(raw.data().chunks_exact(2)) {
        *dst = convert(u16::from_ne_bytes([src[0], src[1]]));
    }
    Ok(out)
}

fn decode_nyu(raw: &RawImage) -> Result<ImageF32, Error> {
    expect_depth_shape(raw, 2)?;
    let (w, h) = (raw.width(), raw.height());
    let valid_x = NYU_CROP_LEFT..w.saturating_sub(NYU_CROP_RIGHT);
    let valid_y = NYU_CROP_TOP..h.saturating_sub(NYU_CROP_BOTTOM);
    // Border pixels stay invalid regardless of the transmitted value.
    let mut out = ImageF32::new(w, h);
    for y in valid_y {
        let dst = out.row_mut(y);
        let src = &raw.data()[y * w * 2..(y + 1) * w * 2];
        for x in valid_x.clone() {
            let v = u16::from_ne_bytes([src[2 * x], src[2 * x + 1]]).swap_bytes();
            dst[x] = v as f32 / MM_PER_M;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u16_frame(w: usize, h: usize, fill: u16) -> RawImage {
        let mut raw = RawImage::prepare(w, h, 1, 2).expect("valid geometry");
        for y in 0..h {
            for x in 0..w {
                raw.write_u16(x, y, 0, fill).expect("in bounds");
            }
        }
        raw
    }

    #[test]
    fn redwood_scales_millimeters() {
        let mut raw = u16_frame(3, 1, 0);
        raw.write_u16(1, 0, 0, 1500).expect("in bounds");
        raw.write_u16(2, 0, 0, 65535).expect("in bounds");
        let depth = decode_depth(&raw, DepthFormat::Redwood).expect("decodes");
        assert_eq!(depth.get(0, 0), 0.0);
        assert_eq!(depth.get(1, 0), 1.5);
        assert_eq!(depth.get(2, 0), 65.535);
    }

    #[test]
    fn tum_saturates_at_four_meters() {
        let mut raw = u16_frame(3, 1, 0);
        raw.write_u16(0, 0, 0, 3999).expect("in bounds");
        raw.write_u16(1, 0, 0, 4000).expect("in bounds");
        raw.write_u16(2, 0, 0, 9000).expect("in bounds");
        let depth = decode_depth(&raw, DepthFormat::Tum).expect("decodes");
        assert_eq!(depth.get(0, 0), 3.999);
        assert_eq!(depth.get(1, 0), 0.0);
        assert_eq!(depth.get(2, 0), 0.0);
    }

    #[test]
    fn sun_rotates_low_bits_to_top() {
        // 0x0010 >> 3 = 2; low bits are zero so nothing wraps around.
        let raw = u16_frame(1, 1, 0x0010);
        let depth = decode_depth(&raw, DepthFormat::Sun).expect("decodes");
        assert_eq!(depth.get(0, 0), 0.002);

        // 0x0001 rotates to 0x2000 = 8192 mm, beyond the 7 m cutoff.
        let raw = u16_frame(1, 1, 0x0001);
        let depth = decode_depth(&raw, DepthFormat::Sun).expect("decodes");
        assert_eq!(depth.get(0, 0), 0.0);
    }

    #[test]
    fn nyu_swaps_bytes_and_zeroes_border() {
        // 81x55 leaves exactly one pixel inside the calibration crop.
        let mut raw = u16_frame(81, 55, 1000);
        raw.write_u16(41, 45, 0, 0x3412).expect("in bounds");
        let depth = decode_depth(&raw, DepthFormat::Nyu).expect("decodes");
        assert_eq!(depth.get(41, 45), 0x1234 as f32 / 1000.0);
        assert_eq!(depth.get(40, 45), 0.0);
        assert_eq!(depth.get(42, 45), 0.0);
        assert_eq!(depth.get(41, 44), 0.0);
        assert_eq!(depth.get(41, 46), 0.0);
        assert_eq!(depth.get(0, 0), 0.0);
        assert_eq!(depth.get(80, 54), 0.0);
    }

    #[test]
    fn direct_requires_float_shape() {
        let raw = u16_frame(2, 2, 7);
        let err = decode_depth(&raw, DepthFormat::Direct).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                requested: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn sixteen_bit_formats_reject_multichannel_input() {
        let raw = RawImage::prepare(2, 2, 3, 2).expect("valid geometry");
        for format in [DepthFormat::Redwood, DepthFormat::Tum, DepthFormat::Sun, DepthFormat::Nyu]
        {
            assert_eq!(
                decode_depth(&raw, format).unwrap_err(),
                Error::UnsupportedChannelCount(3)
            );
        }
    }

    #[test]
    fn format_names_round_trip() {
        for format in [
            DepthFormat::Direct,
            DepthFormat::Redwood,
            DepthFormat::Tum,
            DepthFormat::Sun,
            DepthFormat::Nyu,
        ] {
            assert_eq!(DepthFormat::from_name(format.name()).expect("known"), format);
        }
        assert_eq!(
            DepthFormat::from_name("kinect2").unwrap_err(),
            Error::UnsupportedFormat("kinect2".to_string())
        );
    }
}
