//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Canonical representation shared by decoded depth (meters, with
//! [`INVALID_DEPTH`] marking missing measurements) and reduced color
//! (luminance in `[0, 1]`). Packs to and from the raw byte layout with
//! explicit native-endian routines; this is the only binary layout the
//! core preserves exactly.

/// Sentinel marking a pixel with no depth measurement.
pub const INVALID_DEPTH: f32 = 0.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major pixel vector.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), w * h, "pixel count must match dimensions");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Unpack pixels from tightly packed native-endian f32 bytes.
    pub fn from_ne_bytes(w: usize, h: usize, bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), w * h * 4, "byte count must match dimensions");
        let data = bytes
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Pack pixels into the canonical byte layout: IEEE-754 32-bit floats,
    /// native byte order, tightly packed row-major, no padding.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.w * self.h * 4);
        for &px in &self.data {
            out.extend_from_slice(&px.to_ne_bytes());
        }
        out
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::ImageF32;

    #[test]
    fn byte_packing_round_trips() {
        let img = ImageF32::from_vec(2, 2, vec![0.5, 1.25, -3.0, 0.0]);
        let bytes = img.to_ne_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(ImageF32::from_ne_bytes(2, 2, &bytes), img);
    }

    #[test]
    fn packed_bytes_are_native_endian_row_major() {
        let img = ImageF32::from_vec(2, 1, vec![1.0, 2.0]);
        let mut expected = 1.0f32.to_ne_bytes().to_vec();
        expected.extend_from_slice(&2.0f32.to_ne_bytes());
        assert_eq!(img.to_ne_bytes(), expected);
    }
}
