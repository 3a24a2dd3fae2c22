//! Generic packed-byte image buffer with a geometry descriptor.
//!
//! `RawImage` carries no semantics: it is the container sensor drivers and
//! dataset loaders fill before handing the bytes to the depth decoder or
//! the color reducer. Layout is row-major, channel-interleaved, with
//! multi-byte channels in native byte order.

use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImage {
    width: usize,
    height: usize,
    num_channels: usize,
    bytes_per_channel: usize,
    data: Vec<u8>,
}

impl RawImage {
    /// Allocate a buffer of exactly `width * height * channels *
    /// bytes_per_channel` bytes. Contents are unspecified by contract
    /// (zeroed in practice).
    pub fn prepare(
        width: usize,
        height: usize,
        num_channels: usize,
        bytes_per_channel: usize,
    ) -> Result<Self, Error> {
        if width == 0 || height == 0 || num_channels == 0 || !matches!(bytes_per_channel, 1 | 2 | 4)
        {
            return Err(Error::InvalidDimension {
                width,
                height,
                channels: num_channels,
                bytes_per_channel,
            });
        }
        let data = vec![0u8; width * height * num_channels * bytes_per_channel];
        Ok(Self {
            width,
            height,
            num_channels,
            bytes_per_channel,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    pub fn bytes_per_channel(&self) -> usize {
        self.bytes_per_channel
    }

    /// Backing bytes, length always `width * height * channels * bpc`.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable backing bytes. The slice cannot change length, so the size
    /// invariant holds; only [`RawImage::prepare`] changes geometry.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, x: usize, y: usize, channel: usize) -> Result<usize, Error> {
        if x >= self.width || y >= self.height || channel >= self.num_channels {
            return Err(Error::IndexOutOfRange { x, y, channel });
        }
        Ok(((y * self.width + x) * self.num_channels + channel) * self.bytes_per_channel)
    }

    fn check_width(&self, requested: usize) -> Result<(), Error> {
        if self.bytes_per_channel != requested {
            return Err(Error::TypeMismatch {
                requested,
                actual: self.bytes_per_channel,
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, x: usize, y: usize, channel: usize) -> Result<u8, Error> {
        self.check_width(1)?;
        let i = self.offset(x, y, channel)?;
        Ok(self.data[i])
    }

    pub fn write_u8(&mut self, x: usize, y: usize, channel: usize, value: u8) -> Result<(), Error> {
        self.check_width(1)?;
        let i = self.offset(x, y, channel)?;
        self.data[i] = value;
        Ok(())
    }

    pub fn read_u16(&self, x: usize, y: usize, channel: usize) -> Result<u16, Error> {
        self.check_width(2)?;
        let i = self.offset(x, y, channel)?;
        Ok(u16::from_ne_bytes([self.data[i], self.data[i + 1]]))
    }

    pub fn write_u16(
        &mut self,
        x: usize,
        y: usize,
        channel: usize,
        value: u16,
    ) -> Result<(), Error> {
        self.check_width(2)?;
        let i = self.offset(x, y, channel)?;
        self.data[i..i + 2].copy_from_slice(&value.to_ne_bytes());
        Ok(())
    }

    pub fn read_f32(&self, x: usize, y: usize, channel: usize) -> Result<f32, Error> {
        self.check_width(4)?;
        let i = self.offset(x, y, channel)?;
        Ok(f32::from_ne_bytes([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    pub fn write_f32(
        &mut self,
        x: usize,
        y: usize,
        channel: usize,
        value: f32,
    ) -> Result<(), Error> {
        self.check_width(4)?;
        let i = self.offset(x, y, channel)?;
        self.data[i..i + 4].copy_from_slice(&value.to_ne_bytes());
        Ok(())
    }
}
