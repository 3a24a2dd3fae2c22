use rgbd_pyramid::RawImage;

/// 32-bit linear congruential generator (Numerical Recipes constants).
///
/// Fixture inputs are synthesized from fixed seeds so the literal expected
/// byte sequences in the integration tests stay reproducible.
pub struct Lcg(u32);

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.0
    }

    /// Byte in `[lo, hi)`.
    pub fn next_u8_in(&mut self, lo: u8, hi: u8) -> u8 {
        lo + ((self.next() >> 24) as u8) % (hi - lo)
    }

    /// Value in `[0, bound)`.
    pub fn next_u16_below(&mut self, bound: u16) -> u16 {
        ((self.next() >> 16) as u16) % bound
    }

    /// Value in `[0, 1)` with 24 bits of randomness.
    pub fn next_f32(&mut self) -> f32 {
        (self.next() >> 8) as f32 / 16_777_216.0
    }
}

/// 5×5 three-channel 8-bit color frame, bytes in `[130, 200)`.
pub fn color_raw_5x5() -> RawImage {
    let mut raw = RawImage::prepare(5, 5, 3, 1).expect("valid geometry");
    let mut rng = Lcg::new(1);
    for b in raw.data_mut() {
        *b = rng.next_u8_in(130, 200);
    }
    raw
}

/// 5×5 u16 millimeter depth frame in `[0, 8000)`, with a sprinkling of
/// zero (invalid) readings.
pub fn depth_raw_5x5() -> RawImage {
    let mut raw = RawImage::prepare(5, 5, 1, 2).expect("valid geometry");
    let mut rng = Lcg::new(2);
    for y in 0..5 {
        for x in 0..5 {
            let v = rng.next_u16_below(8000);
            let v = if v % 9 == 0 { 0 } else { v };
            raw.write_u16(x, y, 0, v).expect("in bounds");
        }
    }
    raw
}

/// 5×5 already-canonical f32 depth frame in `[0, 1)`.
pub fn direct_raw_5x5() -> RawImage {
    let mut raw = RawImage::prepare(5, 5, 1, 4).expect("valid geometry");
    let mut rng = Lcg::new(3);
    for y in 0..5 {
        for x in 0..5 {
            raw.write_f32(x, y, 0, rng.next_f32()).expect("in bounds");
        }
    }
    raw
}
