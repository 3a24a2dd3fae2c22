//! Coarse-to-fine RGB-D pyramid construction.
//!
//! Level 0 is the input pair. Each further level optionally smooths the
//! color and depth channels (see [`filters`]) and decimates by 2×, with
//! floor-halved dimensions clamped to 1×1. Derivation is a strict
//! sequential fold over levels; only per-row work inside one level is
//! parallelized.

pub mod filters;

use crate::rgbd::RgbdImage;
use self::filters::{downsample_color, downsample_depth, smooth_color, smooth_depth};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Options controlling pyramid construction.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PyramidOptions {
    /// Number of pyramid levels, level 0 included.
    pub levels: usize,
    /// Apply the binomial smoothing pass before each decimation.
    pub filter_before_downsample: bool,
}

impl Default for PyramidOptions {
    fn default() -> Self {
        Self {
            levels: 4,
            filter_before_downsample: true,
        }
    }
}

/// Ordered sequence of progressively halved RGB-D pairs, finest first.
#[derive(Clone, Debug, Default)]
pub struct Pyramid {
    pub levels: Vec<RgbdImage>,
}

impl Pyramid {
    /// Build exactly `options.levels` pairs from `base` (zero levels yield
    /// an empty pyramid).
    pub fn build(base: &RgbdImage, options: &PyramidOptions) -> Self {
        let mut levels = Vec::with_capacity(options.levels);
        if options.levels == 0 {
            return Self { levels };
        }
        levels.push(base.clone());

        for lvl in 1..options.levels {
            let prev = levels.last().expect("previous level available");
            let filtered = options
                .filter_before_downsample
                .then(|| (smooth_color(prev.color()), smooth_depth(prev.depth())));
            let (color_src, depth_src) = match &filtered {
                Some((c, d)) => (c, d),
                None => (prev.color(), prev.depth()),
            };
            let next =
                RgbdImage::from_parts(downsample_color(color_src), downsample_depth(depth_src))
                    .expect("halved channels share dimensions");
            debug!("pyramid level {lvl}: {}x{}", next.width(), next.height());
            levels.push(next);
        }

        Self { levels }
    }

    pub fn level(&self, index: usize) -> Option<&RgbdImage> {
        self.levels.get(index)
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Image-space scale factor of `level` relative to level 0.
    pub fn scale_for_level(&self, index: usize) -> f32 {
        1.0 / (1u32 << index.min(31)) as f32
    }
}

/// Build a pyramid and return the owned level sequence.
pub fn build_pyramid(
    base: &RgbdImage,
    levels: usize,
    filter_before_downsample: bool,
) -> Vec<RgbdImage> {
    Pyramid::build(
        base,
        &PyramidOptions {
            levels,
            filter_before_downsample,
        },
    )
    .levels
}

/// Pyramid plus build timing, serializable for diagnostics dumps.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PyramidReport {
    #[serde(skip)]
    pub pyramid: Pyramid,
    pub levels: usize,
    pub elapsed_ms: f64,
}

/// Build a pyramid while measuring wall-clock derivation time.
pub fn build_pyramid_timed(base: &RgbdImage, options: &PyramidOptions) -> PyramidReport {
    let start = Instant::now();
    let pyramid = Pyramid::build(base, options);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    PyramidReport {
        levels: pyramid.num_levels(),
        pyramid,
        elapsed_ms,
    }
}
