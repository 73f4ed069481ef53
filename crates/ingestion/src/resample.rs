//! Anti-aliased 1-D resampling of scanlines.
//!
//! A scanline of `source_width` samples is treated as a signal sampled at
//! pixel centers. Output sample `i` is read at source coordinate
//! `(i + 0.5) * scale - 0.5` (with `scale = source_width / target_width`)
//! using linear interpolation. When shrinking, the signal is first
//! low-passed with a Gaussian of sigma `(scale - 1) / 2` so that detail
//! finer than the output spacing does not alias.
//!
//! Both steps are linear, so the combined operator is precomputed once as a
//! sparse list of `(source index, weight)` taps per output sample and then
//! applied to every row.

use frames_common::{FramesError, FramesResult};

/// Gaussian kernels are truncated at this many standard deviations.
const GAUSSIAN_TRUNCATE: f64 = 4.0;

/// Weights below this are dropped from the tap lists.
const MIN_TAP_WEIGHT: f64 = 1e-12;

/// One contribution of a source sample to an output sample.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    index: usize,
    weight: f64,
}

/// Precomputed resampling operator for a fixed pair of widths.
#[derive(Debug, Clone)]
pub struct Resampler {
    source_width: usize,
    target_width: usize,
    taps: Vec<Vec<Tap>>,
}

impl Resampler {
    /// Build the operator mapping `source_width` samples to `target_width`.
    pub fn new(source_width: usize, target_width: usize) -> FramesResult<Self> {
        if source_width == 0 || target_width == 0 {
            return Err(FramesError::InvalidConfig(format!(
                "cannot resample {} samples to {}",
                source_width, target_width
            )));
        }

        let scale = source_width as f64 / target_width as f64;
        let kernel = gaussian_kernel(anti_alias_sigma(scale));
        let radius = (kernel.len() / 2) as isize;

        let mut taps = Vec::with_capacity(target_width);
        let mut weights = vec![0.0f64; source_width];

        for i in 0..target_width {
            weights.iter_mut().for_each(|w| *w = 0.0);

            let src_x = (i as f64 + 0.5) * scale - 0.5;
            let x0 = src_x.floor();
            let dx = src_x - x0;
            let x0 = x0 as isize;

            // Linear interpolation between two (blurred) samples, each of which
            // is itself a kernel-weighted sum of source samples.
            for (pos, lerp) in [(x0, 1.0 - dx), (x0 + 1, dx)] {
                if lerp == 0.0 {
                    continue;
                }
                let center = mirror_index(pos, source_width) as isize;
                for (k, g) in kernel.iter().enumerate() {
                    let idx = mirror_index(center + k as isize - radius, source_width);
                    weights[idx] += lerp * g;
                }
            }

            taps.push(
                weights
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| w.abs() > MIN_TAP_WEIGHT)
                    .map(|(index, &weight)| Tap { index, weight })
                    .collect(),
            );
        }

        Ok(Self {
            source_width,
            target_width,
            taps,
        })
    }

    pub fn source_width(&self) -> usize {
        self.source_width
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    /// Resample one row.
    ///
    /// Fails with `SchemaMismatch` (row 0) if the row is not exactly
    /// `source_width` long; the table builder reports the real row index.
    pub fn resample(&self, row: &[f64]) -> FramesResult<Vec<f64>> {
        if row.len() != self.source_width {
            return Err(FramesError::SchemaMismatch {
                row: 0,
                expected: self.source_width,
                actual: row.len(),
            });
        }

        Ok(self
            .taps
            .iter()
            .map(|taps| taps.iter().map(|t| row[t.index] * t.weight).sum())
            .collect())
    }
}

/// Sigma of the anti-aliasing filter for a given shrink factor.
///
/// Zero when upsampling or keeping the width, which disables the blur.
fn anti_alias_sigma(scale: f64) -> f64 {
    ((scale - 1.0) / 2.0).max(0.0)
}

/// Normalized Gaussian kernel of odd length, centered.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (GAUSSIAN_TRUNCATE * sigma + 0.5) as usize;
    if radius == 0 {
        return vec![1.0];
    }

    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (0..=2 * radius)
        .map(|k| {
            let x = k as f64 - radius as f64;
            (-(x * x) / denom).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    kernel.iter_mut().for_each(|w| *w /= sum);
    kernel
}

/// Reflect an index into `0..len` about the edge samples (`d c b | a b c d | c b a`).
fn mirror_index(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }

    let period = 2 * (len as isize - 1);
    let m = index.rem_euclid(period);
    if m >= len as isize {
        (period - m) as usize
    } else {
        m as usize
    }
}
