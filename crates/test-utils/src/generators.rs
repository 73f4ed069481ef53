//! Scanline generators for creating synthetic sonar-like rows.
//!
//! These generators create predictable, verifiable sample patterns
//! that can be used across the test suite.

use frames_common::Scanline;

/// A row where every sample has the same value.
pub fn constant_row(width: usize, value: f64) -> Vec<f64> {
    vec![value; width]
}

/// A row rising linearly from `start` to `end` (inclusive).
///
/// # Example
///
/// ```
/// use test_utils::ramp_row;
///
/// let row = ramp_row(5, 0.0, 100.0);
/// assert_eq!(row, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
/// ```
pub fn ramp_row(width: usize, start: f64, end: f64) -> Vec<f64> {
    if width == 1 {
        return vec![start];
    }
    let step = (end - start) / (width - 1) as f64;
    (0..width).map(|i| start + step * i as f64).collect()
}

/// A row alternating between `low` and `high` every sample (Nyquist pattern).
pub fn alternating_row(width: usize, low: f64, high: f64) -> Vec<f64> {
    (0..width)
        .map(|i| if i % 2 == 0 { low } else { high })
        .collect()
}

/// A sine wave with `cycles` periods across the row, centered on `offset`.
pub fn sine_row(width: usize, cycles: f64, amplitude: f64, offset: f64) -> Vec<f64> {
    (0..width)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * cycles * i as f64 / width as f64;
            offset + amplitude * phase.sin()
        })
        .collect()
}

/// `count` ramp rows at depths `first_depth, first_depth + step, ...`.
///
/// Row `n` ramps from `n` to `n + 100` so every row is distinguishable.
pub fn depth_series(count: usize, width: usize, first_depth: f64, step: f64) -> Vec<Scanline> {
    (0..count)
        .map(|n| {
            let base = n as f64;
            Scanline::new(first_depth + step * n as f64, ramp_row(width, base, base + 100.0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        let row = ramp_row(200, 10.0, 20.0);
        assert_eq!(row.len(), 200);
        assert_eq!(row[0], 10.0);
        assert!((row[199] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_alternating() {
        assert_eq!(alternating_row(4, 0.0, 1.0), vec![0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_depth_series() {
        let rows = depth_series(3, 10, 100.0, 0.5);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].depth, 101.0);
        assert_eq!(rows[2].pixels[0], 2.0);
    }
}
