//! Shared test utilities for the scanline frames workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Scanline generators
//! - Source CSV fixtures
//! - Approximate float assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Elementwise approximate equality of two sample slices.
#[macro_export]
macro_rules! assert_samples_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: &[f64] = &$left;
        let right: &[f64] = &$right;
        assert_eq!(left.len(), right.len(), "sample counts differ");
        for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            if (l - r).abs() > $epsilon {
                panic!(
                    "assertion failed at sample {}: left `{:?}`, right `{:?}`, epsilon `{:?}`",
                    i, l, r, $epsilon
                );
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_assert_samples_approx_eq_passes() {
        assert_samples_approx_eq!(vec![1.0, 2.0], vec![1.0005, 1.9995], 0.001);
    }

    #[test]
    #[should_panic(expected = "sample 1")]
    fn test_assert_samples_approx_eq_fails() {
        assert_samples_approx_eq!(vec![1.0, 2.0], vec![1.0, 2.5], 0.001);
    }
}
