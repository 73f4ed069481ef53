//! Tests for anti-aliased scanline resampling.

use frames_common::FramesError;
use ingestion::Resampler;
use test_utils::{alternating_row, assert_approx_eq, assert_samples_approx_eq, constant_row, ramp_row, sine_row};

// ============================================================================
// Shape and validation
// ============================================================================

#[test]
fn test_output_width() {
    let resampler = Resampler::new(200, 150).unwrap();
    let out = resampler.resample(&ramp_row(200, 0.0, 255.0)).unwrap();
    assert_eq!(out.len(), 150);
}

#[test]
fn test_zero_widths_rejected() {
    assert!(matches!(Resampler::new(0, 150), Err(FramesError::InvalidConfig(_))));
    assert!(matches!(Resampler::new(200, 0), Err(FramesError::InvalidConfig(_))));
}

#[test]
fn test_wrong_row_length_rejected() {
    let resampler = Resampler::new(200, 150).unwrap();
    match resampler.resample(&constant_row(199, 1.0)) {
        Err(FramesError::SchemaMismatch { expected, actual, .. }) => {
            assert_eq!(expected, 200);
            assert_eq!(actual, 199);
        }
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }
}

// ============================================================================
// Value preservation
// ============================================================================

#[test]
fn test_same_width_is_identity() {
    let row = sine_row(200, 7.0, 50.0, 120.0);
    let resampler = Resampler::new(200, 200).unwrap();
    let out = resampler.resample(&row).unwrap();
    assert_samples_approx_eq!(out, row, 1e-12);
}

#[test]
fn test_constant_rows_stay_constant() {
    let resampler = Resampler::new(200, 150).unwrap();
    for value in [0.0, 1.0, 127.5, 255.0, -40.0] {
        let out = resampler.resample(&constant_row(200, value)).unwrap();
        for v in out {
            assert_approx_eq!(v, value, 1e-6);
        }
    }
}

#[test]
fn test_output_stays_within_input_range() {
    let row = sine_row(200, 3.0, 100.0, 0.0);
    let resampler = Resampler::new(200, 150).unwrap();
    let out = resampler.resample(&row).unwrap();

    let min = row.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    for v in out {
        assert!(v >= min - 1e-9 && v <= max + 1e-9, "{} outside [{}, {}]", v, min, max);
    }
}

#[test]
fn test_ramp_keeps_shape() {
    // A linear ramp is preserved away from the mirrored edges.
    let row = ramp_row(200, 0.0, 199.0);
    let resampler = Resampler::new(200, 150).unwrap();
    let out = resampler.resample(&row).unwrap();

    let scale = 200.0 / 150.0;
    for (i, v) in out.iter().enumerate().skip(3).take(144) {
        let expected = (i as f64 + 0.5) * scale - 0.5;
        assert_approx_eq!(*v, expected, 1e-6);
    }
    assert!(out.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_deterministic() {
    let row = sine_row(200, 11.0, 30.0, 90.0);
    let resampler = Resampler::new(200, 150).unwrap();
    assert_eq!(resampler.resample(&row).unwrap(), resampler.resample(&row).unwrap());
}

// ============================================================================
// Anti-aliasing
// ============================================================================

#[test]
fn test_shrinking_damps_nyquist_pattern() {
    // Naive subsampling of a 0/255 alternating row keeps full contrast;
    // the band-limited result must not.
    let row = alternating_row(200, 0.0, 255.0);
    let resampler = Resampler::new(200, 50).unwrap();
    let out = resampler.resample(&row).unwrap();

    let min = out.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = out.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(max - min < 25.0, "contrast {} too high after shrinking", max - min);
    for v in out {
        assert_approx_eq!(v, 127.5, 12.5);
    }
}

#[test]
fn test_target_width_one_is_row_average() {
    let row = ramp_row(200, 0.0, 200.0);
    let resampler = Resampler::new(200, 1).unwrap();
    let out = resampler.resample(&row).unwrap();

    assert_eq!(out.len(), 1);
    // Symmetric weights over a symmetric ramp land on the middle value.
    assert_approx_eq!(out[0], 100.0, 1.0);
}

#[test]
fn test_upsampling() {
    let row = ramp_row(10, 0.0, 9.0);
    let resampler = Resampler::new(10, 40).unwrap();
    let out = resampler.resample(&row).unwrap();

    assert_eq!(out.len(), 40);
    for v in &out {
        assert!(*v >= 0.0 && *v <= 9.0);
    }
    // Interior samples follow the line.
    let scale = 10.0 / 40.0;
    for (i, v) in out.iter().enumerate().skip(2).take(36) {
        assert_approx_eq!(*v, (i as f64 + 0.5) * scale - 0.5, 1e-9);
    }
}
