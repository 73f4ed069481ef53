//! Scanline to false-color PNG.

use frames_common::{FramesError, FramesResult};

use crate::colormap::Colormap;
use crate::png::create_png_rgb;

/// Stretch a row onto `0..=255` using its own min and max.
///
/// Flat rows (and rows with no finite samples) map to all zeros.
/// Non-finite samples do not take part in the min/max and map to 0.
pub fn normalize_to_u8(row: &[f64]) -> Vec<u8> {
    let (min, max) = row
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    // Halved so the span of any two finite values stays finite.
    let (lo, hi) = (min * 0.5, max * 0.5);
    let range = hi - lo;
    if range <= 0.0 {
        return vec![0; row.len()];
    }

    row.iter()
        .map(|&v| {
            if v.is_finite() {
                ((v * 0.5 - lo) / range * 255.0).round().clamp(0.0, 255.0) as u8
            } else {
                0
            }
        })
        .collect()
}

/// Map intensities through `colormap`, producing packed RGB bytes.
pub fn apply_colormap(intensities: &[u8], colormap: Colormap) -> Vec<u8> {
    let lut = colormap.lut();
    let mut rgb = Vec::with_capacity(intensities.len() * 3);
    for &i in intensities {
        let color = lut[i as usize];
        rgb.extend_from_slice(&[color.r, color.g, color.b]);
    }
    rgb
}

/// Render one scanline as a 1-pixel-high RGB PNG.
pub fn colorize(row: &[f64], colormap: Colormap) -> FramesResult<Vec<u8>> {
    if row.is_empty() {
        return Err(FramesError::Render("cannot render an empty scanline".to_string()));
    }

    let intensities = normalize_to_u8(row);
    let rgb = apply_colormap(&intensities, colormap);
    create_png_rgb(&rgb, row.len(), 1).map_err(FramesError::Render)
}
