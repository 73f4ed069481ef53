//! Fixed set of false-color maps from 8-bit intensity to RGB.
//!
//! JET and HOT use matplotlib's per-channel segment tables, COOL is a
//! straight cyan-to-magenta blend, the perceptual maps (VIRIDIS, PLASMA,
//! INFERNO, MAGMA) interpolate nine published anchor colors, and RAINBOW
//! sweeps the HSV hue wheel from red to violet.

use std::fmt;

/// Color value in RGB format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 256-entry lookup table indexed by intensity.
pub type Lut = [Color; 256];

/// Named colormaps accepted by the render endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Colormap {
    #[default]
    Jet,
    Hot,
    Cool,
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Rainbow,
}

impl Colormap {
    pub const ALL: [Colormap; 8] = [
        Colormap::Jet,
        Colormap::Hot,
        Colormap::Cool,
        Colormap::Viridis,
        Colormap::Plasma,
        Colormap::Inferno,
        Colormap::Magma,
        Colormap::Rainbow,
    ];

    /// Upper-case name as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Jet => "JET",
            Colormap::Hot => "HOT",
            Colormap::Cool => "COOL",
            Colormap::Viridis => "VIRIDIS",
            Colormap::Plasma => "PLASMA",
            Colormap::Inferno => "INFERNO",
            Colormap::Magma => "MAGMA",
            Colormap::Rainbow => "RAINBOW",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Lookup that falls back to JET for missing or unknown names.
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        name.and_then(Self::from_name).unwrap_or_default()
    }

    /// Color for a normalized position `t` in `[0, 1]` (clamped).
    pub fn color_at(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        match self.ramp() {
            Ramp::Channels { r, g, b } => Color::new(
                unit_to_u8(eval_segments(r, t)),
                unit_to_u8(eval_segments(g, t)),
                unit_to_u8(eval_segments(b, t)),
            ),
            Ramp::Anchors(anchors) => eval_anchors(anchors, t),
            Ramp::Hue { start, end } => {
                let (r, g, b) = hsv_to_rgb(start + (end - start) * t, 1.0, 1.0);
                Color::new(r, g, b)
            }
        }
    }

    /// Precompute the color for every 8-bit intensity.
    pub fn lut(&self) -> Lut {
        let mut lut = [Color::new(0, 0, 0); 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = self.color_at(i as f64 / 255.0);
        }
        lut
    }

    fn ramp(&self) -> Ramp {
        match self {
            Colormap::Jet => Ramp::Channels {
                r: &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
                g: &[(0.0, 0.0), (0.125, 0.0), (0.375, 1.0), (0.64, 1.0), (0.91, 0.0), (1.0, 0.0)],
                b: &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
            },
            Colormap::Hot => Ramp::Channels {
                r: &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
                g: &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
                b: &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
            },
            Colormap::Cool => Ramp::Channels {
                r: &[(0.0, 0.0), (1.0, 1.0)],
                g: &[(0.0, 1.0), (1.0, 0.0)],
                b: &[(0.0, 1.0), (1.0, 1.0)],
            },
            Colormap::Viridis => Ramp::Anchors(&VIRIDIS_ANCHORS),
            Colormap::Plasma => Ramp::Anchors(&PLASMA_ANCHORS),
            Colormap::Inferno => Ramp::Anchors(&INFERNO_ANCHORS),
            Colormap::Magma => Ramp::Anchors(&MAGMA_ANCHORS),
            Colormap::Rainbow => Ramp::Hue {
                start: 0.0,
                end: 270.0,
            },
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a colormap turns `t` into a color.
enum Ramp {
    /// Piecewise-linear `(x, y)` breakpoints per channel, `x` ascending from 0 to 1.
    Channels {
        r: &'static [(f64, f64)],
        g: &'static [(f64, f64)],
        b: &'static [(f64, f64)],
    },
    /// Evenly spaced colors blended linearly.
    Anchors(&'static [Color]),
    /// Hue sweep in degrees at full saturation and value.
    Hue { start: f64, end: f64 },
}

const VIRIDIS_ANCHORS: [Color; 9] = [
    Color::new(0x44, 0x01, 0x54),
    Color::new(0x47, 0x2d, 0x7b),
    Color::new(0x3b, 0x52, 0x8b),
    Color::new(0x2c, 0x72, 0x8e),
    Color::new(0x21, 0x90, 0x8c),
    Color::new(0x27, 0xad, 0x81),
    Color::new(0x5d, 0xc8, 0x63),
    Color::new(0xaa, 0xdc, 0x32),
    Color::new(0xfd, 0xe7, 0x25),
];

const PLASMA_ANCHORS: [Color; 9] = [
    Color::new(0x0d, 0x08, 0x87),
    Color::new(0x47, 0x03, 0x9f),
    Color::new(0x73, 0x01, 0xa8),
    Color::new(0x9c, 0x17, 0x9e),
    Color::new(0xbd, 0x37, 0x86),
    Color::new(0xd8, 0x57, 0x6b),
    Color::new(0xed, 0x79, 0x53),
    Color::new(0xfa, 0x9e, 0x3b),
    Color::new(0xf0, 0xf9, 0x21),
];

const INFERNO_ANCHORS: [Color; 9] = [
    Color::new(0x00, 0x00, 0x04),
    Color::new(0x1b, 0x0c, 0x42),
    Color::new(0x4b, 0x0c, 0x6b),
    Color::new(0x78, 0x1c, 0x6d),
    Color::new(0xa5, 0x2c, 0x60),
    Color::new(0xcf, 0x44, 0x46),
    Color::new(0xed, 0x69, 0x25),
    Color::new(0xfb, 0x9a, 0x06),
    Color::new(0xfc, 0xff, 0xa4),
];

const MAGMA_ANCHORS: [Color; 9] = [
    Color::new(0x00, 0x00, 0x04),
    Color::new(0x1d, 0x11, 0x47),
    Color::new(0x51, 0x12, 0x7c),
    Color::new(0x82, 0x26, 0x81),
    Color::new(0xb6, 0x36, 0x79),
    Color::new(0xe6, 0x51, 0x64),
    Color::new(0xfb, 0x88, 0x61),
    Color::new(0xfe, 0xc2, 0x87),
    Color::new(0xfc, 0xfd, 0xbf),
];

fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Evaluate piecewise-linear breakpoints at `t`.
fn eval_segments(points: &[(f64, f64)], t: f64) -> f64 {
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return y1;
            }
            return y0 + (y1 - y0) * (t - x0) / span;
        }
    }
    points.last().map(|&(_, y)| y).unwrap_or(0.0)
}

/// Blend evenly spaced anchors at `t`.
fn eval_anchors(anchors: &[Color], t: f64) -> Color {
    let last = anchors.len() - 1;
    let pos = t * last as f64;
    let i = (pos.floor() as usize).min(last.saturating_sub(1));
    let frac = pos - i as f64;
    interpolate_color(anchors[i], anchors[(i + 1).min(last)], frac)
}

/// Linear color interpolation
fn interpolate_color(color1: Color, color2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f64 * t_inv) + (color2.r as f64 * t)).round() as u8,
        ((color1.g as f64 * t_inv) + (color2.g as f64 * t)).round() as u8,
        ((color1.b as f64 * t_inv) + (color2.b as f64 * t)).round() as u8,
    )
}

/// Convert HSV to RGB
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0-1)
/// * `v` - Value/brightness (0-1)
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_segments_endpoints() {
        let pts = [(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)];
        assert_eq!(eval_segments(&pts, 0.0), 0.0);
        assert_eq!(eval_segments(&pts, 0.25), 0.5);
        assert_eq!(eval_segments(&pts, 0.5), 1.0);
        assert_eq!(eval_segments(&pts, 1.0), 0.0);
    }

    #[test]
    fn test_eval_anchors_hits_anchors() {
        assert_eq!(eval_anchors(&VIRIDIS_ANCHORS, 0.0), VIRIDIS_ANCHORS[0]);
        assert_eq!(eval_anchors(&VIRIDIS_ANCHORS, 0.5), VIRIDIS_ANCHORS[4]);
        assert_eq!(eval_anchors(&VIRIDIS_ANCHORS, 1.0), VIRIDIS_ANCHORS[8]);
    }

    #[test]
    fn test_interpolate_color_midpoint() {
        let mid = interpolate_color(Color::new(0, 0, 0), Color::new(255, 100, 10), 0.5);
        assert_eq!(mid, Color::new(128, 50, 5));
    }
}
