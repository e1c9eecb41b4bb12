//! Sequential temperature coloring.
//!
//! The palette is the 11-class ColorBrewer RdYlBu scheme, reversed so cold
//! months are blue and hot months red, and interpolated with a uniform cubic
//! B-spline through the stops. The domain is fixed when the scale is built;
//! only the value fed in changes between display modes.

use serde::Serialize;
use std::fmt;
use tmx_core::domain::ValueDomain;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse "#rrggbb".
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// ColorBrewer RdYlBu, 11 classes, red end first.
pub const RD_YL_BU: [Rgb; 11] = [
    Rgb(0xa5, 0x00, 0x26),
    Rgb(0xd7, 0x30, 0x27),
    Rgb(0xf4, 0x6d, 0x43),
    Rgb(0xfd, 0xae, 0x61),
    Rgb(0xfe, 0xe0, 0x90),
    Rgb(0xff, 0xff, 0xbf),
    Rgb(0xe0, 0xf3, 0xf8),
    Rgb(0xab, 0xd9, 0xe9),
    Rgb(0x74, 0xad, 0xd1),
    Rgb(0x45, 0x75, 0xb4),
    Rgb(0x31, 0x36, 0x95),
];

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Uniform B-spline through `values` at `t` in [0, 1].
fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Interpolate the RdYlBu scheme at `t` (0 = red end, 1 = blue end).
pub fn interpolate_rd_yl_bu(t: f64) -> Rgb {
    let r: Vec<f64> = RD_YL_BU.iter().map(|c| c.0 as f64).collect();
    let g: Vec<f64> = RD_YL_BU.iter().map(|c| c.1 as f64).collect();
    let b: Vec<f64> = RD_YL_BU.iter().map(|c| c.2 as f64).collect();
    Rgb(
        to_channel(basis_spline(&r, t)),
        to_channel(basis_spline(&g, t)),
        to_channel(basis_spline(&b, t)),
    )
}

/// Maps temperatures to colors over a fixed global domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: ValueDomain,
}

impl ColorScale {
    pub fn new(domain: ValueDomain) -> Self {
        ColorScale { domain }
    }

    pub fn domain(&self) -> ValueDomain {
        self.domain
    }

    /// Color for `value`, or `None` for NaN. Values outside the domain take
    /// the end colors.
    pub fn color_of(&self, value: f64) -> Option<Rgb> {
        if value.is_nan() {
            return None;
        }
        let span = self.domain.span();
        let t = if span == 0.0 {
            0.5
        } else {
            (value - self.domain.min) / span
        };
        Some(interpolate_rd_yl_bu(1.0 - t.clamp(0.0, 1.0)))
    }

    /// `steps + 1` evenly spaced (offset, color) samples from the low end of
    /// the domain to the high end, for drawing the legend gradient.
    pub fn gradient(&self, steps: usize) -> Vec<(f64, Rgb)> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let color = self
                    .color_of(self.domain.lerp(t))
                    .unwrap_or_else(|| interpolate_rd_yl_bu(1.0 - t));
                (t, color)
            })
            .collect()
    }
}
