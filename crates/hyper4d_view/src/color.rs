//! Scalar coloring of 4D points
//!
//! A point is reduced to a scalar `t ∈ [0, 1]` according to the active
//! [`ColorMode`], then mapped along the hue wheel from red (`t = 0`) to blue
//! (`t = 1`) at fixed saturation and lightness.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use hyper4d_math::Vector4D;

use crate::ParseModeError;

/// Hue at `t = 1`, in degrees
const HUE_SPAN: f32 = 240.0;
const SATURATION: f32 = 0.8;
const LIGHTNESS: f32 = 0.6;

/// W range assumed when a single point is colored on its own
pub const DEFAULT_W_RANGE: (f32, f32) = (-2.0, 2.0);

/// RGB color with components in `[0, 1]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSL, all components in `[0, 1]`
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        if s == 0.0 {
            return Self::new(l, l, l);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::new(
            hue_channel(p, q, h + 1.0 / 3.0),
            hue_channel(p, q, h),
            hue_channel(p, q, h - 1.0 / 3.0),
        )
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Which scalar drives the color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// `(z + 2) / 4`
    #[default]
    Depth,
    /// W normalized over the range of the point set
    WCoordinate,
    /// `min(|v| / 4, 1)`
    Distance,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Depth, ColorMode::WCoordinate, ColorMode::Distance];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Depth => "depth",
            ColorMode::WCoordinate => "w-coordinate",
            ColorMode::Distance => "distance",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseModeError::new("color", s))
    }
}

/// Maps 4D points to colors
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorMapping4D {
    mode: ColorMode,
}

impl ColorMapping4D {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    /// The normalized scalar for `point`, clamped to `[0, 1]`
    ///
    /// `min_w`/`max_w` only matter in [`ColorMode::WCoordinate`]; a range
    /// narrower than the float epsilon yields 0.5.
    pub fn scalar(&self, point: Vector4D, min_w: f32, max_w: f32) -> f32 {
        let t = match self.mode {
            ColorMode::Depth => (point.z + 2.0) / 4.0,
            ColorMode::WCoordinate => {
                let span = max_w - min_w;
                if span.abs() < f32::EPSILON {
                    0.5
                } else {
                    (point.w - min_w) / span
                }
            }
            ColorMode::Distance => (point.length() / 4.0).min(1.0),
        };
        t.clamp(0.0, 1.0)
    }

    /// Color of a single point
    pub fn color(&self, point: Vector4D, min_w: f32, max_w: f32) -> Color {
        let t = self.scalar(point, min_w, max_w);
        Color::from_hsl(t * HUE_SPAN / 360.0, SATURATION, LIGHTNESS)
    }

    /// Color of a point using [`DEFAULT_W_RANGE`]
    pub fn color_point(&self, point: Vector4D) -> Color {
        self.color(point, DEFAULT_W_RANGE.0, DEFAULT_W_RANGE.1)
    }

    /// Colors for a whole point set, normalizing W over the set's own range
    pub fn color_array(&self, points: &[Vector4D]) -> Vec<Color> {
        let (min_w, max_w) = points.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.w), hi.max(p.w))
        });
        points.iter().map(|&p| self.color(p, min_w, max_w)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_color(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-4 && (a.g - b.g).abs() < 1e-4 && (a.b - b.b).abs() < 1e-4
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(approx_color(Color::from_hsl(0.0, 1.0, 0.5), Color::new(1.0, 0.0, 0.0)));
        assert!(approx_color(Color::from_hsl(1.0 / 3.0, 1.0, 0.5), Color::new(0.0, 1.0, 0.0)));
        assert!(approx_color(Color::from_hsl(2.0 / 3.0, 1.0, 0.5), Color::new(0.0, 0.0, 1.0)));
        assert!(approx_color(Color::from_hsl(0.3, 0.0, 0.25), Color::new(0.25, 0.25, 0.25)));
    }

    #[test]
    fn test_depth_scalar() {
        let c = ColorMapping4D::default();
        assert_eq!(c.scalar(Vector4D::new(0.0, 0.0, 0.0, 0.0), -2.0, 2.0), 0.5);
        assert_eq!(c.scalar(Vector4D::new(0.0, 0.0, -2.0, 0.0), -2.0, 2.0), 0.0);
        assert_eq!(c.scalar(Vector4D::new(0.0, 0.0, 10.0, 0.0), -2.0, 2.0), 1.0);
    }

    #[test]
    fn test_w_scalar_and_degenerate_range() {
        let c = ColorMapping4D::new(ColorMode::WCoordinate);
        assert_eq!(c.scalar(Vector4D::new(0.0, 0.0, 0.0, 1.0), 0.0, 2.0), 0.5);
        assert_eq!(c.scalar(Vector4D::new(0.0, 0.0, 0.0, 3.0), 3.0, 3.0), 0.5);
    }

    #[test]
    fn test_distance_scalar() {
        let c = ColorMapping4D::new(ColorMode::Distance);
        assert_eq!(c.scalar(Vector4D::new(2.0, 0.0, 0.0, 0.0), 0.0, 0.0), 0.5);
        assert_eq!(c.scalar(Vector4D::new(8.0, 0.0, 0.0, 0.0), 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_color_ends_of_gradient() {
        let c = ColorMapping4D::default();
        // t = 0 is red, t = 1 is blue
        let low = c.color_point(Vector4D::new(0.0, 0.0, -2.0, 0.0));
        let high = c.color_point(Vector4D::new(0.0, 0.0, 2.0, 0.0));
        assert!(low.r > low.g && low.r > low.b);
        assert!(high.b > high.r && high.b > high.g);
    }

    #[test]
    fn test_color_array_uses_set_range() {
        let c = ColorMapping4D::new(ColorMode::WCoordinate);
        let points = [Vector4D::new(0.0, 0.0, 0.0, 10.0), Vector4D::new(0.0, 0.0, 0.0, 20.0)];
        let colors = c.color_array(&points);
        assert_eq!(colors.len(), 2);
        assert!(approx_color(colors[0], c.color(points[0], 10.0, 20.0)));
        assert!(colors[1].b > colors[1].r);
    }

    #[test]
    fn test_color_array_empty() {
        assert!(ColorMapping4D::default().color_array(&[]).is_empty());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("w-coordinate".parse(), Ok(ColorMode::WCoordinate));
        assert_eq!("DEPTH".parse(), Ok(ColorMode::Depth));
        assert!("rainbow".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_color_is_pod() {
        let colors = [Color::new(1.0, 0.5, 0.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&colors);
        assert_eq!(bytes.len(), 12);
    }
}
