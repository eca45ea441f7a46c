//! Colors and the dark/light theme flag
//!
//! The theme is owned by the surrounding page (a class on `<body>`); the
//! simulations never look it up themselves. It arrives as an explicit
//! `Theme` argument so the dark-mode difficulty asymmetry is an ordinary,
//! testable function input.

use serde::{Deserialize, Serialize};

use crate::lerp;

/// Presentation theme, toggled by the page. Dark mode also hardens the
/// runner's difficulty constants (see `tuning`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward `other` by `t` in [0, 1]
    pub fn blend(&self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb {
            r: lerp(self.r as f32, other.r as f32, t).round() as u8,
            g: lerp(self.g as f32, other.g as f32, t).round() as u8,
            b: lerp(self.b as f32, other.b as f32, t).round() as u8,
        }
    }

    /// CSS `rgba(...)` string for Canvas2D fill styles
    pub fn css(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Build a color from HSL (hue in degrees, saturation/lightness in [0, 1])
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Rgb {
        let h = h.rem_euclid(360.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Rgb {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }
}

/// Dot grid base color for ambient (non-accent) points
pub const AMBIENT_WHITE: Rgb = Rgb::new(255, 255, 255);

/// Zune HD accent palette: orange, pink, cyan
pub const ACCENT_ORANGE: Rgb = Rgb::new(255, 78, 0);
pub const ACCENT_PINK: Rgb = Rgb::new(236, 0, 140);
pub const ACCENT_CYAN: Rgb = Rgb::new(0, 180, 216);

/// All accent colors, index order matters for `band_color`
pub const ACCENTS: [Rgb; 3] = [ACCENT_ORANGE, ACCENT_PINK, ACCENT_CYAN];

/// Color of a wave band at normalized band depth `t` in (0, 1).
///
/// Front half blends cyan toward pink, back half pink toward orange.
pub fn band_color(t: f32) -> Rgb {
    if t < 0.5 {
        ACCENT_CYAN.blend(ACCENT_PINK, t / 0.5)
    } else {
        ACCENT_PINK.blend(ACCENT_ORANGE, (t - 0.5) / 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 100, 50);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
    }

    #[test]
    fn test_band_color_anchors() {
        assert_eq!(band_color(0.0), ACCENT_CYAN);
        assert_eq!(band_color(0.5), ACCENT_PINK);
        assert_eq!(band_color(1.0), ACCENT_ORANGE);
    }

    #[test]
    fn test_theme_flag_roundtrip() {
        assert!(Theme::from_dark_flag(true).is_dark());
        assert!(!Theme::from_dark_flag(false).is_dark());
    }

    #[test]
    fn test_css_format() {
        assert_eq!(Rgb::new(1, 2, 3).css(0.5), "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn test_from_hsl_primaries() {
        assert_eq!(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsl(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsl(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsl(0.0, 0.0, 1.0), Rgb::new(255, 255, 255));
    }
}
