//! Color handling for xdot scenes
//!
//! This module provides the [`Color`] type which wraps an sRGB `AlphaColor`
//! from the color crate. Channels are stored as `f32` values in `0.0..=1.0`.
//!
//! Two textual forms are understood:
//! - xdot color payloads ([`Color::from_hex`], [`Color::from_hsv`]) as emitted
//!   by the layout engine inside drawing instructions.
//! - CSS color strings ([`Color::new`]) used by configuration files.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};
use thiserror::Error;

/// Errors produced while decoding a color string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color `{0}`: expected `#RRGGBB` or `#RRGGBBAA`")]
    InvalidHex(String),

    #[error("invalid color `{0}`: expected three HSV components")]
    InvalidHsv(String),

    #[error("invalid color `{input}`: {reason}")]
    InvalidCss { input: String, reason: String },
}

/// Wrapper around an sRGB `AlphaColor` from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: AlphaColor<Srgb>,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let rgba = self.color.to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a].hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xdot_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// assert_eq!(red.red(), 1.0);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        DynamicColor::from_str(color_str)
            .map(|color| Self {
                color: color.to_alpha_color::<Srgb>(),
            })
            .map_err(|err| ColorError::InvalidCss {
                input: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// Create a color from float channels in `0.0..=1.0`.
    pub fn from_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            color: AlphaColor::new([red, green, blue, alpha]),
        }
    }

    /// Opaque black, the fallback for colors that cannot be decoded.
    pub fn black() -> Self {
        Self::from_rgba(0.0, 0.0, 0.0, 1.0)
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::from_rgba(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
            f32::from(alpha) / 255.0,
        )
    }

    /// Decode an xdot hex color: `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The alpha pair is optional. When fewer than eight hex digits follow the
    /// `#`, or the alpha pair is not valid hex, the color is fully opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use xdot_core::color::Color;
    ///
    /// let color = Color::from_hex("#ff000080").unwrap();
    /// assert_eq!(color.red(), 1.0);
    /// assert!((color.alpha() - 128.0 / 255.0).abs() < 1e-6);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };

        let red = channel(0..2).ok_or_else(invalid)?;
        let green = channel(2..4).ok_or_else(invalid)?;
        let blue = channel(4..6).ok_or_else(invalid)?;
        let alpha = channel(6..8).unwrap_or(u8::MAX);

        Ok(Self::from_rgba8(red, green, blue, alpha))
    }

    /// Convert hue, saturation and value (each in `0.0..=1.0`) to an opaque color.
    ///
    /// # Examples
    ///
    /// ```
    /// use xdot_core::color::Color;
    ///
    /// let green = Color::from_hsv(1.0 / 3.0, 1.0, 1.0);
    /// assert!(green.red() < 1e-6);
    /// assert!((green.green() - 1.0).abs() < 1e-6);
    /// ```
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        if saturation == 0.0 {
            return Self::from_rgba(value, value, value, 1.0);
        }

        let scaled = hue * 6.0;
        let sector = scaled.floor();
        let fraction = scaled - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        let (red, green, blue) = match (sector as i64).rem_euclid(6) {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };
        Self::from_rgba(red, green, blue, 1.0)
    }

    /// Parse the textual HSV form used by xdot: `"H,S,V"`, `"H S V"` or any mix
    /// of comma and whitespace separators.
    pub fn from_hsv_str(hsv: &str) -> Result<Self, ColorError> {
        let components = hsv
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(f32::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ColorError::InvalidHsv(hsv.to_string()))?;

        match components.as_slice() {
            [hue, saturation, value] => Ok(Self::from_hsv(*hue, *saturation, *value)),
            _ => Err(ColorError::InvalidHsv(hsv.to_string())),
        }
    }

    /// Creates a new color with the specified alpha value.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let [red, green, blue, _] = self.color.components;
        Self::from_rgba(red, green, blue, alpha)
    }

    /// Returns the red channel in `0.0..=1.0`.
    pub fn red(&self) -> f32 {
        self.color.components[0]
    }

    /// Returns the green channel in `0.0..=1.0`.
    pub fn green(&self) -> f32 {
        self.color.components[1]
    }

    /// Returns the blue channel in `0.0..=1.0`.
    pub fn blue(&self) -> f32 {
        self.color.components[2]
    }

    /// Returns the alpha channel in `0.0..=1.0`, where 1.0 is fully opaque.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the opaque part of this color as `#rrggbb`, suitable for SVG
    /// paint attributes. Transparency is carried separately by [`Self::alpha`].
    pub fn to_hex_rgb(&self) -> String {
        let rgba = self.color.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.color.to_rgba8();
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            rgba.r, rgba.g, rgba.b, rgba.a
        )
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_hex_rgb())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "#000000ff");
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_from_hex_with_alpha() {
        let color = Color::from_hex("#FF000080").unwrap();
        assert!(approx_eq!(f32, color.red(), 1.0, epsilon = 1.0 / 255.0));
        assert_eq!(color.green(), 0.0);
        assert_eq!(color.blue(), 0.0);
        assert!(approx_eq!(f32, color.alpha(), 128.0 / 255.0, epsilon = 1.0 / 255.0));
    }

    #[test]
    fn test_from_hex_without_alpha_is_opaque() {
        let color = Color::from_hex("#00ff00").unwrap();
        assert_eq!(color.green(), 1.0);
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_from_hex_partial_alpha_is_opaque() {
        let color = Color::from_hex("#0000ff8").unwrap();
        assert_eq!(color.blue(), 1.0);
        assert_eq!(color.alpha(), 1.0);

        let color = Color::from_hex("#0000ffzz").unwrap();
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("#ff").is_err());
        assert!(Color::from_hex("ff0000").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn test_from_hsv_primaries() {
        let red = Color::from_hsv(0.0, 1.0, 1.0);
        assert_eq!((red.red(), red.green(), red.blue()), (1.0, 0.0, 0.0));

        let blue = Color::from_hsv(2.0 / 3.0, 1.0, 1.0);
        assert!(approx_eq!(f32, blue.blue(), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, blue.red(), 0.0, epsilon = 1e-6));

        let grey = Color::from_hsv(0.3, 0.0, 0.5);
        assert_eq!((grey.red(), grey.green(), grey.blue()), (0.5, 0.5, 0.5));
    }

    #[test]
    fn test_from_hsv_str_separators() {
        let a = Color::from_hsv_str("0.5,1,1").unwrap();
        let b = Color::from_hsv_str("0.5 1 1").unwrap();
        let c = Color::from_hsv_str("0.5, 1, 1").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(approx_eq!(f32, a.green(), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, a.blue(), 1.0, epsilon = 1e-6));
        assert_eq!(a.alpha(), 1.0);

        assert!(Color::from_hsv_str("0.5 1").is_err());
        assert!(Color::from_hsv_str("a b c").is_err());
    }

    #[test]
    fn test_color_with_alpha() {
        let transparent = Color::black().with_alpha(0.5);
        assert!((transparent.alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_to_hex_rgb() {
        let color = Color::from_rgba8(255, 128, 0, 10);
        assert_eq!(color.to_hex_rgb(), "#ff8000");
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::from_hex("#ff0000").unwrap();
        let color2 = Color::from_rgba8(255, 0, 0, 255);
        let color3 = Color::from_hex("#0000ff").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
