//! Color types and the symbolic color table.
use crate::common::error::{Error, Result};
use std::fmt;

/// Symbolic color names accepted by the editing API, keyed lowercase.
///
/// The table is fixed at compile time; there is no mutation path.
static COLOR_NAMES: phf::Map<&'static str, RGBColor> = phf::phf_map! {
    "blue" => RGBColor::new(0, 112, 192),
    "orange" => RGBColor::new(237, 125, 49),
    "green" => RGBColor::new(112, 173, 71),
    "red" => RGBColor::new(255, 0, 0),
    "black" => RGBColor::new(0, 0, 0),
    "white" => RGBColor::new(255, 255, 255),
    "yellow" => RGBColor::new(255, 192, 0),
};

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the
/// range 0-255.
///
/// # Examples
///
/// ```rust
/// use rambutan::RGBColor;
///
/// let red = RGBColor::new(255, 0, 0);
/// let blue = RGBColor::from_hex("0070C0").unwrap();
/// assert_eq!(red.to_hex(), "FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string (e.g., "FF0000" or "#FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix), as used by `srgbClr` values.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// A color input: either a symbolic name or an explicit RGB triple.
///
/// Call sites usually rely on the `From` conversions rather than naming the
/// variants:
///
/// ```rust
/// use rambutan::{Color, RGBColor};
///
/// let by_name: Color = "red".into();
/// let by_tuple: Color = (255, 0, 0).into();
/// assert_eq!(by_name.normalize().unwrap(), by_tuple.normalize().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// Symbolic name, resolved case-insensitively against the fixed table
    Named(String),
    /// Explicit RGB channel values
    Rgb(u8, u8, u8),
}

impl Color {
    /// Resolve to a canonical RGB value.
    ///
    /// Name lookup is case-insensitive; an unknown name fails with
    /// [`Error::ColorName`]. Explicit triples are wrapped directly; the
    /// `u8` channel type makes out-of-range values unrepresentable.
    pub fn normalize(&self) -> Result<RGBColor> {
        match self {
            Color::Named(name) => {
                let key = name.to_ascii_lowercase();
                COLOR_NAMES
                    .get(key.as_str())
                    .copied()
                    .ok_or_else(|| Error::ColorName(name.clone()))
            },
            Color::Rgb(r, g, b) => Ok(RGBColor::new(*r, *g, *b)),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::Named(name)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<RGBColor> for Color {
    fn from(rgb: RGBColor) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lookup() {
        let blue = Color::from("blue").normalize().unwrap();
        assert_eq!(blue, RGBColor::new(0, 112, 192));
    }

    #[test]
    fn test_case_insensitive() {
        let a = Color::from("Yellow").normalize().unwrap();
        let b = Color::from("YELLOW").normalize().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tuple_matches_name() {
        let by_tuple = Color::from((255, 0, 0)).normalize().unwrap();
        let by_name = Color::from("red").normalize().unwrap();
        assert_eq!(by_tuple, by_name);
    }

    #[test]
    fn test_unknown_name() {
        let err = Color::from("chartreuse").normalize().unwrap_err();
        assert!(matches!(err, Error::ColorName(name) if name == "chartreuse"));
    }

    #[test]
    fn test_hex_round_trip() {
        let c = RGBColor::new(237, 125, 49);
        assert_eq!(RGBColor::from_hex(&c.to_hex()), Some(c));
        assert_eq!(RGBColor::from_hex("#0070C0"), Some(RGBColor::new(0, 112, 192)));
        assert_eq!(RGBColor::from_hex("xyz"), None);
    }
}
