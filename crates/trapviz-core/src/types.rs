// File: crates/trapviz-core/src/types.rs
// Summary: Shared drawing types and constants (sizes, colors, arrows, text styles).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default surface width in pixels.
pub const WIDTH: u32 = 280;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 280;

/// 8-bit RGBA color. Kept renderer-agnostic; backends convert at the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same argument order as `skia::Color::from_argb`.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "lightblue" | "light-blue" => Self::LIGHT_BLUE,
            "gray" | "grey" => Self::GRAY,
            "yellow" => Self::rgb(255, 255, 0),
            "orange" => Self::rgb(255, 165, 0),
            "transparent" => Self::from_argb(0, 0, 0, 0),
            _ => return None,
        };
        Some(c)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `#rrggbb`, `#rrggbbaa` or one of the named colors.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bad = || Error::invalid_parameter("color", format!("unrecognized color `{s}`"));
        let Some(hex) = s.strip_prefix('#') else {
            return Self::named(s).ok_or_else(bad);
        };
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }
}

impl TryFrom<String> for Color {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_string() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Which ends of a line carry an arrowhead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arrow {
    #[default]
    None,
    First,
    Last,
    Both,
}

impl Arrow {
    pub fn at_start(self) -> bool { matches!(self, Arrow::First | Arrow::Both) }
    pub fn at_end(self) -> bool { matches!(self, Arrow::Last | Arrow::Both) }
}

/// Which point of the text box sits on the anchor position (compass style).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    Center,
    North,
    South,
    East,
    West,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self { family: "DejaVu Sans".to_string(), size: 10.0 }
    }
}

/// Everything a surface needs to place a string.
/// `angle` is counter-clockwise degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font: Font,
    pub angle: f32,
    pub anchor: Anchor,
}

impl TextStyle {
    pub fn new(color: Color) -> Self {
        Self { color, font: Font::default(), angle: 0.0, anchor: Anchor::Center }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("lightblue".parse::<Color>().unwrap(), Color::LIGHT_BLUE);
        assert_eq!("#00000080".parse::<Color>().unwrap(), Color::from_argb(0x80, 0, 0, 0));
        assert!("#12345".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let c = Color::from_argb(96, 64, 160, 255);
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
        assert_eq!(Color::BLUE.to_string(), "#0000ff");
    }
}
