//! Colors for attributes

use num_derive::*;
use serde::{self, Deserialize, Deserializer};
use std::result::Result;

#[derive(Debug, Clone, Copy, FromPrimitive)]
#[repr(u8)]
/// These correspond to the classic ANSI color indices and are
/// used for convenience/readability in code
pub enum AnsiColor {
    /// "Dark" black
    Black = 0,
    /// Dark red
    Maroon,
    /// Dark green
    Green,
    /// "Dark" yellow
    Olive,
    /// Dark blue
    Navy,
    /// Dark purple
    Purple,
    /// "Dark" cyan
    Teal,
    /// "Dark" white
    Silver,
    /// "Bright" black
    Grey,
    /// Bright red
    Red,
    /// Bright green
    Lime,
    /// Bright yellow
    Yellow,
    /// Bright blue
    Blue,
    /// Bright purple
    Fuschia,
    /// Bright Cyan/Aqua
    Aqua,
    /// Bright white
    White,
}

impl From<AnsiColor> for u8 {
    fn from(col: AnsiColor) -> u8 {
        col as u8
    }
}

/// (red, green, blue, alpha) in the 0.0-1.0 range
pub type RgbaTuple = (f32, f32, f32, f32);

fn srgb8_to_linearf32(v: u8) -> f32 {
    let v = v as f32 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linearf32_to_srgb8(v: f32) -> u8 {
    let v = if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

/// Describes a color in the SRGB colorspace using red, green and blue
/// components in the range 0-255.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    /// Construct a color from discrete red, green, blue values
    /// in the range 0-255.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Alias for `new`; named to match the "8 bits per channel" SGR
    /// color specs that carry this value around as a `ColorSpec`.
    pub fn new_8bpc(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue)
    }

    /// Returns the color as (r, g, b, a) in linear colorspace, 0.0-1.0
    pub fn to_linear_tuple_rgba(&self) -> RgbaTuple {
        (
            srgb8_to_linearf32(self.red),
            srgb8_to_linearf32(self.green),
            srgb8_to_linearf32(self.blue),
            1.0,
        )
    }

    /// Returns the color as (r, g, b, a) in gamma-encoded sRGB, 0.0-1.0
    pub fn to_tuple_rgba(&self) -> RgbaTuple {
        (
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
            1.0,
        )
    }

    /// Construct a color from an SVG/CSS3 color name.
    /// Returns None if the supplied name is not recognized.
    pub fn from_named(name: &str) -> Option<RgbColor> {
        named_colors::lookup(&name.to_ascii_lowercase())
    }

    /// Construct a color from a string of the form `#RRGGBB` where
    /// R, G and B are all hex digits.
    pub fn from_rgb_str(s: &str) -> Option<RgbColor> {
        if s.as_bytes().first() == Some(&b'#') && s.len() == 7 {
            let mut chars = s.chars().skip(1);

            macro_rules! digit {
                () => {{
                    let hi = match chars.next().unwrap().to_digit(16) {
                        Some(v) => (v as u8) << 4,
                        None => return None,
                    };
                    let lo = match chars.next().unwrap().to_digit(16) {
                        Some(v) => v as u8,
                        None => return None,
                    };
                    hi | lo
                }};
            }
            Some(Self::new(digit!(), digit!(), digit!()))
        } else {
            None
        }
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D>(deserializer: D) -> Result<RgbColor, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RgbColor::from_rgb_str(&s)
            .or_else(|| RgbColor::from_named(&s))
            .ok_or_else(|| format!("unknown color name: {}", s))
            .map_err(serde::de::Error::custom)
    }
}

/// An (r, g, b, a) color in the range 0.0-1.0, as reported/accepted by the
/// xterm dynamic color (OSC 4/10-19) protocol, which allows an alpha
/// channel that plain `RgbColor` doesn't carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrgbaTuple(pub f32, pub f32, pub f32, pub f32);

impl SrgbaTuple {
    pub fn to_srgb_u8(self) -> (u8, u8, u8, u8) {
        (
            (self.0.max(0.0).min(1.0) * 255.0).round() as u8,
            (self.1.max(0.0).min(1.0) * 255.0).round() as u8,
            (self.2.max(0.0).min(1.0) * 255.0).round() as u8,
            (self.3.max(0.0).min(1.0) * 255.0).round() as u8,
        )
    }

    /// Parses the xterm `rgb:RRRR/GGGG/BBBB` and CSS-style `#RRGGBB`
    /// forms used in dynamic color OSC replies and requests.
    pub fn parse_x11(s: &str) -> Option<Self> {
        if let Some(rest) = s.strip_prefix("rgb:") {
            let mut chans = rest.split('/');
            let r = chans.next()?;
            let g = chans.next()?;
            let b = chans.next()?;
            if chans.next().is_some() {
                return None;
            }
            let scale = |c: &str| -> Option<f32> {
                let value = u32::from_str_radix(c, 16).ok()?;
                let max = (1u32 << (4 * c.len())) - 1;
                Some(value as f32 / max as f32)
            };
            return Some(Self(scale(r)?, scale(g)?, scale(b)?, 1.0));
        }
        RgbColor::from_rgb_str(s)
            .or_else(|| RgbColor::from_named(s))
            .map(Self::from)
    }
}

impl From<(u8, u8, u8, u8)> for SrgbaTuple {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }
}

impl From<RgbColor> for SrgbaTuple {
    fn from(c: RgbColor) -> Self {
        let (r, g, b, a) = c.to_tuple_rgba();
        Self(r, g, b, a)
    }
}

impl From<SrgbaTuple> for RgbColor {
    fn from(c: SrgbaTuple) -> Self {
        let (r, g, b, _a) = c.to_srgb_u8();
        Self::new(r, g, b)
    }
}

impl std::fmt::Display for SrgbaTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (r, g, b, _a) = self.to_srgb_u8();
        write!(
            f,
            "rgb:{:02x}{:02x}/{:02x}{:02x}/{:02x}{:02x}",
            r, r, g, g, b, b
        )
    }
}

/// An index into the fixed color palette.
pub type PaletteIndex = u8;

/// Specifies the color to be used when rendering a cell.
/// This differs from `ColorAttribute` in that this type can only
/// specify one of the possible color types at once, whereas the
/// `ColorAttribute` type can specify a TrueColor value and a fallback.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorSpec {
    Default,
    /// Use either a raw number, or use values from the `AnsiColor` enum
    PaletteIndex(PaletteIndex),
    TrueColor(RgbColor),
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Default
    }
}

impl From<AnsiColor> for ColorSpec {
    fn from(col: AnsiColor) -> Self {
        ColorSpec::PaletteIndex(col as u8)
    }
}

impl From<RgbColor> for ColorSpec {
    fn from(col: RgbColor) -> Self {
        ColorSpec::TrueColor(col)
    }
}

impl From<SrgbaTuple> for ColorSpec {
    fn from(col: SrgbaTuple) -> Self {
        ColorSpec::TrueColor(col.into())
    }
}

/// Specifies the color to be used when rendering a cell.  This is the
/// type used in the `CellAttributes` struct and can specify an optional
/// TrueColor value, allowing a fallback to a more traditional palette
/// index if TrueColor is not available.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorAttribute {
    /// Use RgbColor when supported, falling back to the specified PaletteIndex.
    TrueColorWithPaletteFallback(RgbColor, PaletteIndex),
    /// Use RgbColor when supported, falling back to the default color
    TrueColorWithDefaultFallback(RgbColor),
    /// Use the specified PaletteIndex
    PaletteIndex(PaletteIndex),
    /// Use the default color
    Default,
}

impl Default for ColorAttribute {
    fn default() -> Self {
        ColorAttribute::Default
    }
}

impl From<AnsiColor> for ColorAttribute {
    fn from(col: AnsiColor) -> Self {
        ColorAttribute::PaletteIndex(col as u8)
    }
}

impl From<ColorSpec> for ColorAttribute {
    fn from(spec: ColorSpec) -> Self {
        match spec {
            ColorSpec::Default => ColorAttribute::Default,
            ColorSpec::PaletteIndex(idx) => ColorAttribute::PaletteIndex(idx),
            ColorSpec::TrueColor(color) => ColorAttribute::TrueColorWithDefaultFallback(color),
        }
    }
}

/// A small, hand-maintained subset of the SVG/CSS3 extended color
/// keywords. Not exhaustive; covers the names that show up in terminal
/// themes and test fixtures in practice.
mod named_colors {
    use super::RgbColor;

    macro_rules! table {
        ($($name:expr => ($r:expr, $g:expr, $b:expr)),* $(,)?) => {
            pub(super) fn lookup(name: &str) -> Option<RgbColor> {
                match name {
                    $($name => Some(RgbColor::new($r, $g, $b)),)*
                    _ => None,
                }
            }
        };
    }

    table! {
        "black" => (0x00, 0x00, 0x00),
        "white" => (0xff, 0xff, 0xff),
        "red" => (0xff, 0x00, 0x00),
        "green" => (0x00, 0x80, 0x00),
        "darkgreen" => (0x00, 0x64, 0x00),
        "blue" => (0x00, 0x00, 0xff),
        "yellow" => (0xff, 0xff, 0x00),
        "orange" => (0xff, 0xa5, 0x00),
        "purple" => (0x80, 0x00, 0x80),
        "cyan" => (0x00, 0xff, 0xff),
        "magenta" => (0xff, 0x00, 0xff),
        "gray" => (0x80, 0x80, 0x80),
        "grey" => (0x80, 0x80, 0x80),
        "silver" => (0xc0, 0xc0, 0xc0),
        "navy" => (0x00, 0x00, 0x80),
        "teal" => (0x00, 0x80, 0x80),
        "olive" => (0x80, 0x80, 0x00),
        "maroon" => (0x80, 0x00, 0x00),
        "lime" => (0x00, 0xff, 0x00),
        "pink" => (0xff, 0xc0, 0xcb),
        "brown" => (0xa5, 0x2a, 0x2a),
        "gold" => (0xff, 0xd7, 0x00),
        "indigo" => (0x4b, 0x00, 0x82),
        "violet" => (0xee, 0x82, 0xee),
        "transparent" => (0x00, 0x00, 0x00),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn named_rgb() {
        let dark_green = RgbColor::from_named("DarkGreen").unwrap();
        assert_eq!(dark_green.red, 0);
        assert_eq!(dark_green.green, 0x64);
        assert_eq!(dark_green.blue, 0);
    }

    #[test]
    fn x11_rgb_roundtrip() {
        let c = SrgbaTuple::parse_x11("rgb:aaaa/3737/3131").expect("x11 color parses");
        let (r, g, b, _a) = c.to_srgb_u8();
        assert_eq!((r, g, b), (0xaa, 0x37, 0x31));
    }
}
