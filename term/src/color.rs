//! Colors for attributes
//!
//! The 256-entry indexed palette plus the handful of "dynamic" colors
//! (default fg/bg, cursor, selection) that can be queried and changed
//! independently via OSC. Palette entries are `SrgbaTuple` so that a
//! `ColorOrQuery::Color` payload parsed from an OSC 4/10-19 sequence can
//! be stored and echoed back without any lossy round trip through an
//! 8-bit-per-channel representation.

pub use termwiz::color::RgbColor;
use termwiz::color::SrgbaTuple;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
/// These correspond to the classic ANSI color indices and are
/// used for convenience/readability here in the code
pub enum AnsiColor {
    Black = 0,
    Maroon,
    Green,
    Olive,
    Navy,
    Purple,
    Teal,
    Silver,
    Grey,
    Red,
    Lime,
    Yellow,
    Blue,
    Fuschia,
    Aqua,
    White,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorAttribute {
    Foreground,
    Background,
    PaletteIndex(u8),
    Rgb(RgbColor),
}

/// How the 216-color cube and 24-entry greyscale ramp are derived from
/// the 16 base ANSI colors. `Xterm` reproduces the classic fixed-step
/// xterm ramps; `Base16Lab` instead blends the user's own 16 base colors
/// across the cube so a custom color scheme carries through to the
/// extended palette instead of being overridden by it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PaletteStrategy {
    Xterm,
    Base16Lab,
}

impl Default for PaletteStrategy {
    fn default() -> Self {
        PaletteStrategy::Xterm
    }
}

/// The 256-entry indexed color table. A newtype rather than a bare
/// array so that palette-wide operations (building, installing) have
/// somewhere to live.
#[derive(Debug, Clone, Copy)]
pub struct Palette256(pub [SrgbaTuple; 256]);

impl std::ops::Index<usize> for Palette256 {
    type Output = SrgbaTuple;
    fn index(&self, idx: usize) -> &SrgbaTuple {
        &self.0[idx]
    }
}

impl std::ops::IndexMut<usize> for Palette256 {
    fn index_mut(&mut self, idx: usize) -> &mut SrgbaTuple {
        &mut self.0[idx]
    }
}

const RAMP6: [u8; 6] = [0x00, 0x33, 0x66, 0x99, 0xCC, 0xFF];

const GREYS: [u8; 24] = [
    0x08, 0x12, 0x1c, 0x26, 0x30, 0x3a, 0x44, 0x4e, 0x58, 0x62, 0x6c, 0x76, 0x80, 0x8a, 0x94, 0x9e,
    0xa8, 0xb2, 0xbc, 0xc6, 0xd0, 0xda, 0xe4, 0xee,
];

fn default_ansi16() -> [SrgbaTuple; 16] {
    [
        RgbColor::new_8bpc(0x00, 0x00, 0x00), // Black
        RgbColor::new_8bpc(0xcc, 0x55, 0x55), // Maroon
        RgbColor::new_8bpc(0x55, 0xcc, 0x55), // Green
        RgbColor::new_8bpc(0xcd, 0xcd, 0x55), // Olive
        RgbColor::new_8bpc(0x54, 0x55, 0xcb), // Navy
        RgbColor::new_8bpc(0xcc, 0x55, 0xcc), // Purple
        RgbColor::new_8bpc(0x7a, 0xca, 0xca), // Teal
        RgbColor::new_8bpc(0xcc, 0xcc, 0xcc), // Silver
        RgbColor::new_8bpc(0x55, 0x55, 0x55), // Grey
        RgbColor::new_8bpc(0xff, 0x55, 0x55), // Red
        RgbColor::new_8bpc(0x55, 0xff, 0x55), // Lime
        RgbColor::new_8bpc(0xff, 0xff, 0x55), // Yellow
        RgbColor::new_8bpc(0x55, 0x55, 0xff), // Blue
        RgbColor::new_8bpc(0xff, 0x55, 0xff), // Fuschia
        RgbColor::new_8bpc(0x55, 0xff, 0xff), // Aqua
        RgbColor::new_8bpc(0xff, 0xff, 0xff), // White
    ]
    .map(SrgbaTuple::from)
}

/// Blend two base colors at `t` (0.0..=1.0) in linear light, matching
/// the gamma-aware averaging `RgbColor::to_linear_tuple_rgba` already
/// does for a single color.
fn lerp(a: SrgbaTuple, b: SrgbaTuple, t: f32) -> SrgbaTuple {
    SrgbaTuple(
        a.0 + (b.0 - a.0) * t,
        a.1 + (b.1 - a.1) * t,
        a.2 + (b.2 - a.2) * t,
        1.0,
    )
}

fn build_xterm(base16: &[SrgbaTuple; 16]) -> Palette256 {
    let mut colors = [SrgbaTuple(0., 0., 0., 1.); 256];
    colors[0..16].copy_from_slice(base16);

    for idx in 0..216 {
        let red = RAMP6[idx % 6];
        let green = RAMP6[idx / 6 % 6];
        let blue = RAMP6[idx / 6 / 6 % 6];
        colors[16 + idx] = RgbColor::new_8bpc(red, green, blue).into();
    }

    for (idx, grey) in GREYS.iter().enumerate() {
        colors[232 + idx] = RgbColor::new_8bpc(*grey, *grey, *grey).into();
    }

    Palette256(colors)
}

/// Same cube/greyscale layout as `build_xterm`, but each step is blended
/// towards the user's own black/white (indices 0 and 15) instead of the
/// fixed xterm endpoints, so a dark or light custom scheme keeps the
/// extended palette in its own tonal range.
fn build_base16_lab(base16: &[SrgbaTuple; 16]) -> Palette256 {
    let mut colors = [SrgbaTuple(0., 0., 0., 1.); 256];
    colors[0..16].copy_from_slice(base16);

    let black = base16[0];
    let white = base16[15];

    for idx in 0..216 {
        let r = RAMP6[idx % 6] as f32 / 255.0;
        let g = RAMP6[idx / 6 % 6] as f32 / 255.0;
        let b = RAMP6[idx / 6 / 6 % 6] as f32 / 255.0;
        let lum = (r + g + b) / 3.0;
        let tone = lerp(black, white, lum);
        colors[16 + idx] = SrgbaTuple(
            (tone.0 + r) / 2.0,
            (tone.1 + g) / 2.0,
            (tone.2 + b) / 2.0,
            1.0,
        );
    }

    for (idx, grey) in GREYS.iter().enumerate() {
        let lum = *grey as f32 / 255.0;
        colors[232 + idx] = lerp(black, white, lum);
    }

    Palette256(colors)
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub colors: Palette256,
    pub foreground: SrgbaTuple,
    pub background: SrgbaTuple,
    pub cursor_bg: SrgbaTuple,
    pub cursor_border: SrgbaTuple,
    pub selection_fg: SrgbaTuple,
    pub selection_bg: SrgbaTuple,
    pub strategy: PaletteStrategy,
}

impl ColorPalette {
    /// Builds a palette from a caller-supplied set of 16 base colors
    /// and a cube/greyscale generation strategy, per the `xterm` vs
    /// `base16Lab` palette strategies.
    pub fn build(base16: [SrgbaTuple; 16], strategy: PaletteStrategy) -> Self {
        let colors = match strategy {
            PaletteStrategy::Xterm => build_xterm(&base16),
            PaletteStrategy::Base16Lab => build_base16_lab(&base16),
        };

        let foreground = colors.0[249]; // Grey70
        let background = colors.0[AnsiColor::Black as usize];
        let cursor_bg = RgbColor::new_8bpc(0x52, 0xad, 0x70).into();

        Self {
            colors,
            foreground,
            background,
            cursor_bg,
            cursor_border: cursor_bg,
            selection_fg: background,
            selection_bg: foreground,
            strategy,
        }
    }

    /// Replaces the full 256-entry table in place, leaving the dynamic
    /// colors (fg/bg/cursor/selection) untouched. Used by the embedding
    /// application to install a color scheme loaded from a config file.
    pub fn install_palette(&mut self, colors: &[SrgbaTuple; 256]) {
        self.colors = Palette256(*colors);
    }

    /// Resolves a cell's `ColorAttribute` against this palette and the
    /// pair of default colors currently in force (which may themselves
    /// be the palette's own `foreground`/`background` or an override).
    pub fn resolve(&self, attr: ColorAttribute, default_fg: RgbColor, default_bg: RgbColor) -> RgbColor {
        match attr {
            ColorAttribute::Foreground => default_fg,
            ColorAttribute::Background => default_bg,
            ColorAttribute::PaletteIndex(idx) => self.colors.0[idx as usize].into(),
            ColorAttribute::Rgb(rgb) => rgb,
        }
    }

    /// The color shown for the text cursor block itself.
    pub fn cursor(&self) -> SrgbaTuple {
        self.cursor_bg
    }
}

impl Default for ColorPalette {
    /// Construct a default color palette using the xterm strategy and
    /// the classic 16-color xterm base palette.
    fn default() -> ColorPalette {
        ColorPalette::build(default_ansi16(), PaletteStrategy::Xterm)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_palette_has_216_cube_and_greys() {
        let p = ColorPalette::default();
        assert_eq!(p.colors.0[16], SrgbaTuple::from(RgbColor::new_8bpc(0, 0, 0)));
        assert_eq!(
            p.colors.0[231],
            SrgbaTuple::from(RgbColor::new_8bpc(0xff, 0xff, 0xff))
        );
        let grey = p.colors.0[232];
        assert_eq!(grey.0, grey.1);
        assert_eq!(grey.1, grey.2);
    }

    #[test]
    fn install_palette_replaces_table_only() {
        let mut p = ColorPalette::default();
        let fg_before = p.foreground;
        let mut table = [SrgbaTuple(0., 0., 0., 1.); 256];
        table[1] = SrgbaTuple(1.0, 0.0, 0.0, 1.0);
        p.install_palette(&table);
        assert_eq!(p.colors.0[1], SrgbaTuple(1.0, 0.0, 0.0, 1.0));
        assert_eq!(p.foreground, fg_before);
    }

    #[test]
    fn base16_lab_keeps_black_and_white_anchors() {
        let base = default_ansi16();
        let p = ColorPalette::build(base, PaletteStrategy::Base16Lab);
        assert_eq!(p.colors.0[0], base[0]);
        assert_eq!(p.colors.0[15], base[15]);
    }
}
