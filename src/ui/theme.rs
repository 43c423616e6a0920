use ratatui::style::Color;

use crate::store::ThemeMode;

/// Colours the renderer draws with. One palette per theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,
    pub ok: Color,
    pub warn: Color,
    pub error: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x17, 0x17),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    accent: Color::Rgb(0x3b, 0x82, 0xf6),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
    ok: Color::Rgb(0x22, 0xc5, 0x5e),
    warn: Color::Rgb(0xea, 0xb3, 0x08),
    error: Color::Rgb(0xef, 0x44, 0x44),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
    ok: Color::Rgb(0x16, 0xa3, 0x4a),
    warn: Color::Rgb(0xca, 0x8a, 0x04),
    error: Color::Rgb(0xdc, 0x26, 0x26),
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
