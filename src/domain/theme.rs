//! Visual themes.
//!
//! Every theme-dependent color lives in one [`ThemeStyle`] record; callers
//! look the record up once per frame instead of branching on the theme id.

use macroquad::color::Color;

use super::Palette;

/// Available skins, in toggle order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeId {
    #[default]
    Dark,
    Light,
    Win95,
}

impl ThemeId {
    pub fn all() -> [ThemeId; 3] {
        [ThemeId::Dark, ThemeId::Light, ThemeId::Win95]
    }

    /// Stable identifier used for persistence
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
            ThemeId::Win95 => "win95",
        }
    }

    pub fn parse(value: &str) -> Option<ThemeId> {
        Self::all().into_iter().find(|theme| theme.as_str() == value.trim())
    }

    /// Next theme in the toggle cycle
    pub const fn next(self) -> ThemeId {
        match self {
            ThemeId::Dark => ThemeId::Light,
            ThemeId::Light => ThemeId::Win95,
            ThemeId::Win95 => ThemeId::Dark,
        }
    }

    pub fn style(self) -> &'static ThemeStyle {
        match self {
            ThemeId::Dark => &DARK,
            ThemeId::Light => &LIGHT,
            ThemeId::Win95 => &WIN95,
        }
    }
}

/// Everything a frame needs to know about the active theme
#[derive(Debug, PartialEq)]
pub struct ThemeStyle {
    pub name: &'static str,
    pub canvas_background: Color,
    pub canvas_dots: Color,
    pub card_fill: Color,
    pub card_border: Color,
    pub title_bar: Color,
    pub card_title: Color,
    pub card_text: Color,
    pub body_fill: Color,
    pub handle_target: Color,
    pub handle_source: Color,
    pub edge: Color,
    pub life: Palette,
    pub mesh: Color,
    pub panel: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_text: Color,
    /// Retro skin draws hard bevelled edges instead of soft outlines
    pub square_corners: bool,
}

const fn hex(rgb: u32) -> Color {
    Color::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    )
}

const DARK_LIVE: [Color; 5] = [
    hex(0xa7f3d0),
    hex(0x6ee7b7),
    hex(0x10b981),
    hex(0x059669),
    hex(0x047857),
];

const LIGHT_LIVE: [Color; 5] = [
    hex(0xbbf7d0),
    hex(0x86efac),
    hex(0x4ade80),
    hex(0x16a34a),
    hex(0x15803d),
];

const WIN95_LIVE: [Color; 5] = [
    hex(0x0000ff),
    hex(0x000080),
    hex(0x008080),
    hex(0x008000),
    hex(0x808000),
];

static DARK: ThemeStyle = ThemeStyle {
    name: "Dark",
    canvas_background: hex(0x111827),
    canvas_dots: hex(0x374151),
    card_fill: hex(0x1f2937),
    card_border: hex(0x374151),
    title_bar: hex(0x1f2937),
    card_title: hex(0x6ee7b7),
    card_text: hex(0x9ca3af),
    body_fill: hex(0x111827),
    handle_target: hex(0x10b981),
    handle_source: hex(0x3b82f6),
    edge: hex(0x10b981),
    life: Palette {
        dead: hex(0x1f2937),
        live: &DARK_LIVE,
    },
    mesh: hex(0x00ff00),
    panel: hex(0x1f2937),
    button: hex(0x374151),
    button_hover: hex(0x4b5563),
    button_text: hex(0xffffff),
    square_corners: false,
};

static LIGHT: ThemeStyle = ThemeStyle {
    name: "Light",
    canvas_background: hex(0xf3f4f6),
    canvas_dots: hex(0xd1d5db),
    card_fill: hex(0xffffff),
    card_border: hex(0xe5e7eb),
    title_bar: hex(0xffffff),
    card_title: hex(0x047857),
    card_text: hex(0x4b5563),
    body_fill: hex(0xf9fafb),
    handle_target: hex(0x10b981),
    handle_source: hex(0x3b82f6),
    edge: hex(0x059669),
    life: Palette {
        dead: hex(0xe5e7eb),
        live: &LIGHT_LIVE,
    },
    mesh: hex(0x16a34a),
    panel: hex(0xffffff),
    button: hex(0xe5e7eb),
    button_hover: hex(0xd1d5db),
    button_text: hex(0x111827),
    square_corners: false,
};

static WIN95: ThemeStyle = ThemeStyle {
    name: "Win95",
    canvas_background: hex(0x008080),
    canvas_dots: hex(0x006666),
    card_fill: hex(0xc0c0c0),
    card_border: hex(0x000000),
    title_bar: hex(0x000080),
    card_title: hex(0xffffff),
    card_text: hex(0x000000),
    body_fill: hex(0xffffff),
    handle_target: hex(0x000080),
    handle_source: hex(0x800000),
    edge: hex(0x000080),
    life: Palette {
        dead: hex(0xc0c0c0),
        live: &WIN95_LIVE,
    },
    mesh: hex(0x00ff00),
    panel: hex(0xc0c0c0),
    button: hex(0xc0c0c0),
    button_hover: hex(0xdfdfdf),
    button_text: hex(0x000000),
    square_corners: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_ids() {
        for theme in ThemeId::all() {
            assert_eq!(ThemeId::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(ThemeId::parse("solarized"), None);
        assert_eq!(ThemeId::parse(""), None);
    }

    #[test]
    fn test_toggle_cycles_through_every_theme() {
        let mut theme = ThemeId::default();
        assert_eq!(theme, ThemeId::Dark);
        let seen: Vec<_> = (0..3)
            .map(|_| {
                theme = theme.next();
                theme
            })
            .collect();
        assert_eq!(seen, vec![ThemeId::Light, ThemeId::Win95, ThemeId::Dark]);
    }

    #[test]
    fn test_every_style_has_five_live_colors() {
        for theme in ThemeId::all() {
            assert_eq!(theme.style().life.live.len(), 5, "{}", theme.style().name);
        }
    }

    #[test]
    fn test_only_retro_skin_is_square() {
        assert!(ThemeId::Win95.style().square_corners);
        assert!(!ThemeId::Dark.style().square_corners);
    }

    #[test]
    fn test_hex_channels() {
        let c = hex(0xff8000);
        assert_eq!((c.r, c.b, c.a), (1.0, 0.0, 1.0));
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
    }
}
