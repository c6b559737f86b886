use ratatui::style::Color;

use crate::sources::{DEFAULT_API_URL, default_user_agent};
use crate::state::app_state::DEFAULT_MAX_DESCRIPTION_WORDS;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind cards.
    pub mantle: Color,
    /// Darkest background shade, used as text on accent backgrounds.
    pub crust: Color,
    /// Subtle surface color for inactive buttons.
    pub surface1: Color,
    /// Border color for panels.
    pub surface2: Color,
    /// Muted text for labels and disabled buttons.
    pub overlay1: Color,
    /// Muted text for secondary card lines.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for descriptions.
    pub subtext1: Color,
    /// Interactive accent: links, focused borders, the active page.
    pub sapphire: Color,
    /// Heading accent.
    pub mauve: Color,
    /// Fork counts and the search affordance label.
    pub green: Color,
    /// Star counts, the language marker and advisory notes.
    pub yellow: Color,
    /// Error banner.
    pub red: Color,
    /// Selection highlight.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Repository search endpoint.
    pub api_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Whether the keybinding hint line is shown at the bottom.
    pub show_keybinds_footer: bool,
    /// Word limit for card descriptions.
    pub max_description_words: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
            show_keybinds_footer: true,
            max_description_words: DEFAULT_MAX_DESCRIPTION_WORDS,
        }
    }
}
