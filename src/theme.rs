//! Light and dark colour schemes.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
/// Stored colour preference.
pub enum Theme {
    /// Light background, dark text.
    Light,
    #[default]
    /// Dark background, light text.
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Colours drawn by the UI for one theme.
pub struct Palette {
    /// Page background.
    pub background: Color,
    /// Body text.
    pub foreground: Color,
    /// Secondary text and inactive controls.
    pub muted: Color,
    /// Headings, the active control and filled skill bars.
    pub primary: Color,
}

impl Theme {
    #[must_use]
    /// Parses `light` or `dark`, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    /// Colours for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::Rgb(250, 250, 250),
                foreground: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                primary: Color::Rgb(37, 99, 235),
            },
            Self::Dark => Palette {
                background: Color::Rgb(9, 9, 11),
                foreground: Color::Rgb(250, 250, 250),
                muted: Color::Rgb(161, 161, 170),
                primary: Color::Rgb(96, 165, 250),
            },
        }
    }
}
