//! Application-wide color palettes
//!
//! The dashboard has two schemes, light and dark. Frontends read every color
//! from an [`AppTheme`] so the toggle recolors the whole screen at once.

use crate::data::Theme;
use ratatui::style::Color;

/// Complete set of UI colors for one scheme
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: &'static str,

    // Canvas and chrome
    pub background: Color,
    pub canvas_dots: Color,
    pub header_background: Color,
    pub header_text: Color,

    // Widget cards
    pub card_background: Color,
    pub card_title: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Controls
    pub button: Color,
    pub button_text: Color,
    pub input_background: Color,
    pub selection: Color,

    // Status/Indicator colors
    pub status_success: Color,
    pub status_error: Color,
    pub track: Color,
}

impl AppTheme {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light",
            background: Color::Rgb(249, 250, 251),
            canvas_dots: Color::Rgb(229, 231, 235),
            header_background: Color::Rgb(255, 255, 255),
            header_text: Color::Rgb(17, 24, 39),
            card_background: Color::Rgb(255, 255, 255),
            card_title: Color::Rgb(17, 24, 39),
            text_primary: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(75, 85, 99),
            text_muted: Color::Rgb(156, 163, 175),
            button: Color::Rgb(59, 130, 246),
            button_text: Color::White,
            input_background: Color::Rgb(243, 244, 246),
            selection: Color::Rgb(219, 234, 254),
            status_success: Color::Rgb(22, 163, 74),
            status_error: Color::Rgb(220, 38, 38),
            track: Color::Rgb(229, 231, 235),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark",
            background: Color::Rgb(17, 24, 39),
            canvas_dots: Color::Rgb(55, 65, 81),
            header_background: Color::Rgb(31, 41, 55),
            header_text: Color::Rgb(249, 250, 251),
            card_background: Color::Rgb(31, 41, 55),
            card_title: Color::Rgb(249, 250, 251),
            text_primary: Color::Rgb(243, 244, 246),
            text_secondary: Color::Rgb(209, 213, 219),
            text_muted: Color::Rgb(107, 114, 128),
            button: Color::Rgb(37, 99, 235),
            button_text: Color::White,
            input_background: Color::Rgb(55, 65, 81),
            selection: Color::Rgb(30, 58, 138),
            status_success: Color::Rgb(74, 222, 128),
            status_error: Color::Rgb(248, 113, 113),
            track: Color::Rgb(55, 65, 81),
        }
    }

    /// Toolbar glyph for switching to the other scheme
    pub fn toggle_icon(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

/// Parse `#RRGGBB` into a terminal color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Widget accent color, falling back to the theme's button color
pub fn accent_color(hex: &str, theme: &AppTheme) -> Color {
    parse_hex_color(hex).unwrap_or(theme.button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3B82F6"), Some(Color::Rgb(59, 130, 246)));
        assert_eq!(parse_hex_color("#10b981"), Some(Color::Rgb(16, 185, 129)));
        assert_eq!(parse_hex_color("3B82F6"), None);
        assert_eq!(parse_hex_color("#3B82F"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_invalid_accent_falls_back() {
        let theme = AppTheme::dark();
        assert_eq!(accent_color("blue", &theme), theme.button);
    }

    #[test]
    fn test_schemes_differ() {
        assert_ne!(
            AppTheme::for_theme(Theme::Light).background,
            AppTheme::for_theme(Theme::Dark).background
        );
        assert_eq!(AppTheme::toggle_icon(Theme::Light), "☾");
    }
}
