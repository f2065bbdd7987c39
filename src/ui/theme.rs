use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_edit: ColorSpec,
    pub footer_summary: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),        // Blue
            banner: ColorSpec::rgb(187, 154, 247),         // Magenta
            text: ColorSpec::rgb(192, 202, 245),           // Foreground
            text_muted: ColorSpec::rgb(86, 95, 137),       // Comment
            success: ColorSpec::rgb(158, 206, 106),        // Green
            error: ColorSpec::rgb(247, 118, 142),          // Red
            border_active: ColorSpec::rgb(122, 162, 247),  // Blue
            border_normal: ColorSpec::rgb(65, 72, 104),    // Terminal black
            highlight_bg: ColorSpec::rgb(122, 162, 247),   // Blue
            highlight_fg: ColorSpec::rgb(26, 27, 38),      // Background
            footer_edit: ColorSpec::rgb(224, 175, 104),    // Yellow
            footer_summary: ColorSpec::rgb(158, 206, 106), // Green
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(144, 122, 169),       // Iris
            banner: ColorSpec::rgb(180, 99, 122),         // Love
            text: ColorSpec::rgb(87, 82, 121),            // Text
            text_muted: ColorSpec::rgb(152, 147, 165),    // Muted
            success: ColorSpec::rgb(40, 105, 131),        // Pine
            error: ColorSpec::rgb(180, 99, 122),          // Love
            border_active: ColorSpec::rgb(144, 122, 169), // Iris
            border_normal: ColorSpec::rgb(152, 147, 165), // Muted
            highlight_bg: ColorSpec::rgb(86, 148, 159),   // Foam
            highlight_fg: ColorSpec::rgb(250, 244, 237),  // Base
            footer_edit: ColorSpec::rgb(234, 157, 52),    // Gold
            footer_summary: ColorSpec::rgb(40, 105, 131), // Pine
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),        // Purple
            banner: ColorSpec::rgb(255, 121, 198),         // Pink
            text: ColorSpec::rgb(248, 248, 242),           // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),      // Comment
            success: ColorSpec::rgb(80, 250, 123),         // Green
            error: ColorSpec::rgb(255, 85, 85),            // Red
            border_active: ColorSpec::rgb(189, 147, 249),  // Purple
            border_normal: ColorSpec::rgb(68, 71, 90),     // Current line
            highlight_bg: ColorSpec::rgb(139, 233, 253),   // Cyan
            highlight_fg: ColorSpec::rgb(40, 42, 54),      // Background
            footer_edit: ColorSpec::rgb(241, 250, 140),    // Yellow
            footer_summary: ColorSpec::rgb(80, 250, 123),  // Green
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_unknown_theme() {
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, "tokyo-night");
    }

    #[test]
    fn test_color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
