// Theme system for the TUI
//
// Two color modes (light and dark) that can be flipped at runtime. Each
// mode resolves the same set of named tokens to concrete colors; all
// derived styles re-resolve from the active mode on the next frame.

use ratatui::style::{Color, Modifier, Style};

/// Binary color mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    /// Flip between light and dark
    pub fn toggle(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Light => "Light",
            ColorMode::Dark => "Dark",
        }
    }

    /// Parse a mode name; anything other than "light" falls back to dark
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            ColorMode::Light
        } else {
            ColorMode::Dark
        }
    }

    /// Get the theme for this mode
    pub fn theme(&self) -> Theme {
        match self {
            ColorMode::Light => Theme::light(),
            ColorMode::Dark => Theme::dark(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub muted: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Accent (the "green.500"-style token the demo surfaces)
    pub accent: Color,

    // Disclosure panel
    pub panel_bg: Color,
    pub panel_fg: Color,

    // Toast severities
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark mode palette
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(26, 32, 44),
            fg: Color::Rgb(237, 242, 247),
            border: Color::Rgb(74, 85, 104),
            muted: Color::Rgb(160, 174, 192),

            title: Color::Rgb(129, 230, 217),
            status_bar: Color::Rgb(104, 211, 145),

            accent: Color::Rgb(104, 211, 145),

            panel_bg: Color::Rgb(49, 151, 149),
            panel_fg: Color::Rgb(255, 255, 255),

            success: Color::Rgb(104, 211, 145),
            error: Color::Rgb(252, 129, 129),
        }
    }

    /// Light mode palette
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(247, 250, 252),
            fg: Color::Rgb(26, 32, 44),
            border: Color::Rgb(160, 174, 192),
            muted: Color::Rgb(113, 128, 150),

            title: Color::Rgb(44, 122, 123),
            status_bar: Color::Rgb(47, 133, 90),

            accent: Color::Rgb(56, 161, 105),

            panel_bg: Color::Rgb(49, 151, 149),
            panel_fg: Color::Rgb(255, 255, 255),

            success: Color::Rgb(47, 133, 90),
            error: Color::Rgb(197, 48, 48),
        }
    }

    /// Resolve a semantic token name to its concrete color
    ///
    /// Mirrors token lookup in component libraries: the same name yields a
    /// different color per mode.
    pub fn token(&self, name: &str) -> Option<Color> {
        match name {
            "fg" => Some(self.fg),
            "bg" => Some(self.bg),
            "border" => Some(self.border),
            "muted" => Some(self.muted),
            "title" => Some(self.title),
            "accent" => Some(self.accent),
            "panel.bg" => Some(self.panel_bg),
            "panel.fg" => Some(self.panel_fg),
            "success" => Some(self.success),
            "error" => Some(self.error),
            _ => None,
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Dimmed style for hints and placeholders
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Accent style for highlighted values
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

/// Format an RGB color as a CSS-style hex string for display
///
/// Named/indexed colors have no fixed RGB value, so they render as their
/// debug name instead.
pub fn color_hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_a_two_state_cycle() {
        let mode = ColorMode::Light;
        assert_eq!(mode.toggle(), ColorMode::Dark);
        assert_eq!(mode.toggle().toggle(), ColorMode::Light);
    }

    #[test]
    fn light_and_dark_derive_different_colors() {
        let light = Theme::light();
        let dark = Theme::dark();
        assert_ne!(light.fg, dark.fg);
        assert_ne!(light.bg, dark.bg);
        // Foreground and background swap roles between modes
        assert_eq!(light.fg, dark.bg);
    }

    #[test]
    fn token_lookup_resolves_per_mode() {
        let light = Theme::light();
        let dark = Theme::dark();
        assert_eq!(light.token("accent"), Some(light.accent));
        assert_ne!(light.token("accent"), dark.token("accent"));
        assert_eq!(light.token("no-such-token"), None);
    }

    #[test]
    fn mode_names_parse() {
        assert_eq!(ColorMode::from_name("light"), ColorMode::Light);
        assert_eq!(ColorMode::from_name("LIGHT"), ColorMode::Light);
        assert_eq!(ColorMode::from_name("dark"), ColorMode::Dark);
        // Unknown names fall back to dark
        assert_eq!(ColorMode::from_name("solarized"), ColorMode::Dark);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(color_hex(Color::Rgb(56, 161, 105)), "#38A169");
        assert_eq!(color_hex(Color::Reset), "Reset");
    }
}
