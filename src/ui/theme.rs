//! UI theme definitions.

use egui::{Color32, Visuals};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(2, 6, 23);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(15, 23, 42);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(30, 41, 59);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(248, 250, 252);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
    /// Muted text
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 116, 139);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Overlay stroke color (sky blue)
    pub const OVERLAY: Color32 = Color32::from_rgb(14, 165, 233);
    /// Success color (emerald)
    pub const SUCCESS: Color32 = Color32::from_rgb(52, 211, 153);
    /// Warning color (yellow)
    pub const WARNING: Color32 = Color32::from_rgb(250, 204, 21);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(51, 65, 85);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(248, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(241, 245, 249);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(71, 85, 105);
    /// Muted text
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 163, 184);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
    /// Overlay stroke color (sky blue)
    pub const OVERLAY: Color32 = Color32::from_rgb(2, 132, 199);
    /// Success color (emerald)
    pub const SUCCESS: Color32 = Color32::from_rgb(5, 150, 105);
    /// Warning color (yellow)
    pub const WARNING: Color32 = Color32::from_rgb(202, 138, 4);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(44, 57, 80);
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(226, 232, 240);
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

/// Badge colors for list entries.
pub mod badge_colors {
    use crate::data::{MenuType, RaceType};
    use egui::Color32;

    /// Get the badge color for a training menu type.
    pub fn menu_type_color(menu_type: MenuType) -> Color32 {
        match menu_type {
            MenuType::Ftp => Color32::from_rgb(250, 204, 21),
            MenuType::Vo2max => Color32::from_rgb(248, 113, 113),
            MenuType::Endurance => Color32::from_rgb(96, 165, 250),
            MenuType::Recovery => Color32::from_rgb(52, 211, 153),
        }
    }

    /// Get the badge color for a race type.
    pub fn race_type_color(race_type: RaceType) -> Color32 {
        match race_type {
            RaceType::Flat => Color32::from_rgb(96, 165, 250),
            RaceType::Hilly => Color32::from_rgb(250, 204, 21),
            RaceType::Mountain => Color32::from_rgb(248, 113, 113),
            RaceType::TT => Color32::from_rgb(167, 139, 250),
        }
    }
}
