//! Brand palette and design tokens for the Vitrine storefront.
//!
//! # Design
//! - One named token set per theme mode; the stylesheet mirrors these values.
//! - `page_background` is the only style computed in Rust, for the menu page
//!   container; everything else styles through CSS custom properties.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and stored preferences.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The token set active for this mode.
    #[must_use]
    pub const fn palette(self) -> &'static ThemePalette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// The other mode, for toggle controls.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Named color tokens for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    /// Palette identifier matching the `data-theme` value.
    pub id: &'static str,
    /// Default page background.
    pub background_default: &'static str,
    /// Card and panel surface.
    pub surface: &'static str,
    /// Elevated surface (headers, drawers).
    pub surface_raised: &'static str,
    /// Hairline borders and dividers.
    pub border: &'static str,
    /// Primary text.
    pub text_primary: &'static str,
    /// Secondary text and captions.
    pub text_muted: &'static str,
    /// Interactive accent.
    pub accent: &'static str,
}

/// Token set for the light storefront theme.
pub const LIGHT: ThemePalette = ThemePalette {
    id: "light",
    background_default: "#FAF7F2",
    surface: "#FFFFFF",
    surface_raised: "#F3EDE4",
    border: "#E4DCCE",
    text_primary: "#1F1B2E",
    text_muted: "#6E6657",
    accent: "#8A5A2B",
};

/// Token set for the dark storefront theme.
pub const DARK: ThemePalette = ThemePalette {
    id: "dark",
    background_default: "#171421",
    surface: "#201C2E",
    surface_raised: "#29243B",
    border: "#3A3450",
    text_primary: "#F2EEE6",
    text_muted: "#A89FB8",
    accent: "#D8A86A",
};

/// Inline style for a full-page container in the active theme.
///
/// Resolves the palette's default background token into a
/// `background-color` declaration.
#[must_use]
pub fn page_background(mode: ThemeMode) -> String {
    format!("background-color:{}", mode.palette().background_default)
}

/// Resolve a stored preference string to a theme mode.
///
/// Unknown or missing values fall back to [`ThemeMode::Light`], the
/// storefront default.
#[must_use]
pub fn mode_from_preference(value: Option<&str>) -> ThemeMode {
    match value {
        Some("dark") => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn palette_ids_match_modes() {
        assert_eq!(ThemeMode::Light.palette().id, "light");
        assert_eq!(ThemeMode::Dark.palette().id, "dark");
    }

    #[test]
    fn page_background_uses_the_default_token() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(
                page_background(mode),
                format!("background-color:{}", mode.palette().background_default)
            );
        }
        assert_eq!(page_background(ThemeMode::Light), "background-color:#FAF7F2");
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn preference_round_trips_and_defaults() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode_from_preference(Some(mode.as_str())), mode);
        }
        assert_eq!(mode_from_preference(None), ThemeMode::Light);
        assert_eq!(mode_from_preference(Some("sepia")), ThemeMode::Light);
    }
}
