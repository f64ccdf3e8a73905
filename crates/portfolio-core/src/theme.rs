//! Dark/light theme and its colour tokens.
//!
//! Tokens are Tailwind class fragments. Components never branch on the theme
//! themselves; they ask the active [`Palette`] for the token they need.

use serde::Deserialize;

/// Visual theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Label for the toggle button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}

/// Colour tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background and base text colour
    pub page: &'static str,
    /// Translucent navigation bar surface and its bottom border
    pub nav_bar: &'static str,
    pub brand: &'static str,
    /// Non-active link in the desktop bar
    pub nav_idle_desktop: &'static str,
    /// Non-active link in the mobile panel
    pub nav_idle_mobile: &'static str,
    pub mobile_panel: &'static str,
    pub body_text: &'static str,
    pub muted_text: &'static str,
    pub card: &'static str,
}

/// Highlight for the link matching the active section; the same in both themes.
pub const NAV_ACTIVE: &str = "text-blue-400";

pub const DARK: Palette = Palette {
    page: "bg-neutral-900 text-white",
    nav_bar: "bg-white/5 border-white/10",
    brand: "text-white",
    nav_idle_desktop: "text-gray-400 hover:text-blue-300",
    nav_idle_mobile: "text-gray-300 hover:text-blue-300",
    mobile_panel: "bg-neutral-900",
    body_text: "text-gray-300",
    muted_text: "text-gray-400",
    card: "bg-white/5 border-white/10",
};

pub const LIGHT: Palette = Palette {
    page: "bg-white text-black",
    nav_bar: "bg-black/5 border-black/10",
    brand: "text-black",
    nav_idle_desktop: "text-gray-700 hover:text-blue-600",
    nav_idle_mobile: "text-gray-800 hover:text-blue-600",
    mobile_panel: "bg-white",
    body_text: "text-gray-700",
    muted_text: "text-gray-500",
    card: "bg-black/5 border-black/10",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_twice_restores_palette() {
        let initial = Theme::Dark;
        let once = initial.toggled();
        assert_eq!(once, Theme::Light);
        assert_eq!(once.palette(), &LIGHT);

        let twice = once.toggled();
        assert_eq!(twice.palette(), initial.palette());
    }

    #[test]
    fn test_palettes_differ_in_every_token() {
        let (d, l) = (Theme::Dark.palette(), Theme::Light.palette());
        assert_ne!(d.page, l.page);
        assert_ne!(d.nav_bar, l.nav_bar);
        assert_ne!(d.brand, l.brand);
        assert_ne!(d.nav_idle_desktop, l.nav_idle_desktop);
        assert_ne!(d.nav_idle_mobile, l.nav_idle_mobile);
        assert_ne!(d.mobile_panel, l.mobile_panel);
        assert_ne!(d.body_text, l.body_text);
        assert_ne!(d.muted_text, l.muted_text);
        assert_ne!(d.card, l.card);
    }

    #[test]
    fn test_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }
        let w: Wrapper = toml::from_str(r#"theme = "light""#).unwrap();
        assert_eq!(w.theme, Theme::Light);
    }
}
