//! Navigation model: the seven entries and how each link is styled.

use crate::section::SectionId;
use crate::theme::{Theme, NAV_ACTIVE};

/// Icon shown next to a navigation label in the desktop bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Code,
    Folder,
    Award,
    Book,
    Mail,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    pub fn href(&self) -> String {
        self.id.anchor()
    }

    pub fn is_active(&self, active: SectionId) -> bool {
        self.id == active
    }
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            id: SectionId::Home,
            label: "Home",
            icon: NavIcon::Home,
        },
        NavItem {
            id: SectionId::Skills,
            label: "Skills",
            icon: NavIcon::Code,
        },
        NavItem {
            id: SectionId::Projects,
            label: "Projects",
            icon: NavIcon::Folder,
        },
        NavItem {
            id: SectionId::Experience,
            label: "Experience",
            icon: NavIcon::Award,
        },
        NavItem {
            id: SectionId::Education,
            label: "Education",
            icon: NavIcon::Book,
        },
        NavItem {
            id: SectionId::Contact,
            label: "Contact",
            icon: NavIcon::Mail,
        },
        NavItem {
            id: SectionId::About,
            label: "About",
            icon: NavIcon::User,
        },
    ]
}

/// Where a link is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    /// Horizontal bar, wide viewports
    Desktop,
    /// Collapsible vertical panel, narrow viewports
    Mobile,
}

impl NavVariant {
    fn base_class(self) -> &'static str {
        match self {
            NavVariant::Desktop => "flex gap-1 items-center px-3 py-1 rounded-md transition",
            NavVariant::Mobile => "block px-3 py-2 rounded-md transition",
        }
    }
}

/// Full class list for one navigation link.
pub fn link_class(variant: NavVariant, is_active: bool, theme: Theme) -> String {
    let state = if is_active {
        NAV_ACTIVE
    } else {
        let palette = theme.palette();
        match variant {
            NavVariant::Desktop => palette.nav_idle_desktop,
            NavVariant::Mobile => palette.nav_idle_mobile,
        }
    };
    format!("{} {}", variant.base_class(), state)
}
