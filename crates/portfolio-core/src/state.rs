//! Page state (Model in TEA pattern)

use crate::config::SiteConfig;
use crate::section::SectionId;
use crate::theme::Theme;
use crate::watcher::{BandOccupancy, TieBreak};

/// All ephemeral UI state of the page.
///
/// Owned by the top-level page component; children only ever see read-only
/// projections of it and send [`crate::Message`]s back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageState {
    pub theme: Theme,

    /// Section most recently reported as in view
    pub active: SectionId,

    /// Whether the narrow-viewport navigation panel is expanded
    pub mobile_nav_open: bool,

    /// Policy for choosing between sections that are in view together
    pub tie_break: TieBreak,

    /// Sections currently inside the viewing band
    pub in_band: BandOccupancy,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            active: SectionId::Home,
            mobile_nav_open: false,
            tie_break: TieBreak::LastInBatch,
            in_band: BandOccupancy::default(),
        }
    }
}

impl PageState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            theme: config.theme.initial,
            tie_break: config.watcher.tie_break,
            ..Self::default()
        }
    }
}
