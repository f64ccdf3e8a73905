//! Message types for the page (TEA pattern)

use crate::section::SectionId;
use crate::watcher::IntersectionReport;

/// All possible events the page reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Theme button pressed
    ToggleTheme,

    /// Hamburger button pressed
    ToggleMobileNav,

    /// A link in the mobile panel was chosen; navigation itself is left to
    /// the browser's fragment handling
    MobileLinkSelected(SectionId),

    /// One batch from a section observer
    IntersectionBatch(Vec<IntersectionReport>),
}
