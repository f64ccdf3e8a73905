//! # portfolio-core - Domain types for the portfolio site
//!
//! Platform-independent half of the site. Nothing in here touches the DOM;
//! the browser-facing crate plugs a real `IntersectionObserver` into the
//! [`IntersectionBackend`] seam and renders the state defined here.
//!
//! ## Public API
//!
//! ### Page state (`state`, `message`, `update`)
//! - [`PageState`] - theme, active section and mobile-menu flag
//! - [`Message`] - every event the page reacts to
//! - [`update()`] - TEA-style reducer applying a [`Message`] to [`PageState`]
//!
//! ### Sections and navigation (`section`, `nav`)
//! - [`SectionId`] - the nine section identifiers
//! - [`NavItem`], [`nav_items()`] - the seven navigation entries
//!
//! ### Visibility tracking (`watcher`)
//! - [`ViewingBand`] - root margin and threshold for section observers
//! - [`SectionRegistry`] - id to region lookup, built once at mount
//! - [`BandOccupancy`], [`TieBreak`] - which in-view section becomes active
//! - [`VisibilityWatcher`] - scoped set of observer subscriptions
//! - [`IntersectionBackend`], [`Subscription`] - the observer seam
//!
//! ### Presentation (`theme`, `reveal`, `content`)
//! - [`Theme`], [`Palette`] - colour tokens per theme
//! - [`Entrance`], [`RevealLatch`] - one-shot entrance animations
//! - [`content`] - the hard-coded portfolio data
//! - [`ImageSlot`] - picture or alt-text placeholder after a load error
//!
//! ### Configuration and errors (`config`, `error`)
//! - [`SiteConfig`], [`site_config_or_default()`]
//! - [`Error`], [`Result`]

pub mod config;
pub mod content;
pub mod error;
pub mod image;
pub mod message;
pub mod nav;
pub mod reveal;
pub mod section;
pub mod state;
pub mod theme;
pub mod update;
pub mod watcher;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

/// Prelude for common imports used throughout the site crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use config::{
    site_config_or_default, LogLevel, LoggingSettings, SiteConfig, ThemeSettings, WatcherSettings,
};
pub use error::{Error, Result};
pub use image::{placeholder_class, ImageSlot, ImageView};
pub use message::Message;
pub use nav::{link_class, nav_items, NavIcon, NavItem, NavVariant};
pub use reveal::{delay_style, stagger_delay_ms, Entrance, RevealLatch, Trigger};
pub use section::SectionId;
pub use state::PageState;
pub use theme::{Palette, Theme};
pub use update::update;
pub use watcher::{
    BandOccupancy, IntersectionBackend, IntersectionReport, ReportSink, SectionRegistry,
    Subscription, TieBreak, ViewingBand, VisibilityWatcher,
};
