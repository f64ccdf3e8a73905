//! Scroll-driven section tracking
//!
//! At mount the page builds a [`SectionRegistry`] by looking up every
//! [`SectionId`] in the rendered document, then hands it to
//! [`VisibilityWatcher::attach`], which registers one observer per present
//! region through an [`IntersectionBackend`]. Observers push batches of
//! [`IntersectionReport`]s into a [`ReportSink`]; the page turns those into
//! [`crate::Message::IntersectionBatch`].
//!
//! The watcher owns its subscriptions. Dropping it (or calling
//! [`VisibilityWatcher::disconnect_all`]) releases every one of them exactly
//! once.

use std::rc::Rc;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::prelude::*;
use crate::section::SectionId;

// ─────────────────────────────────────────────────────────────────────────────
// Viewing band
// ─────────────────────────────────────────────────────────────────────────────

/// The part of the viewport in which a section counts as "in view".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingBand {
    /// Inset from the top edge, percent of viewport height
    pub top_inset_percent: u8,
    /// Inset from the bottom edge, percent of viewport height
    pub bottom_inset_percent: u8,
    /// Single intersection ratio at which reports fire
    pub threshold: f64,
}

impl Default for ViewingBand {
    fn default() -> Self {
        Self {
            top_inset_percent: 30,
            bottom_inset_percent: 50,
            threshold: 0.0,
        }
    }
}

impl ViewingBand {
    /// Builds a band, rejecting one that leaves no visible strip.
    pub fn new(top_inset_percent: u8, bottom_inset_percent: u8, threshold: f64) -> Result<Self> {
        if top_inset_percent > 100 || bottom_inset_percent > 100 {
            return Err(Error::config_invalid(format!(
                "viewing band insets must be at most 100%, got top={top_inset_percent} bottom={bottom_inset_percent}"
            )));
        }
        if u16::from(top_inset_percent) + u16::from(bottom_inset_percent) >= 100 {
            return Err(Error::config_invalid(format!(
                "viewing band insets leave no visible area: top={top_inset_percent} bottom={bottom_inset_percent}"
            )));
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::config_invalid(format!(
                "threshold must be within 0..=1, got {threshold}"
            )));
        }
        Ok(Self {
            top_inset_percent,
            bottom_inset_percent,
            threshold,
        })
    }

    /// CSS-style root margin for the observer, negative insets shrink the root.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            self.top_inset_percent, self.bottom_inset_percent
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reports
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of an intersection batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionReport {
    pub section: SectionId,
    pub is_intersecting: bool,
    /// Top of the section's box measured from the top of the document, in CSS px
    pub top: f64,
}

impl IntersectionReport {
    pub fn entered(section: SectionId) -> Self {
        Self {
            section,
            is_intersecting: true,
            top: 0.0,
        }
    }

    pub fn left(section: SectionId) -> Self {
        Self {
            section,
            is_intersecting: false,
            top: 0.0,
        }
    }

    pub fn at(mut self, top: f64) -> Self {
        self.top = top;
        self
    }
}

/// Sections currently inside the viewing band, with their document offsets.
///
/// Every observer reports only its own section, so two sections entering
/// the band together arrive as separate batches. Choosing between them
/// needs this running record rather than any single batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BandOccupancy {
    tops: [Option<f64>; SectionId::ALL.len()],
}

impl BandOccupancy {
    pub fn record(&mut self, report: &IntersectionReport) {
        self.tops[report.section.index()] = report.is_intersecting.then_some(report.top);
    }

    pub fn len(&self) -> usize {
        self.tops.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The in-band section that starts highest on the page. Equal offsets go
    /// to the section listed first in [`SectionId::ALL`].
    pub fn topmost(&self) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter_map(|id| self.tops[id.index()].map(|top| (id, top)))
            .fold(None::<(SectionId, f64)>, |best, (id, top)| match best {
                Some((_, best_top)) if best_top <= top => best,
                _ => Some((id, top)),
            })
            .map(|(id, _)| id)
    }
}

/// How to pick the active section when several are in the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Apply entries in delivery order; the last intersecting one wins
    #[default]
    LastInBatch,
    /// Of every section currently in the band, the one highest on the page
    /// wins
    Topmost,
}

impl TieBreak {
    /// The section to mark active once `batch` has been recorded into `band`,
    /// or `None` to leave the active section unchanged.
    pub fn resolve(self, batch: &[IntersectionReport], band: &BandOccupancy) -> Option<SectionId> {
        match self {
            TieBreak::LastInBatch => batch
                .iter()
                .filter(|r| r.is_intersecting)
                .last()
                .map(|r| r.section),
            TieBreak::Topmost => band.topmost(),
        }
    }
}

/// Callback an observer feeds its batches into.
pub type ReportSink = Rc<dyn Fn(&[IntersectionReport])>;

// ─────────────────────────────────────────────────────────────────────────────
// Backend seam
// ─────────────────────────────────────────────────────────────────────────────

/// A live observer registration.
pub trait Subscription {
    /// Stops the observer. Consumes the handle so it cannot be released twice.
    fn disconnect(self);
}

/// Source of section regions and intersection observers.
pub trait IntersectionBackend {
    /// Reference to a rendered region
    type Target;
    type Subscription: Subscription;

    /// Looks up the region rendered for `id`, if any.
    fn find_section(&self, id: SectionId) -> Option<Self::Target>;

    /// Starts observing `target` against `band`, delivering batches to `sink`.
    fn observe(
        &mut self,
        section: SectionId,
        target: Self::Target,
        band: &ViewingBand,
        sink: ReportSink,
    ) -> Result<Self::Subscription>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Regions found at mount, keyed by section. Absent regions have no entry.
#[derive(Debug)]
pub struct SectionRegistry<T> {
    entries: Vec<(SectionId, T)>,
}

impl<T> SectionRegistry<T> {
    /// Looks up every known section once.
    pub fn populate(lookup: impl Fn(SectionId) -> Option<T>) -> Self {
        let entries: Vec<(SectionId, T)> = SectionId::ALL
            .into_iter()
            .filter_map(|id| lookup(id).map(|target| (id, target)))
            .collect();

        let registry = Self { entries };
        let missing = registry.missing();
        if missing.is_empty() {
            debug!("Section registry populated with all {} sections", registry.len());
        } else {
            debug!(
                "Section registry populated with {} sections, missing: {:?}",
                registry.len(),
                missing
            );
        }
        registry
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.entries.iter().any(|(s, _)| *s == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known sections that were not found in the document.
    pub fn missing(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|id| !self.contains(*id))
            .collect()
    }
}

impl<T> IntoIterator for SectionRegistry<T> {
    type Item = (SectionId, T);
    type IntoIter = std::vec::IntoIter<(SectionId, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Watcher
// ─────────────────────────────────────────────────────────────────────────────

/// Scoped set of section observers. Released on drop.
pub struct VisibilityWatcher<S: Subscription> {
    subscriptions: Vec<(SectionId, S)>,
}

impl<S: Subscription> VisibilityWatcher<S> {
    /// Registers one observer per registry entry.
    ///
    /// A section whose observer cannot be created is skipped with a warning;
    /// the others are still attached.
    pub fn attach<B>(
        backend: &mut B,
        registry: SectionRegistry<B::Target>,
        band: &ViewingBand,
        sink: ReportSink,
    ) -> Self
    where
        B: IntersectionBackend<Subscription = S>,
    {
        let mut subscriptions = Vec::with_capacity(registry.len());
        for (section, target) in registry {
            match backend.observe(section, target, band, Rc::clone(&sink)) {
                Ok(sub) => subscriptions.push((section, sub)),
                Err(e) => warn!("Skipping section '{}': {}", section, e),
            }
        }

        debug!(
            "Attached {} section observers (root margin {})",
            subscriptions.len(),
            band.root_margin()
        );
        Self { subscriptions }
    }

    /// Populates a registry from `backend` and attaches to it in one step.
    pub fn mount<B>(backend: &mut B, band: &ViewingBand, sink: ReportSink) -> Self
    where
        B: IntersectionBackend<Subscription = S>,
    {
        let registry = SectionRegistry::populate(|id| backend.find_section(id));
        Self::attach(backend, registry, band, sink)
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_observing(&self, section: SectionId) -> bool {
        self.subscriptions.iter().any(|(s, _)| *s == section)
    }

    pub fn observed_sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.subscriptions.iter().map(|(id, _)| *id)
    }

    /// Disconnects every observer. Calling it again is a no-op.
    pub fn disconnect_all(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        let count = self.subscriptions.len();
        for (_, sub) in self.subscriptions.drain(..) {
            sub.disconnect();
        }
        debug!("Disconnected {} section observers", count);
    }
}

impl<S: Subscription> Drop for VisibilityWatcher<S> {
    fn drop(&mut self) {
        self.disconnect_all();
    }
}

impl<S: Subscription> std::fmt::Debug for VisibilityWatcher<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityWatcher")
            .field("sections", &self.observed_sections().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use std::cell::RefCell;

    fn recording_sink() -> (ReportSink, Rc<RefCell<Vec<IntersectionReport>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_sink = Rc::clone(&seen);
        let sink: ReportSink = Rc::new(move |batch: &[IntersectionReport]| {
            seen_in_sink.borrow_mut().extend_from_slice(batch);
        });
        (sink, seen)
    }

    // ─────────────────────────────────────────────────────────
    // Viewing band
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_default_band_root_margin() {
        insta::assert_snapshot!(ViewingBand::default().root_margin(), @"-30% 0px -50% 0px");
    }

    #[test]
    fn test_band_rejects_overlapping_insets() {
        assert!(ViewingBand::new(60, 40, 0.0).is_err());
        assert!(ViewingBand::new(101, 0, 0.0).is_err());
    }

    #[test]
    fn test_band_rejects_threshold_out_of_range() {
        assert!(ViewingBand::new(30, 50, 1.5).is_err());
        assert!(ViewingBand::new(30, 50, -0.1).is_err());
    }

    #[test]
    fn test_band_accepts_defaults() {
        assert_eq!(ViewingBand::new(30, 50, 0.0).unwrap(), ViewingBand::default());
    }

    // ─────────────────────────────────────────────────────────
    // Tie-break
    // ─────────────────────────────────────────────────────────

    fn occupancy(reports: &[IntersectionReport]) -> BandOccupancy {
        let mut band = BandOccupancy::default();
        for report in reports {
            band.record(report);
        }
        band
    }

    #[test]
    fn test_last_in_batch_wins() {
        let batch = [
            IntersectionReport::entered(SectionId::Skills),
            IntersectionReport::entered(SectionId::Projects),
            IntersectionReport::left(SectionId::Home),
        ];
        let band = occupancy(&batch);
        assert_eq!(
            TieBreak::LastInBatch.resolve(&batch, &band),
            Some(SectionId::Projects)
        );
    }

    #[test]
    fn test_topmost_looks_past_the_current_batch() {
        // Separate single-section batches, as separate observers deliver them
        let mut band = occupancy(&[IntersectionReport::entered(SectionId::Education).at(10.0)]);
        let batch = [IntersectionReport::entered(SectionId::Contact).at(400.0)];
        band.record(&batch[0]);

        assert_eq!(
            TieBreak::Topmost.resolve(&batch, &band),
            Some(SectionId::Education)
        );
        assert_eq!(
            TieBreak::LastInBatch.resolve(&batch, &band),
            Some(SectionId::Contact)
        );
    }

    #[test]
    fn test_topmost_equal_offsets_prefer_lookup_order() {
        let band = occupancy(&[
            IntersectionReport::entered(SectionId::Projects).at(50.0),
            IntersectionReport::entered(SectionId::Skills).at(50.0),
        ]);
        assert_eq!(band.topmost(), Some(SectionId::Skills));
    }

    #[test]
    fn test_leaving_clears_occupancy() {
        let mut band = occupancy(&[
            IntersectionReport::entered(SectionId::Skills).at(900.0),
            IntersectionReport::entered(SectionId::Projects).at(1400.0),
        ]);
        assert_eq!(band.len(), 2);

        band.record(&IntersectionReport::left(SectionId::Skills));
        assert_eq!(band.len(), 1);
        assert_eq!(band.topmost(), Some(SectionId::Projects));
    }

    #[test]
    fn test_nothing_in_band_resolves_to_none() {
        let batch = [IntersectionReport::left(SectionId::Home)];
        let band = occupancy(&batch);
        assert!(band.is_empty());
        assert_eq!(TieBreak::LastInBatch.resolve(&batch, &band), None);
        assert_eq!(TieBreak::Topmost.resolve(&batch, &band), None);
    }

    // ─────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_registry_skips_absent_regions() {
        let registry = SectionRegistry::populate(|id| (id == SectionId::Contact).then_some(7u32));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(SectionId::Contact));
        assert!(!registry.contains(SectionId::Home));
        assert_eq!(registry.missing().len(), 8);
    }

    #[test]
    fn test_registry_empty_document() {
        let registry = SectionRegistry::<()>::populate(|_| None);
        assert!(registry.is_empty());
        assert_eq!(registry.missing(), SectionId::ALL.to_vec());
    }

    // ─────────────────────────────────────────────────────────
    // Watcher lifecycle
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_attach_observes_every_present_section() {
        let mut backend = FakeBackend::with_all_sections();
        let (sink, _) = recording_sink();
        let watcher = VisibilityWatcher::mount(&mut backend, &ViewingBand::default(), sink);

        assert_eq!(watcher.active_subscriptions(), 9);
        assert_eq!(backend.live_subscriptions(), 9);
        for id in SectionId::ALL {
            assert!(watcher.is_observing(id));
        }
    }

    #[test]
    fn test_observer_receives_configured_band() {
        let mut backend = FakeBackend::with_sections([SectionId::Home]);
        let (sink, _) = recording_sink();
        let band = ViewingBand::new(20, 70, 0.25).unwrap();
        let _watcher = VisibilityWatcher::mount(&mut backend, &band, sink);

        assert_eq!(backend.band_for(SectionId::Home), Some(band));
    }

    #[test]
    fn test_observer_failure_skips_only_that_section() {
        let mut backend = FakeBackend::with_all_sections().failing_on(SectionId::Skills);
        let (sink, _) = recording_sink();
        let watcher = VisibilityWatcher::mount(&mut backend, &ViewingBand::default(), sink);

        assert_eq!(watcher.active_subscriptions(), 8);
        assert!(!watcher.is_observing(SectionId::Skills));
    }

    #[test]
    fn test_reports_reach_sink() {
        let mut backend = FakeBackend::with_sections([SectionId::About]);
        let (sink, seen) = recording_sink();
        let _watcher = VisibilityWatcher::mount(&mut backend, &ViewingBand::default(), sink);

        assert!(backend.report(SectionId::About, true));
        assert_eq!(*seen.borrow(), vec![IntersectionReport::entered(SectionId::About)]);
    }

    #[test]
    fn test_disconnect_all_is_idempotent() {
        let mut backend = FakeBackend::with_all_sections();
        let (sink, _) = recording_sink();
        let mut watcher = VisibilityWatcher::mount(&mut backend, &ViewingBand::default(), sink);

        watcher.disconnect_all();
        watcher.disconnect_all();
        assert_eq!(watcher.active_subscriptions(), 0);
        assert_eq!(backend.live_subscriptions(), 0);
        assert_eq!(backend.disconnect_calls(), 9);
    }

    #[test]
    fn test_drop_releases_subscriptions_once() {
        let mut backend = FakeBackend::with_all_sections();
        let (sink, _) = recording_sink();
        let watcher = VisibilityWatcher::mount(&mut backend, &ViewingBand::default(), sink);
        drop(watcher);

        assert_eq!(backend.live_subscriptions(), 0);
        assert_eq!(backend.disconnect_calls(), 9);
    }

    #[test]
    fn test_disconnected_observer_stops_reporting() {
        let mut backend = FakeBackend::with_sections([SectionId::Home]);
        let (sink, seen) = recording_sink();
        let watcher = VisibilityWatcher::mount(&mut backend, &ViewingBand::default(), sink);
        drop(watcher);

        assert!(!backend.report(SectionId::Home, true));
        assert!(seen.borrow().is_empty());
    }
}
