//! In-memory intersection backend for tests.
//!
//! Enabled for this crate's unit tests and, through the `test-helpers`
//! feature, for integration tests elsewhere in the workspace.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::section::SectionId;
use crate::watcher::{
    IntersectionBackend, IntersectionReport, ReportSink, Subscription, ViewingBand,
};

#[derive(Default)]
struct Shared {
    sinks: HashMap<SectionId, ReportSink>,
    bands: HashMap<SectionId, ViewingBand>,
    disconnects: usize,
}

/// Pretend document: a set of present sections plus a table of live
/// observers that tests can fire reports through.
#[derive(Default)]
pub struct FakeBackend {
    present: HashSet<SectionId>,
    failing: HashSet<SectionId>,
    shared: Rc<RefCell<Shared>>,
}

impl FakeBackend {
    pub fn with_sections(sections: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            present: sections.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_all_sections() -> Self {
        Self::with_sections(SectionId::ALL)
    }

    /// Makes observer construction fail for `section`.
    pub fn failing_on(mut self, section: SectionId) -> Self {
        self.failing.insert(section);
        self
    }

    /// Observers registered and not yet disconnected.
    pub fn live_subscriptions(&self) -> usize {
        self.shared.borrow().sinks.len()
    }

    pub fn disconnect_calls(&self) -> usize {
        self.shared.borrow().disconnects
    }

    pub fn band_for(&self, section: SectionId) -> Option<ViewingBand> {
        self.shared.borrow().bands.get(&section).copied()
    }

    /// Fires a single-entry batch for `section`. Returns `false` if nothing
    /// is observing it.
    pub fn report(&self, section: SectionId, is_intersecting: bool) -> bool {
        let report = if is_intersecting {
            IntersectionReport::entered(section)
        } else {
            IntersectionReport::left(section)
        };
        self.deliver(section, &[report])
    }

    /// Fires `batch` through the observer registered for `section`.
    ///
    /// A real observer only reports its own target, so a batch naming any
    /// other section is refused and `false` returned.
    pub fn deliver(&self, section: SectionId, batch: &[IntersectionReport]) -> bool {
        if batch.iter().any(|r| r.section != section) {
            return false;
        }
        let sink = self.shared.borrow().sinks.get(&section).cloned();
        match sink {
            Some(sink) => {
                sink(batch);
                true
            }
            None => false,
        }
    }
}

impl IntersectionBackend for FakeBackend {
    type Target = SectionId;
    type Subscription = FakeSubscription;

    fn find_section(&self, id: SectionId) -> Option<SectionId> {
        self.present.contains(&id).then_some(id)
    }

    fn observe(
        &mut self,
        section: SectionId,
        _target: SectionId,
        band: &ViewingBand,
        sink: ReportSink,
    ) -> Result<FakeSubscription> {
        if self.failing.contains(&section) {
            return Err(Error::observer(section, "observer construction refused"));
        }
        let mut shared = self.shared.borrow_mut();
        shared.sinks.insert(section, sink);
        shared.bands.insert(section, *band);
        Ok(FakeSubscription {
            section,
            shared: Rc::clone(&self.shared),
        })
    }
}

pub struct FakeSubscription {
    section: SectionId,
    shared: Rc<RefCell<Shared>>,
}

impl Subscription for FakeSubscription {
    fn disconnect(self) {
        let mut shared = self.shared.borrow_mut();
        shared.sinks.remove(&self.section);
        shared.disconnects += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watcher::VisibilityWatcher;
    use std::cell::Cell;

    #[test]
    fn test_deliver_refuses_foreign_entries() {
        let mut backend = FakeBackend::with_all_sections();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sink: ReportSink = Rc::new(move |_: &[IntersectionReport]| {
            counter.set(counter.get() + 1);
        });
        let _watcher = VisibilityWatcher::mount(&mut backend, &ViewingBand::default(), sink);

        let mixed = [
            IntersectionReport::entered(SectionId::Skills),
            IntersectionReport::entered(SectionId::Projects),
        ];
        assert!(!backend.deliver(SectionId::Skills, &mixed));
        assert_eq!(calls.get(), 0);

        assert!(backend.deliver(SectionId::Skills, &mixed[..1]));
        assert_eq!(calls.get(), 1);
    }
}
