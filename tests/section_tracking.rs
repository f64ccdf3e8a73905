//! Integration tests for scroll tracking: observers, page state and the
//! update loop wired together the way the page wires them.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::testing::{FakeBackend, FakeSubscription};
use portfolio_core::{
    update, IntersectionReport, Message, PageState, ReportSink, SectionId, SiteConfig, TieBreak,
    ViewingBand, VisibilityWatcher,
};

/// Page state shared with a sink that feeds batches through `update`.
fn wired_state(initial: PageState) -> (Rc<RefCell<PageState>>, ReportSink) {
    let state = Rc::new(RefCell::new(initial));
    let sink_state = Rc::clone(&state);
    let sink: ReportSink = Rc::new(move |batch: &[IntersectionReport]| {
        update(
            &mut sink_state.borrow_mut(),
            Message::IntersectionBatch(batch.to_vec()),
        );
    });
    (state, sink)
}

fn mount(
    backend: &mut FakeBackend,
    initial: PageState,
) -> (Rc<RefCell<PageState>>, VisibilityWatcher<FakeSubscription>) {
    let (state, sink) = wired_state(initial);
    let watcher = VisibilityWatcher::mount(backend, &ViewingBand::default(), sink);
    (state, watcher)
}

#[test]
fn test_every_present_section_is_observed() {
    let mut backend = FakeBackend::with_all_sections();
    let (_state, watcher) = mount(&mut backend, PageState::default());

    assert_eq!(watcher.active_subscriptions(), SectionId::ALL.len());
    for id in SectionId::ALL {
        assert!(watcher.is_observing(id), "{id} should be observed");
    }
}

#[test]
fn test_absent_sections_are_skipped() {
    let mut backend =
        FakeBackend::with_sections([SectionId::Home, SectionId::Contact, SectionId::About]);
    let (_state, watcher) = mount(&mut backend, PageState::default());

    assert_eq!(watcher.active_subscriptions(), 3);
    assert!(!watcher.is_observing(SectionId::Skills));
    assert!(!backend.report(SectionId::Skills, true));
}

#[test]
fn test_only_projects_present() {
    let mut backend = FakeBackend::with_sections([SectionId::Projects]);
    let (state, watcher) = mount(&mut backend, PageState::default());

    assert_eq!(watcher.active_subscriptions(), 1);
    assert_eq!(state.borrow().active, SectionId::Home);

    backend.report(SectionId::Projects, false);
    assert_eq!(state.borrow().active, SectionId::Home);

    backend.report(SectionId::Projects, true);
    assert_eq!(state.borrow().active, SectionId::Projects);
}

#[test]
fn test_active_section_follows_scrolling() {
    let mut backend = FakeBackend::with_all_sections();
    let (state, _watcher) = mount(&mut backend, PageState::default());

    for id in [
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Achievements,
        SectionId::About,
    ] {
        backend.report(id, true);
        assert_eq!(state.borrow().active, id);
    }

    // Leaving the band never clears the active section
    backend.report(SectionId::About, false);
    assert_eq!(state.borrow().active, SectionId::About);
}

/// Two sections entering the band in the same frame: each observer fires
/// its own single-entry batch.
fn enter_together(backend: &FakeBackend, upper: (SectionId, f64), lower: (SectionId, f64)) {
    for (section, top) in [upper, lower] {
        assert!(backend.deliver(section, &[IntersectionReport::entered(section).at(top)]));
    }
}

#[test]
fn test_simultaneous_entries_last_wins_by_default() {
    let mut backend = FakeBackend::with_all_sections();
    let (state, _watcher) = mount(&mut backend, PageState::default());

    enter_together(&backend, (SectionId::Education, 10.0), (SectionId::Contact, 400.0));
    assert_eq!(state.borrow().active, SectionId::Contact);
}

#[test]
fn test_simultaneous_entries_topmost_when_configured() {
    let config = SiteConfig::from_toml_str(
        r#"
[watcher]
tie_break = "topmost"
"#,
    )
    .unwrap();
    assert_eq!(config.watcher.tie_break, TieBreak::Topmost);

    let mut backend = FakeBackend::with_all_sections();
    let (state, _watcher) = mount(&mut backend, PageState::new(&config));

    enter_together(&backend, (SectionId::Education, 10.0), (SectionId::Contact, 400.0));
    assert_eq!(state.borrow().active, SectionId::Education);

    // Once the upper section scrolls out, the one below takes over
    backend.report(SectionId::Education, false);
    assert_eq!(state.borrow().active, SectionId::Contact);
}

#[test]
fn test_observer_cannot_report_other_sections() {
    let mut backend = FakeBackend::with_all_sections();
    let (state, _watcher) = mount(&mut backend, PageState::default());

    let mixed = [
        IntersectionReport::entered(SectionId::Skills),
        IntersectionReport::entered(SectionId::Projects),
    ];
    assert!(!backend.deliver(SectionId::Skills, &mixed));
    assert_eq!(state.borrow().active, SectionId::Home);
}

#[test]
fn test_failed_observer_does_not_block_others() {
    let mut backend = FakeBackend::with_all_sections().failing_on(SectionId::Education);
    let (state, watcher) = mount(&mut backend, PageState::default());

    assert_eq!(watcher.active_subscriptions(), SectionId::ALL.len() - 1);
    assert!(!watcher.is_observing(SectionId::Education));

    backend.report(SectionId::Contact, true);
    assert_eq!(state.borrow().active, SectionId::Contact);
}

#[test]
fn test_configured_band_reaches_observers() {
    let config = SiteConfig::from_toml_str(
        r#"
[watcher]
top_inset_percent = 20
bottom_inset_percent = 60
"#,
    )
    .unwrap();
    let (_state, sink) = wired_state(PageState::new(&config));
    let mut backend = FakeBackend::with_sections([SectionId::Home]);
    let _watcher = VisibilityWatcher::mount(&mut backend, &config.band(), sink);

    let band = backend.band_for(SectionId::Home).unwrap();
    assert_eq!(band.root_margin(), "-20% 0px -60% 0px");
}

#[test]
fn test_unmount_disconnects_everything() {
    let mut backend = FakeBackend::with_all_sections();
    let (state, watcher) = mount(&mut backend, PageState::default());
    assert_eq!(backend.live_subscriptions(), SectionId::ALL.len());

    drop(watcher);

    assert_eq!(backend.live_subscriptions(), 0);
    assert_eq!(backend.disconnect_calls(), SectionId::ALL.len());
    assert!(!backend.report(SectionId::Skills, true));
    assert_eq!(state.borrow().active, SectionId::Home);
}

#[test]
fn test_mobile_selection_then_scroll() {
    let mut backend = FakeBackend::with_all_sections();
    let (state, _watcher) = mount(&mut backend, PageState::default());

    update(&mut state.borrow_mut(), Message::ToggleMobileNav);
    assert!(state.borrow().mobile_nav_open);

    update(
        &mut state.borrow_mut(),
        Message::MobileLinkSelected(SectionId::Contact),
    );
    assert!(!state.borrow().mobile_nav_open);

    // The jump itself is what moves the highlight
    backend.report(SectionId::Contact, true);
    assert_eq!(state.borrow().active, SectionId::Contact);
}

#[test]
fn test_theme_round_trip_restores_styling() {
    let mut state = PageState::default();
    let initial = *state.theme.palette();

    update(&mut state, Message::ToggleTheme);
    assert!(!state.theme.is_dark());
    assert_ne!(state.theme.palette().page, initial.page);

    update(&mut state, Message::ToggleTheme);
    assert_eq!(*state.theme.palette(), initial);
}
