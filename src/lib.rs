//! Mausami Joshi portfolio
//!
//! Single-page site rendered client-side with Leptos. Page state and all
//! pure logic live in `portfolio-core`; this crate holds the components and
//! the browser `IntersectionObserver` glue.

pub mod components;
pub mod dom;
pub mod logging;
pub mod sections;

use std::rc::Rc;

use leptos::prelude::*;

use portfolio_core::prelude::*;
use portfolio_core::{
    update, IntersectionReport, Message, PageState, ReportSink, SectionId, SiteConfig, Theme,
    VisibilityWatcher,
};

use components::navbar::Navbar;
use dom::{DomBackend, DomSubscription};
use sections::about::AboutSection;
use sections::achievements::AchievementsSection;
use sections::contact::ContactSection;
use sections::education::EducationSection;
use sections::experience::ExperienceSection;
use sections::home::HomeSection;
use sections::projects::ProjectsSection;
use sections::skills::SkillsSection;
use sections::strengths::StrengthsSection;

/// Site settings compiled into the bundle.
pub const SITE_TOML: &str = include_str!("../site.toml");

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let (state, set_state) = signal(PageState::new(&config));

    let dispatch = Callback::new(move |msg: Message| {
        set_state.maybe_update(|s| update(s, msg));
    });

    let theme: Signal<Theme> = Memo::new(move |_| state.get().theme).into();
    let active: Signal<SectionId> = Memo::new(move |_| state.get().active).into();
    let mobile_nav_open: Signal<bool> = Memo::new(move |_| state.get().mobile_nav_open).into();

    let band = config.band();
    let watcher = StoredValue::new_local(None::<VisibilityWatcher<DomSubscription>>);

    // Sections are in the document once this first runs
    Effect::new(move || {
        if watcher.with_value(Option::is_some) {
            return;
        }
        let sink: ReportSink = Rc::new(move |batch: &[IntersectionReport]| {
            dispatch.run(Message::IntersectionBatch(batch.to_vec()));
        });
        let mut backend = DomBackend::new();
        let mounted = VisibilityWatcher::mount(&mut backend, &band, sink);
        info!("Tracking {} sections", mounted.active_subscriptions());
        watcher.set_value(Some(mounted));
    });

    on_cleanup(move || {
        watcher.try_update_value(|w| {
            if let Some(mut w) = w.take() {
                w.disconnect_all();
            }
        });
    });

    view! {
        <div class=move || {
            format!("{} min-h-screen font-sans transition-colors duration-300", theme.get().palette().page)
        }>
            <Navbar
                theme=theme
                active=active
                mobile_nav_open=mobile_nav_open
                on_message=dispatch
            />
            <main class="pt-24">
                <HomeSection theme=theme />
                <ExperienceSection theme=theme />
                <SkillsSection theme=theme />
                <ProjectsSection theme=theme />
                <AchievementsSection theme=theme />
                <StrengthsSection theme=theme />
                <EducationSection theme=theme />
                <ContactSection theme=theme />
                <AboutSection theme=theme />
            </main>
        </div>
    }
}
