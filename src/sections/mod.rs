//! The nine content regions. Each renders with `id` equal to its
//! [`SectionId`] so the watcher can find it.

pub mod about;
pub mod achievements;
pub mod contact;
pub mod education;
pub mod experience;
pub mod home;
pub mod projects;
pub mod skills;
pub mod strengths;

use leptos::prelude::*;

use portfolio_core::content::Highlight;
use portfolio_core::{SectionId, Theme};

use crate::components::reveal::Reveal;

/// Padded `<section>` with a heading; content fades up once in view.
#[component]
pub fn SectionShell(
    id: SectionId,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id.as_str() class="py-20 px-6 sm:px-8">
            <div class=id.container_class()>
                <h2 class="text-3xl sm:text-4xl font-bold mb-8">{title}</h2>
                <Reveal>{children()}</Reveal>
            </div>
        </section>
    }
}

/// Emoji-led list used by certifications, achievements and strengths.
#[component]
pub fn HighlightList(
    items: Vec<Highlight>,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    view! {
        <ul class=move || format!("space-y-3 {} text-base sm:text-lg", theme.get().palette().body_text)>
            {items
                .into_iter()
                .map(|h| view! { <li>{h.emoji}" "{h.text}</li> })
                .collect_view()}
        </ul>
    }
}
