use leptos::prelude::*;

use portfolio_core::content::ABOUT;
use portfolio_core::{SectionId, Theme};

use super::SectionShell;

#[component]
pub fn AboutSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <SectionShell id=SectionId::About title="About Me">
            <p class=move || {
                format!("{} text-base sm:text-lg leading-relaxed", theme.get().palette().muted_text)
            }>{ABOUT}</p>
        </SectionShell>
    }
}
