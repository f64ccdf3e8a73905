use leptos::prelude::*;

use portfolio_core::content::contact;
use portfolio_core::{SectionId, Theme};

use super::SectionShell;

#[component]
pub fn ContactSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let c = contact();

    view! {
        <SectionShell id=SectionId::Contact title="Contact">
            <div class=move || {
                format!("space-y-4 {} text-base sm:text-lg", theme.get().palette().body_text)
            }>
                <p>
                    <span class="font-semibold">"Email:"</span>" "
                    <a href=c.mailto() class="text-blue-400 hover:underline">{c.email}</a>
                </p>
                <p>
                    <span class="font-semibold">"Mobile:"</span>" "
                    <a href=c.tel() class="text-blue-400 hover:underline">{c.phone_display}</a>
                </p>
                <p>
                    <span class="font-semibold">"Address:"</span>" "{c.address}
                </p>
            </div>
        </SectionShell>
    }
}
