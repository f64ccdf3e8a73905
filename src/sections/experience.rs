use leptos::prelude::*;

use portfolio_core::content::{certifications, internship};
use portfolio_core::{SectionId, Theme};

use super::{HighlightList, SectionShell};

#[component]
pub fn ExperienceSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let job = internship();
    let text = move || {
        format!("space-y-4 {} text-base sm:text-lg", theme.get().palette().body_text)
    };

    view! {
        <SectionShell id=SectionId::Experience title="Experience & Certifications">
            <div class=text>
                <h3 class="text-2xl font-semibold">"Internship at "{job.company}</h3>
                <p class="italic">{job.role}</p>
                <ul class="list-disc list-inside mt-3 space-y-2">
                    {job.responsibilities.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
                </ul>
            </div>
            <div class=move || format!("mt-8 {}", text())>
                <h3 class="text-2xl font-semibold">"Certifications"</h3>
                <HighlightList items=certifications() theme=theme />
            </div>
        </SectionShell>
    }
}
