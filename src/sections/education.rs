use leptos::prelude::*;

use portfolio_core::content::education;
use portfolio_core::{SectionId, Theme};

use super::SectionShell;

#[component]
pub fn EducationSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let palette = move || theme.get().palette();

    view! {
        <SectionShell id=SectionId::Education title="Education">
            <div class=move || format!("space-y-6 {} text-base sm:text-lg", palette().body_text)>
                {education()
                    .into_iter()
                    .map(|e| {
                        view! {
                            <div>
                                <h3 class="text-xl sm:text-2xl font-semibold">{e.qualification}</h3>
                                <p>{e.institution}</p>
                                <p class=move || palette().muted_text>{e.period}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}
