use leptos::prelude::*;

use portfolio_core::content::strengths;
use portfolio_core::{SectionId, Theme};

use super::{HighlightList, SectionShell};

#[component]
pub fn StrengthsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <SectionShell id=SectionId::Strengths title="Strengths">
            <HighlightList items=strengths() theme=theme />
        </SectionShell>
    }
}
