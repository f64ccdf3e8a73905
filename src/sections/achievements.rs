use leptos::prelude::*;

use portfolio_core::content::achievements;
use portfolio_core::{SectionId, Theme};

use super::{HighlightList, SectionShell};

#[component]
pub fn AchievementsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <SectionShell id=SectionId::Achievements title="Achievements">
            <HighlightList items=achievements() theme=theme />
        </SectionShell>
    }
}
