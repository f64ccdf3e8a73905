use leptos::html::Div;
use leptos::prelude::*;

use portfolio_core::content::{skills, ImageRef};
use portfolio_core::{delay_style, stagger_delay_ms, Entrance, SectionId, Theme, Trigger};

use crate::components::image::FallbackImage;
use crate::components::reveal::use_reveal;

/// Skill grid. The grid is revealed as a whole and the cards follow it in
/// turn, so a card further down never waits on its own observer.
#[component]
pub fn SkillsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let shown = use_reveal(grid, Trigger::InView);

    view! {
        <section id=SectionId::Skills.as_str() class="py-20 px-6 sm:px-8">
            <div class=SectionId::Skills.container_class()>
                <h2 class="text-3xl sm:text-4xl font-bold mb-8">"Skills"</h2>
                <div
                    node_ref=grid
                    class=move || {
                        format!(
                            "{} grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-6",
                            Entrance::Fade.class(shown.get()),
                        )
                    }
                >
                    {skills()
                        .into_iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "{} flex flex-col items-center p-4 sm:p-6 border rounded-xl {} backdrop-blur-lg text-center",
                                            Entrance::FadeUp.class(shown.get()),
                                            theme.get().palette().card,
                                        )
                                    }
                                    style=delay_style(stagger_delay_ms(i))
                                >
                                    <FallbackImage
                                        image=ImageRef { src: skill.icon, alt: skill.name }
                                        class="w-12 h-12 sm:w-16 sm:h-16 object-contain mb-2 sm:mb-3"
                                    />
                                    <span class="text-base sm:text-lg font-medium">{skill.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
