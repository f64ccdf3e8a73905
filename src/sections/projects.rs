use leptos::prelude::*;

use portfolio_core::content::projects;
use portfolio_core::{SectionId, Theme};

use crate::components::badge::{Badge, BadgeTone};
use crate::components::image::FallbackImage;
use crate::components::reveal::Reveal;

#[component]
pub fn ProjectsSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let palette = move || theme.get().palette();

    view! {
        <section id=SectionId::Projects.as_str() class="py-20 px-6 sm:px-8">
            <div class=SectionId::Projects.container_class()>
                <h2 class="text-3xl sm:text-4xl font-bold mb-8">"Projects"</h2>
                <div class="grid gap-6 sm:grid-cols-2 md:grid-cols-3">
                    {projects()
                        .into_iter()
                        .map(|p| {
                            view! {
                                <Reveal>
                                    <div class=move || format!("border {} rounded-xl p-4", palette().card)>
                                        <FallbackImage
                                            image=p.image
                                            class="w-full h-40 sm:h-48 object-cover rounded-lg mb-3"
                                        />
                                        <h3 class="text-xl font-bold">{p.title}</h3>
                                        <p class=move || {
                                            format!("{} my-2 text-sm sm:text-base", palette().muted_text)
                                        }>{p.description}</p>
                                        <div class="flex flex-wrap gap-2 mb-3">
                                            {p.tags
                                                .iter()
                                                .enumerate()
                                                .map(|(i, tag)| {
                                                    view! { <Badge tone=BadgeTone::for_index(i)>{*tag}</Badge> }
                                                })
                                                .collect_view()}
                                        </div>
                                        <a href=p.link class="text-blue-400 hover:underline">
                                            "View \u{2192}"
                                        </a>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
