use leptos::prelude::*;

use portfolio_core::content::profile;
use portfolio_core::{Entrance, SectionId, Theme, Trigger};

use crate::components::icons::{ArrowRight, Github, Linkedin};
use crate::components::image::FallbackImage;
use crate::components::reveal::Reveal;

#[component]
pub fn HomeSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let p = profile();

    view! {
        <section id=SectionId::Home.as_str() class="min-h-screen flex items-center px-6 sm:px-8">
            <div class=format!("{} grid md:grid-cols-2 gap-8 items-center", SectionId::Home.container_class())>
                <Reveal entrance=Entrance::FadeLeft trigger=Trigger::OnMount>
                    <h1 class="text-4xl sm:text-5xl font-extrabold">
                        "Hi, I'm "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-teal-400">
                            {p.first_name}
                        </span>
                    </h1>
                    <p class=move || {
                        format!("mt-4 {} text-base sm:text-lg leading-relaxed", theme.get().palette().muted_text)
                    }>
                        {p.tagline}
                    </p>
                    <div class="mt-6 flex flex-wrap gap-3 justify-start">
                        <a
                            href=SectionId::Projects.anchor()
                            class="px-4 py-2 bg-blue-600 text-white rounded-lg flex items-center gap-2"
                        >
                            "View Projects"
                            <ArrowRight size=16 />
                        </a>
                        <a href=p.github class="p-2 border rounded-full" aria-label="GitHub">
                            <Github size=18 />
                        </a>
                        <a
                            href=p.linkedin
                            class="p-2 border rounded-full"
                            aria-label="LinkedIn"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <Linkedin size=18 />
                        </a>
                    </div>
                </Reveal>
                <Reveal
                    entrance=Entrance::ScaleIn
                    trigger=Trigger::OnMount
                    class="flex justify-center mt-6 md:mt-0"
                >
                    <FallbackImage
                        image=p.portrait
                        class="w-56 sm:w-72 h-72 sm:h-80 object-cover rounded-2xl shadow-2xl"
                    />
                </Reveal>
            </div>
        </section>
    }
}
