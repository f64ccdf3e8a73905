use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeTone {
    #[default]
    Blue,
    Teal,
}

impl BadgeTone {
    /// Alternates tones along a row of tags.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            BadgeTone::Blue
        } else {
            BadgeTone::Teal
        }
    }

    fn class(self) -> &'static str {
        match self {
            BadgeTone::Blue => {
                "px-2 py-0.5 text-xs font-medium rounded border bg-blue-900/30 text-blue-300 border-blue-800"
            }
            BadgeTone::Teal => {
                "px-2 py-0.5 text-xs font-medium rounded border bg-teal-900/30 text-teal-300 border-teal-800"
            }
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] tone: BadgeTone,
) -> impl IntoView {
    view! {
        <span class=tone.class()>
            {children()}
        </span>
    }
}
