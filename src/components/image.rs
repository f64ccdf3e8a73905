use leptos::prelude::*;

use portfolio_core::content::ImageRef;
use portfolio_core::prelude::*;
use portfolio_core::{placeholder_class, ImageSlot, ImageView};

/// `<img>` that swaps itself for a labelled placeholder box if the asset
/// fails to load.
#[component]
pub fn FallbackImage(
    image: ImageRef,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (slot, set_slot) = signal(ImageSlot::new(image));

    move || match slot.get().view() {
        ImageView::Picture { src, alt } => view! {
            <img
                src=src
                alt=alt
                class=class.clone()
                on:error=move |_| {
                    set_slot.maybe_update(|s| {
                        let first = s.mark_failed();
                        if first {
                            debug!("Image failed to load: {}", src);
                        }
                        first
                    });
                }
            />
        }
        .into_any(),
        ImageView::Placeholder { label } => view! {
            <div class=placeholder_class(&class) role="img" aria-label=label>
                {label}
            </div>
        }
        .into_any(),
    }
}
