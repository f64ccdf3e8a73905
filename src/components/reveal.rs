use leptos::html::Div;
use leptos::prelude::*;

use portfolio_core::prelude::*;
use portfolio_core::{Entrance, Subscription, Trigger};

use crate::dom::{self, DomSubscription};

/// Flips to `true` once `node` is mounted or first scrolls into view, and
/// never flips back.
pub fn use_reveal(node: NodeRef<Div>, trigger: Trigger) -> ReadSignal<bool> {
    let (shown, set_shown) = signal(false);
    let subscription = StoredValue::new_local(None::<DomSubscription>);

    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };
        if shown.get_untracked() || subscription.with_value(Option::is_some) {
            return;
        }
        match trigger {
            // Flip on the next frame so the hidden state gets painted first
            Trigger::OnMount => request_animation_frame(move || set_shown.set(true)),
            Trigger::InView => match dom::observe_reveal(&el, move || set_shown.set(true)) {
                Ok(sub) => subscription.set_value(Some(sub)),
                Err(e) => {
                    warn!("{}", e);
                    set_shown.set(true);
                }
            },
        }
    });

    on_cleanup(move || {
        subscription.try_update_value(|sub| {
            if let Some(sub) = sub.take() {
                sub.disconnect();
            }
        });
    });

    shown
}

/// Wrapper that plays an entrance transition once and never again.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] trigger: Trigger,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let shown = use_reveal(node, trigger);

    view! {
        <div node_ref=node class=move || format!("{} {}", entrance.class(shown.get()), class)>
            {children()}
        </div>
    }
}
