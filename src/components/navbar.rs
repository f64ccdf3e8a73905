use leptos::prelude::*;

use portfolio_core::content::profile;
use portfolio_core::{link_class, nav_items, Message, NavVariant, SectionId, Theme};

use super::icons::{nav_icon, Menu, Moon, Sun, X};

/// Fixed top bar: brand, desktop links, theme toggle, hamburger and the
/// collapsible mobile panel.
#[component]
pub fn Navbar(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] active: Signal<SectionId>,
    #[prop(into)] mobile_nav_open: Signal<bool>,
    on_message: Callback<Message>,
) -> impl IntoView {
    let palette = move || theme.get().palette();
    let brand = profile().full_name;

    view! {
        <nav class=move || {
            format!(
                "{} fixed w-full top-0 z-50 backdrop-blur-xl border-b py-3",
                palette().nav_bar,
            )
        }>
            <div class="max-w-6xl mx-auto px-4 flex justify-between items-center">
                <div class=move || format!("text-xl font-bold {}", palette().brand)>{brand}</div>

                // Desktop Links
                <div class="hidden md:flex gap-2">
                    {nav_items().into_iter().map(|item| {
                        view! {
                            <a
                                href=item.href()
                                class=move || {
                                    link_class(NavVariant::Desktop, item.is_active(active.get()), theme.get())
                                }
                            >
                                {nav_icon(item.icon)}
                                <span>{item.label}</span>
                            </a>
                        }
                    }).collect_view()}
                </div>

                // Dark/Light Toggle
                <button
                    type="button"
                    on:click=move |_| on_message.run(Message::ToggleTheme)
                    class="p-2 rounded-full border mr-2"
                    aria-label=move || theme.get().toggle_label()
                >
                    {move || {
                        if theme.get().is_dark() {
                            view! { <Sun size=18 /> }.into_any()
                        } else {
                            view! { <Moon size=18 /> }.into_any()
                        }
                    }}
                </button>

                // Mobile Hamburger
                <button
                    type="button"
                    on:click=move |_| on_message.run(Message::ToggleMobileNav)
                    class="md:hidden p-2 rounded-md border"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || mobile_nav_open.get().to_string()
                >
                    {move || {
                        if mobile_nav_open.get() {
                            view! { <X size=20 /> }.into_any()
                        } else {
                            view! { <Menu size=20 /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile Menu
            <Show when=move || mobile_nav_open.get()>
                <div class=move || {
                    format!(
                        "{} md:hidden px-4 py-4 space-y-2 border-t border-gray-200",
                        palette().mobile_panel,
                    )
                }>
                    {nav_items().into_iter().map(|item| {
                        view! {
                            <a
                                href=item.href()
                                on:click=move |_| on_message.run(Message::MobileLinkSelected(item.id))
                                class=move || {
                                    link_class(NavVariant::Mobile, item.is_active(active.get()), theme.get())
                                }
                            >
                                {item.label}
                            </a>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </nav>
    }
}
