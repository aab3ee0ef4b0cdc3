use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant, Logo};
use crate::frontend::router::Route;

/// Sticky site header: desktop nav buttons plus a select menu on mobile.
/// The active route's button is highlighted.
#[component]
pub fn Header(route: RwSignal<Route>) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-white/90 border-b">
            <div class="max-w-6xl mx-auto px-4 md:px-6 h-20 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <Logo/>
                    <span class="font-semibold text-xl">"Tarocard"</span>
                </div>
                <nav class="hidden md:flex items-center gap-2">
                    {move || {
                        Route::HEADER_LINKS
                            .into_iter()
                            .map(|link| {
                                let variant = if route.get() == link {
                                    ButtonVariant::Primary
                                } else {
                                    ButtonVariant::Default
                                };
                                view! {
                                    <Button
                                        class="px-3 py-1.5 text-sm"
                                        variant=variant
                                        on_click=move |()| route.set(link)
                                    >
                                        {link.label()}
                                    </Button>
                                }
                            })
                            .collect_view()
                    }}
                    <Button class="px-3 py-1.5 text-sm" on_click=move |()| route.set(Route::Admin)>
                        "🛡 Area riservata"
                    </Button>
                </nav>
                <div class="md:hidden">
                    <select
                        class="border rounded-xl px-3 py-2"
                        prop:value=move || route.get().key()
                        on:change=move |ev| {
                            if let Some(next) = Route::from_key(&event_target_value(&ev)) {
                                route.set(next);
                            }
                        }
                    >
                        {Route::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.key()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </header>
    }
}
