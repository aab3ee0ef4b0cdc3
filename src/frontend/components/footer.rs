use leptos::prelude::*;

use crate::frontend::router::Route;

fn current_year() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        2025
    }
}

#[component]
pub fn Footer(route: RwSignal<Route>) -> impl IntoView {
    view! {
        <footer class="border-t mt-12 bg-neutral-50">
            <div class="max-w-6xl mx-auto px-4 md:px-6 py-10 grid md:grid-cols-3 gap-8 items-start">
                <div>
                    <div class="flex items-center gap-3 font-semibold mb-2">
                        <span class="text-2xl" aria-hidden="true">"🎁"</span>
                        <span>"Tarocard"</span>
                    </div>
                    <p class="text-sm text-neutral-600">
                        "Gift card locale per sostenere i negozi del territorio."
                    </p>
                </div>
                <div class="text-sm">
                    <div class="font-medium mb-2">"Documenti"</div>
                    <ul class="space-y-1">
                        {Route::FOOTER_DOCS
                            .into_iter()
                            .map(|doc| {
                                view! {
                                    <li>
                                        <button class="underline" on:click=move |_| route.set(doc)>
                                            {doc.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="text-sm">
                    <div class="font-medium mb-2">"Contatti"</div>
                    <p>"IAT Valtaro e Valceno"</p>
                    <p>"📞 +39 000 000 000"</p>
                    <p>"✉️ info@tarocard.it"</p>
                </div>
            </div>
            <div class="text-center text-xs text-neutral-500 py-4">
                {format!("© {} Tarocard", current_year())}
            </div>
        </footer>
    }
}
