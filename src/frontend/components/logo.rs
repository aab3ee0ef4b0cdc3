use leptos::prelude::*;

/// Optional hosted logo; the gift glyph is used while this stays empty.
const LOGO_URL: &str = "";

#[component]
pub fn Logo() -> impl IntoView {
    let broken = RwSignal::new(false);

    view! {
        {move || {
            if LOGO_URL.is_empty() || broken.get() {
                view! { <span class="text-3xl" aria-hidden="true">"🎁"</span> }.into_any()
            } else {
                view! {
                    <img
                        src=LOGO_URL
                        alt="Tarocard logo"
                        class="w-12 h-12 object-contain"
                        on:error=move |_| broken.set(true)
                    />
                }
                .into_any()
            }
        }}
    }
}
