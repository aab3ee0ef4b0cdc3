use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant, Pill, Section};
use crate::frontend::router::Route;

const STEPS: [(&str, &str); 3] = [
    ("Acquista la card", "Scegli 15€, 25€ o 50€."),
    (
        "Usala nei negozi",
        "Paghi in un'unica soluzione o più acquisti fino a esaurimento.",
    ),
    (
        "Sostieni il territorio",
        "Acquisti in valle e sostieni l'economia locale.",
    ),
];

#[component]
pub fn HomePage(route: RwSignal<Route>) -> impl IntoView {
    view! {
        <section class="border-b bg-gradient-to-b from-emerald-50 to-white">
            <div class="max-w-6xl mx-auto px-4 md:px-6 py-16 md:py-24 grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h1 class="text-4xl md:text-5xl font-bold leading-tight">
                        "La gift card che sostiene "
                        <span class="underline decoration-amber-400">"Valtaro e Valceno"</span>
                    </h1>
                    <p class="mt-4 text-lg text-neutral-700">
                        "Tarocard e la carta regalo spendibile nei negozi convenzionati del territorio. Tagli da 15€, 25€ e 50€."
                    </p>
                    <div class="mt-6 flex gap-3">
                        <Button variant=ButtonVariant::Primary on_click=move |()| route.set(Route::Purchase)>
                            "Acquista ora →"
                        </Button>
                        <Button on_click=move |()| route.set(Route::Map)>
                            "Dove spenderla"
                        </Button>
                    </div>
                    <div class="mt-6 flex flex-wrap gap-2">
                        <Pill>"Valida 12 mesi"</Pill>
                        <Pill>"Nessun resto in contanti"</Pill>
                        <Pill>"Acquisti in valle"</Pill>
                    </div>
                </div>
                <div class="bg-white rounded-3xl border shadow-sm p-6">
                    <img
                        src="https://images.unsplash.com/photo-1556742044-3c52d6e88c62?q=80&w=1200&auto=format&fit=crop"
                        alt="Gift card"
                        class="rounded-2xl w-full object-cover"
                    />
                </div>
            </div>
        </section>

        <Section id="come-funziona" title="Come funziona" icon="✅">
            <div class="grid md:grid-cols-3 gap-6">
                {STEPS
                    .into_iter()
                    .map(|(title, text)| {
                        view! {
                            <div class="rounded-3xl border p-6 shadow-sm">
                                <h3 class="font-semibold text-lg">{title}</h3>
                                <p class="text-neutral-600 mt-2">{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
