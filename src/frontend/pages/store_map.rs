use leptos::prelude::*;

use crate::frontend::components::Section;
use crate::frontend::map::MapCanvas;
use crate::services::directory::{StoreDirectory, ALL_CATEGORIES};

#[component]
pub fn MapPage() -> impl IntoView {
    let directory = StoreDirectory::demo();
    let first = directory.stores().first().cloned();
    let category_options = directory.categories();
    let directory = StoredValue::new(directory);

    let category = RwSignal::new(ALL_CATEGORIES.to_string());
    let selected = RwSignal::new(first);
    let filtered = Memo::new(move |_| {
        directory.with_value(|d| d.filter_by_category(&category.get()))
    });
    let center = Memo::new(move |_| directory.with_value(|d| d.compute_center(&filtered.get())));

    view! {
        <Section id="mappa" title="Mappa dei negozi convenzionati" icon="🗺️">
            <div class="mb-4 flex items-center gap-3">
                <label class="text-sm" for="categoria-filtro">"Categoria:"</label>
                <select
                    id="categoria-filtro"
                    class="border rounded-xl px-3 py-2"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    {category_options
                        .into_iter()
                        .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="grid md:grid-cols-3 gap-4">
                <div class="md:col-span-1 max-h-[480px] overflow-auto rounded-2xl border">
                    {move || {
                        filtered
                            .get()
                            .into_iter()
                            .map(|store| {
                                let id = store.id;
                                let pick = store.clone();
                                view! {
                                    <button
                                        class=move || {
                                            let active = selected
                                                .with(|s| s.as_ref().is_some_and(|s| s.id == id));
                                            format!(
                                                "w-full text-left px-4 py-3 border-b last:border-b-0 hover:bg-neutral-50{}",
                                                if active { " bg-neutral-50" } else { "" },
                                            )
                                        }
                                        on:click=move |_| selected.set(Some(pick.clone()))
                                    >
                                        <div class="font-semibold">{store.name.clone()}</div>
                                        <div class="text-sm text-neutral-600">
                                            {format!("{} · {}", store.category, store.comune)}
                                        </div>
                                        <div class="text-xs text-neutral-600">{store.address.clone()}</div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="md:col-span-2 h-[480px] rounded-3xl overflow-hidden border">
                    <MapCanvas stores=filtered selected=selected center=center/>
                </div>
            </div>
        </Section>
    }
}
