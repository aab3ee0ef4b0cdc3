use leptos::prelude::*;

use crate::models::{Position, Store};

#[cfg(feature = "hydrate")]
pub mod leaflet;

/// Initial zoom of the interactive map, also used by the fallback embed.
pub const DEFAULT_ZOOM: u8 = 12;

/// Zoom applied when a single store is selected.
pub const FOCUS_ZOOM: u8 = 14;

/// Element id of the Leaflet script tag in the document shell.
pub const SCRIPT_ELEMENT_ID: &str = "leaflet-script";

/// Lifecycle of the external mapping library. Resolved at most once per
/// view; a failure is terminal for the session and switches the map to
/// the degraded embed permanently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderState {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Read-only OpenStreetMap embed shown when Leaflet never loads. Store
/// selection is unavailable in this mode.
pub fn fallback_embed_url(center: Position, zoom: u8) -> String {
    format!(
        "https://www.openstreetmap.org/export/embed.html?layer=mapnik&marker={},{}&zoom={}",
        center.lat, center.lon, zoom
    )
}

/// Marker popup body. A store without a website gets no link at all
/// rather than a dead one.
pub fn popup_html(store: &Store) -> String {
    let mut html = format!(
        "<div class=\"space-y-1\"><div class=\"font-semibold\">{}</div>\
         <div class=\"text-sm text-neutral-600\">{} · {}</div>\
         <div class=\"text-sm\">{}</div>",
        store.name, store.category, store.comune, store.address
    );
    if !store.description.is_empty() {
        html.push_str(&format!(
            "<p class=\"text-sm mt-1\">{}</p>",
            store.description
        ));
    }
    if store.has_website() {
        html.push_str(&format!(
            "<a class=\"text-sm underline\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">Sito web</a>",
            store.website
        ));
    }
    html.push_str("</div>");
    html
}

/// Map pane: Leaflet canvas while the library is pending/ready, degraded
/// embed once loading has failed. The canvas div is rendered up front and
/// kept stable so the Ready transition does not tear down an initialized
/// map.
#[component]
pub fn MapCanvas(
    stores: Memo<Vec<Store>>,
    selected: RwSignal<Option<Store>>,
    center: Memo<Position>,
) -> impl IntoView {
    let loader = RwSignal::new(LoaderState::Pending);

    #[cfg(feature = "hydrate")]
    leaflet::wire(stores, selected, center, loader);
    #[cfg(not(feature = "hydrate"))]
    let _ = (stores, selected);

    view! {
        <Show
            when=move || loader.get() != LoaderState::Failed
            fallback=move || {
                view! {
                    <iframe
                        {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        title="Mappa Tarocard fallback"
                        src=fallback_embed_url(center.get(), DEFAULT_ZOOM)
                        class="w-full h-full"
                        style="border: 0"
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                }
            }
        >
            <div id="tarocard-map" class="w-full h-full"></div>
        </Show>
    }
}
