//! Bindings and wiring for the Leaflet global loaded from the CDN script
//! tag. Compiled only for the browser build.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use js_sys::{Array, Function, Object, Reflect};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use super::{popup_html, LoaderState, DEFAULT_ZOOM, FOCUS_ZOOM, SCRIPT_ELEMENT_ID};
use crate::models::Store;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

#[wasm_bindgen]
extern "C" {
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &Array, zoom: f64, options: &JsValue) -> Map;

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &Map) -> TileLayer;

    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_group_to(this: &LayerGroup, map: &Map) -> LayerGroup;

    #[wasm_bindgen(method)]
    fn remove(this: &LayerGroup);

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(coords: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, group: &LayerGroup) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method)]
    fn on(this: &Marker, event: &str, handler: &Function) -> Marker;
}

fn lat_lon(lat: f64, lon: f64) -> Array {
    Array::of2(&lat.into(), &lon.into())
}

fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}

/// Resolves the loader state exactly once: Ready if the global is already
/// present, otherwise from the script tag's load/error event. The `alive`
/// flag keeps a late callback from touching a view that was torn down.
fn watch_script(loader: RwSignal<LoaderState>, alive: Arc<AtomicBool>) {
    let Some(window) = web_sys::window() else {
        loader.set(LoaderState::Failed);
        return;
    };
    if Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false) {
        loader.set(LoaderState::Ready);
        return;
    }
    let script = window
        .document()
        .and_then(|d| d.get_element_by_id(SCRIPT_ELEMENT_ID));
    let Some(script) = script else {
        loader.set(LoaderState::Failed);
        return;
    };

    let on_load = {
        let alive = alive.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            if alive.load(Ordering::Relaxed) {
                loader.set(LoaderState::Ready);
            }
        })
    };
    let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        if alive.load(Ordering::Relaxed) {
            loader.set(LoaderState::Failed);
        }
    });
    let _ = script.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    let _ = script.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_load.forget();
    on_error.forget();
}

/// Connects the map pane to Leaflet: initializes the map once the library
/// is ready, rebuilds the marker layer when the filtered list changes, and
/// recenters with an animated transition when the selection changes.
pub fn wire(
    stores: Memo<Vec<Store>>,
    selected: RwSignal<Option<Store>>,
    center: Memo<crate::models::Position>,
    loader: RwSignal<LoaderState>,
) {
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });
    watch_script(loader, alive.clone());

    let map: Rc<RefCell<Option<Map>>> = Rc::new(RefCell::new(None));
    let markers: Rc<RefCell<Option<LayerGroup>>> = Rc::new(RefCell::new(None));

    Effect::new({
        let map = map.clone();
        let markers = markers.clone();
        let alive = alive.clone();
        move |_| {
            let visible = stores.get();
            if loader.get() != LoaderState::Ready || !alive.load(Ordering::Relaxed) {
                return;
            }
            if map.borrow().is_none() {
                let c = center.get_untracked();
                let m = leaflet_map("tarocard-map");
                m.set_view(
                    &lat_lon(c.lat, c.lon),
                    f64::from(DEFAULT_ZOOM),
                    &JsValue::UNDEFINED,
                );
                let tiles = tile_layer(
                    TILE_URL,
                    &options(&[("attribution", JsValue::from_str(TILE_ATTRIBUTION))]),
                );
                tiles.add_tiles_to(&m);
                *map.borrow_mut() = Some(m);
            }
            if let Some(old) = markers.borrow_mut().take() {
                old.remove();
            }
            let group = {
                let map_ref = map.borrow();
                let Some(m) = map_ref.as_ref() else {
                    return;
                };
                layer_group().add_group_to(m)
            };
            for store in visible {
                let pin = marker(&lat_lon(store.position.lat, store.position.lon));
                pin.add_marker_to(&group);
                pin.bind_popup(&popup_html(&store));
                let on_click = {
                    let alive = alive.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        if alive.load(Ordering::Relaxed) {
                            selected.set(Some(store.clone()));
                        }
                    })
                };
                pin.on("click", on_click.as_ref().unchecked_ref());
                on_click.forget();
            }
            *markers.borrow_mut() = Some(group);
        }
    });

    Effect::new({
        let map = map.clone();
        move |_| {
            let Some(sel) = selected.get() else {
                return;
            };
            if let Some(m) = map.borrow().as_ref() {
                m.set_view(
                    &lat_lon(sel.position.lat, sel.position.lon),
                    f64::from(FOCUS_ZOOM),
                    &options(&[("animate", JsValue::TRUE)]),
                );
            }
        }
    });
}
