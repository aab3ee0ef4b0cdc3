pub mod components;
pub mod forms;
pub mod map;
pub mod pages;
pub mod router;

use leptos::prelude::*;
use leptos_meta::*;

use components::{Footer, Header};
use forms::SinkHandle;
use pages::{
    AdminPage, ContactPage, EnrollPage, HomePage, MapPage, PrivacyPage, PurchasePage, RulesPage,
    TermsPage,
};
use router::Route;

/// Main application component: shared header/footer around exactly one
/// page body, chosen by the in-memory view router. Starts on Home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    if use_context::<SinkHandle>().is_none() {
        provide_context(SinkHandle::default());
    }

    let route = RwSignal::new(Route::Home);

    view! {
        <Title text="Tarocard - La gift card di Valtaro e Valceno"/>
        <Meta
            name="description"
            content="Tarocard e la carta regalo spendibile nei negozi convenzionati di Valtaro e Valceno"
        />

        <div class="min-h-screen bg-white text-neutral-900">
            <Header route=route/>
            <main>
                {move || match route.get() {
                    Route::Home => view! { <HomePage route=route/> }.into_any(),
                    Route::Map => view! { <MapPage/> }.into_any(),
                    Route::Purchase => view! { <PurchasePage/> }.into_any(),
                    Route::Enroll => view! { <EnrollPage/> }.into_any(),
                    Route::Contact => view! { <ContactPage/> }.into_any(),
                    Route::Rules => view! { <RulesPage/> }.into_any(),
                    Route::Privacy => view! { <PrivacyPage/> }.into_any(),
                    Route::Terms => view! { <TermsPage/> }.into_any(),
                    Route::Admin => view! { <AdminPage/> }.into_any(),
                }}
            </main>
            <Footer route=route/>
        </div>
    }
}
