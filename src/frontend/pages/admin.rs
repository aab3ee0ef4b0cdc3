use leptos::prelude::*;

use crate::frontend::components::{
    Button, ButtonVariant, FieldError, Section, SubmitButton, SuccessAlert, TextInput,
};
use crate::frontend::forms::{use_sink, EmailSettingsForm, Field, StoreDraftForm};
use crate::services::directory::StoreDirectory;
use crate::services::export::{stores_to_csv, EXPORT_FILENAME, EXPORT_MIME};

/// Admin panel tabs. Orders is intentionally inert until the payment
/// collaborator exists; modelling that as an explicit status lets tests
/// distinguish "not yet implemented" from missing markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Shops,
    Orders,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabStatus {
    Demo,
    Placeholder,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Shops, AdminTab::Orders, AdminTab::Email];

    pub const fn label(self) -> &'static str {
        match self {
            AdminTab::Shops => "Negozi",
            AdminTab::Orders => "Ordini",
            AdminTab::Email => "Impostazioni email",
        }
    }

    pub const fn status(self) -> TabStatus {
        match self {
            AdminTab::Shops | AdminTab::Email => TabStatus::Demo,
            AdminTab::Orders => TabStatus::Placeholder,
        }
    }

    pub const fn placeholder_note(self) -> Option<&'static str> {
        match self {
            AdminTab::Orders => Some("Ordini (demo). Collegamento Stripe in futuro."),
            _ => None,
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::Shops);

    view! {
        <Section id="admin" title="Area riservata" icon="⚙️">
            <div class="flex gap-2 mb-4">
                {move || {
                    AdminTab::ALL
                        .into_iter()
                        .map(|t| {
                            let variant = if tab.get() == t {
                                ButtonVariant::Primary
                            } else {
                                ButtonVariant::Default
                            };
                            view! {
                                <Button variant=variant on_click=move |()| tab.set(t)>
                                    {t.label()}
                                </Button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            {move || match tab.get() {
                AdminTab::Shops => view! { <AdminShops/> }.into_any(),
                AdminTab::Orders => view! { <AdminOrders/> }.into_any(),
                AdminTab::Email => view! { <AdminEmail/> }.into_any(),
            }}
        </Section>
    }
}

#[cfg(feature = "hydrate")]
fn download_csv(csv: &str) {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&csv.into());
    let bag = BlobPropertyBag::new();
    bag.set_type(EXPORT_MIME);
    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &bag) else {
        return;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Ok(anchor) = document
        .create_element("a")
        .map(|el| el.unchecked_into::<HtmlAnchorElement>())
    {
        anchor.set_href(&url);
        anchor.set_download(EXPORT_FILENAME);
        anchor.click();
    }
    let _ = Url::revoke_object_url(&url);
}

#[cfg(not(feature = "hydrate"))]
fn download_csv(csv: &str) {
    log::info!(
        "csv export {} ({}, {} bytes)",
        EXPORT_FILENAME,
        EXPORT_MIME,
        csv.len()
    );
}

fn draft_input(field: Field, placeholder: &'static str) -> impl IntoView {
    view! {
        <div>
            <input
                class="border rounded-xl px-3 py-2 w-full"
                placeholder=placeholder
                prop:value=move || field.value.get()
                on:input=move |ev| field.value.set(event_target_value(&ev))
            />
            <FieldError field=field/>
        </div>
    }
}

#[component]
fn AdminShops() -> impl IntoView {
    let directory = RwSignal::new(StoreDirectory::demo());
    let draft = StoreDraftForm::new();

    let add_row = move |()| {
        if let Ok(new_store) = draft.to_draft() {
            directory.update(|dir| {
                dir.add_store(new_store);
            });
            draft.reset();
        }
    };
    let export = move |()| {
        let csv = directory.with(|dir| stores_to_csv(dir.stores()));
        download_csv(&csv);
    };

    view! {
        <div class="space-y-4">
            <div class="grid md:grid-cols-4 gap-3">
                {draft_input(draft.name, "name")}
                {draft_input(draft.category, "category")}
                {draft_input(draft.comune, "comune")}
                {draft_input(draft.address, "address")}
                {draft_input(draft.lat, "lat")}
                {draft_input(draft.lon, "lon")}
                {draft_input(draft.website, "website")}
                <textarea
                    placeholder="description"
                    class="md:col-span-4 border rounded-xl px-3 py-2"
                    prop:value=move || draft.description.value.get()
                    on:input=move |ev| draft.description.value.set(event_target_value(&ev))
                ></textarea>
                <Button variant=ButtonVariant::Primary on_click=add_row>"➕ Aggiungi"</Button>
                <Button on_click=export>"⬇ Esporta CSV"</Button>
            </div>
            <div class="overflow-auto border rounded-2xl">
                <table class="min-w-full text-sm">
                    <thead class="bg-neutral-50">
                        <tr>
                            <th class="text-left p-2">"Nome"</th>
                            <th class="text-left p-2">"Categoria"</th>
                            <th class="text-left p-2">"Comune"</th>
                            <th class="text-left p-2">"Indirizzo"</th>
                            <th class="text-left p-2">"Lat"</th>
                            <th class="text-left p-2">"Lon"</th>
                            <th class="text-left p-2">"Website"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            directory.with(|dir| {
                                dir.stores()
                                    .iter()
                                    .map(|row| {
                                        let website = row.website.clone();
                                        view! {
                                            <tr class="border-t">
                                                <td class="p-2">{row.name.clone()}</td>
                                                <td class="p-2">{row.category.clone()}</td>
                                                <td class="p-2">{row.comune.clone()}</td>
                                                <td class="p-2">{row.address.clone()}</td>
                                                <td class="p-2">{row.position.lat}</td>
                                                <td class="p-2">{row.position.lon}</td>
                                                <td class="p-2">
                                                    {(!website.is_empty())
                                                        .then(|| {
                                                            view! {
                                                                <a
                                                                    class="underline"
                                                                    href=website.clone()
                                                                    target="_blank"
                                                                    rel="noreferrer"
                                                                >
                                                                    {website.clone()}
                                                                </a>
                                                            }
                                                        })}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn AdminOrders() -> impl IntoView {
    view! {
        <div class="text-sm text-neutral-700">
            {AdminTab::Orders.placeholder_note().unwrap_or_default()}
        </div>
    }
}

#[component]
fn AdminEmail() -> impl IntoView {
    let form = EmailSettingsForm::new();
    let success = RwSignal::new(None::<&'static str>);
    let sink = use_sink();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        success.set(form.submit(sink.0.as_ref()));
    };

    view! {
        {move || success.get().map(|msg| view! { <SuccessAlert message=msg/> })}
        <form on:submit=on_submit class="grid md:grid-cols-2 gap-3 max-w-3xl" novalidate>
            <TextInput label="Mittente (nome)" name="from_name" field=form.from_name/>
            <TextInput label="Mittente (email)" name="from_email" field=form.from_email/>
            <TextInput label="SMTP Host" name="smtp_host" field=form.smtp_host/>
            <TextInput label="SMTP User" name="smtp_user" field=form.smtp_user/>
            <TextInput label="SMTP Password" name="smtp_pass" input_type="password" field=form.smtp_pass/>
            <TextInput label="SMTP Port" name="smtp_port" field=form.smtp_port/>
            <SubmitButton class="w-fit" variant=ButtonVariant::Primary>"Salva"</SubmitButton>
            <p class="text-xs text-neutral-500 md:col-span-2">"Demo: non invia email reali."</p>
        </form>
    }
}
