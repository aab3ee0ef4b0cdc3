use leptos::prelude::*;

use crate::frontend::forms::Field;

#[component]
pub fn FieldError(field: Field) -> impl IntoView {
    view! {
        {move || {
            field
                .error
                .get()
                .map(|msg| view! { <p class="text-sm text-red-600 mt-1">{msg}</p> })
        }}
    }
}

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    field: Field,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div>
            <label class="text-sm" for=name.clone()>{label}</label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                class="mt-1 w-full border rounded-xl px-3 py-2"
                prop:value=move || field.value.get()
                on:input=move |ev| field.value.set(event_target_value(&ev))
            />
            <FieldError field=field/>
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    field: Field,
    #[prop(optional)] rows: u32,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };

    view! {
        <div>
            <label class="text-sm" for=name.clone()>{label}</label>
            <textarea
                id=name.clone()
                name=name
                rows=rows
                class="mt-1 w-full border rounded-xl px-3 py-2"
                prop:value=move || field.value.get()
                on:input=move |ev| field.value.set(event_target_value(&ev))
            ></textarea>
            <FieldError field=field/>
        </div>
    }
}

/// Dropdown bound to a [`Field`], used for fixed category choices.
#[component]
pub fn SelectInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    field: Field,
    options: Vec<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="text-sm" for=name.clone()>{label}</label>
            <select
                id=name.clone()
                name=name
                class="mt-1 w-full border rounded-xl px-3 py-2"
                prop:value=move || field.value.get()
                on:change=move |ev| field.value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|opt| view! { <option value=opt.clone()>{opt.clone()}</option> })
                    .collect_view()}
            </select>
            <FieldError field=field/>
        </div>
    }
}
