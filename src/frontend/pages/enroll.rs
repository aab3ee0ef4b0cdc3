use leptos::prelude::*;

use crate::frontend::components::{
    ButtonVariant, Section, SelectInput, SubmitButton, SuccessAlert, TextArea, TextInput,
};
use crate::frontend::forms::{use_sink, EnrollForm};

const CATEGORY_CHOICES: [&str; 6] = [
    "Bar & Caffe",
    "Alimentari",
    "Ristorazione",
    "Abbigliamento",
    "Servizi",
    "Altro",
];

#[component]
pub fn EnrollPage() -> impl IntoView {
    let form = EnrollForm::new();
    let success = RwSignal::new(None::<&'static str>);
    let sink = use_sink();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        success.set(form.submit(sink.0.as_ref()));
    };

    view! {
        <Section id="aderisci" title="Aderisci al circuito Tarocard" icon="🏪">
            <p class="text-neutral-700 mb-6">
                "Compila il modulo: riceverai via email la convenzione da firmare e le istruzioni operative."
            </p>
            {move || success.get().map(|msg| view! { <SuccessAlert message=msg/> })}
            <form on:submit=on_submit class="max-w-4xl grid gap-4" novalidate>
                <div class="grid md:grid-cols-2 gap-4">
                    <TextInput label="Ragione sociale" name="ragione_sociale" field=form.ragione_sociale/>
                    <TextInput label="P.IVA" name="piva" field=form.piva/>
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <TextInput label="Indirizzo" name="indirizzo" field=form.indirizzo/>
                    <TextInput label="Comune" name="comune" field=form.comune/>
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <SelectInput
                        label="Categoria"
                        name="categoria"
                        field=form.categoria
                        options=CATEGORY_CHOICES.map(String::from).to_vec()
                    />
                    <TextInput label="Telefono" name="telefono" field=form.telefono/>
                </div>
                <TextArea label="Descrizione breve" name="descrizione" rows=4 field=form.descrizione/>
                <div>
                    <label class="inline-flex items-center gap-2 text-sm">
                        <input
                            type="checkbox"
                            prop:checked=move || form.privacy.get()
                            on:change=move |ev| form.privacy.set(event_target_checked(&ev))
                        />
                        "Accetto l'informativa privacy"
                    </label>
                    {move || {
                        form.privacy_error
                            .get()
                            .then(|| view! { <p class="text-sm text-red-600 mt-1">"Necessario"</p> })
                    }}
                </div>
                <SubmitButton class="w-fit" variant=ButtonVariant::Primary>"Invia richiesta"</SubmitButton>
            </form>
        </Section>
    }
}
