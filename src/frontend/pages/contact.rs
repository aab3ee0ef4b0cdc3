use leptos::prelude::*;

use crate::frontend::components::{ButtonVariant, Section, SubmitButton, SuccessAlert, TextArea, TextInput};
use crate::frontend::forms::{use_sink, ContactForm};

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = ContactForm::new();
    let success = RwSignal::new(None::<&'static str>);
    let sink = use_sink();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        success.set(form.submit(sink.0.as_ref()));
    };

    view! {
        <Section id="contatti" title="Contatti" icon="✉️">
            {move || success.get().map(|msg| view! { <SuccessAlert message=msg/> })}
            <form on:submit=on_submit class="max-w-3xl grid gap-4" novalidate>
                <div class="grid md:grid-cols-2 gap-4">
                    <TextInput label="Nome" name="nome" field=form.nome/>
                    <TextInput label="Email" name="email" input_type="email" field=form.email/>
                </div>
                <TextArea label="Messaggio" name="messaggio" rows=5 field=form.messaggio/>
                <SubmitButton class="w-fit" variant=ButtonVariant::Primary>"Invia"</SubmitButton>
            </form>
        </Section>
    }
}
