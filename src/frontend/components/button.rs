use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-2xl px-4 py-2 \
     font-medium shadow-sm border hover:shadow-md transition";

fn classes(variant: ButtonVariant, extra: &str) -> String {
    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-emerald-900 text-white border-emerald-900",
        ButtonVariant::Default => "bg-white text-neutral-900 border-neutral-300",
    };
    format!("{} {} {}", BASE_CLASSES, variant_classes, extra)
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button type="button" class=classes(variant, &class) on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}

/// Same look as [`Button`] but submits the surrounding form.
#[component]
pub fn SubmitButton(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <button type="submit" class=classes(variant, &class)>
            {children()}
        </button>
    }
}

/// Styled like a button, rendered as an outbound link.
#[component]
pub fn LinkButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <a href=href class=classes(variant, &class)>
            {children()}
        </a>
    }
}
