use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

#[component]
pub fn Alert(#[prop(into)] message: String, #[prop(optional)] variant: AlertVariant) -> impl IntoView {
    let (icon, classes) = match variant {
        AlertVariant::Success => ("✓", "bg-emerald-50 border-emerald-300 text-emerald-800"),
        AlertVariant::Error => ("✕", "bg-red-50 border-red-300 text-red-700"),
    };

    view! {
        <div class=format!("mb-4 p-4 rounded-xl border text-sm {}", classes)>
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
        </div>
    }
}

#[component]
pub fn SuccessAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Success/> }
}
