use leptos::prelude::*;

/// Shared page-section wrapper: centered column with an icon + title row.
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] icon: String,
    children: Children,
) -> impl IntoView {
    let has_icon = !icon.is_empty();

    view! {
        <section id=id class="max-w-6xl mx-auto px-4 md:px-6 py-12">
            <div class="flex items-center gap-3 mb-6">
                {has_icon.then(|| view! { <span class="text-2xl" aria-hidden="true">{icon.clone()}</span> })}
                <h2 class="text-2xl md:text-3xl font-semibold tracking-tight">{title}</h2>
            </div>
            {children()}
        </section>
    }
}

#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full border px-3 py-1 text-sm font-medium">
            {children()}
        </span>
    }
}
