use leptos::prelude::*;

/// Progress ring. `label` is shown under it; without one, screen readers
/// still hear "Loading".
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let text_class = if label.is_some() {
        "text-sm text-[#a1a1a1]"
    } else {
        "sr-only"
    };
    view! {
        <div class="flex flex-col items-center gap-3" role="status" aria-live="polite">
            <div
                class="h-12 w-12 animate-spin rounded-full border-b-2 border-[#b8a47e]"
                aria-hidden="true"
            ></div>
            <span class=text_class>{label.unwrap_or("Loading")}</span>
        </div>
    }
}
