use leptos::prelude::*;

/// Full-width accent button. Shows a spinner and `busy_label` while `busy`.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] busy: Signal<bool>,
    #[prop(optional)] busy_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let busy_label = busy_label.unwrap_or("Please wait...");
    let inactive = move || disabled.get() || busy.get();
    let idle = children();
    view! {
        <button
            type=button_type
            class="w-full bg-[#b8a47e] text-black py-3 px-4 rounded-lg font-semibold hover:bg-[#b8a47e]/90 focus:outline-none focus:ring-2 focus:ring-[#b8a47e] transition-colors"
            class:cursor-not-allowed=inactive
            class:opacity-50=inactive
            disabled=inactive
            aria-busy=move || busy.get().to_string()
        >
            <span class="flex items-center justify-center gap-2" class:hidden=move || !busy.get()>
                <span class="h-5 w-5 animate-spin rounded-full border-2 border-black border-t-transparent"></span>
                {busy_label}
            </span>
            <span class:hidden=move || busy.get()>{idle}</span>
        </button>
    }
}
