use crate::components::AppShell;
use crate::features::{
    catalog::{ServiceOffering, SERVICES},
    navigation::Route,
};
use leptos::prelude::*;
use leptos_router::components::A;

/// Material symbol for a catalog icon name.
fn symbol(icon: &str) -> &'static str {
    match icon {
        "wrench" => "build",
        "replace" => "swap_horiz",
        "paintbrush" => "format_paint",
        "hammer" => "handyman",
        _ => "window",
    }
}

#[component]
fn ServiceCard(service: &'static ServiceOffering) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-6 flex flex-col">
            <span class="material-symbols-outlined text-4xl text-[#b8a47e] mb-4">
                {symbol(service.icon)}
            </span>
            <h2 class="text-xl font-semibold text-[#f4f4f4] mb-2">{service.name}</h2>
            <p class="text-[#a1a1a1] mb-4 flex-1">{service.description}</p>
            <div class="flex items-center justify-between text-sm">
                <span class="font-bold text-[#b8a47e]">{service.price}</span>
                <span class="flex items-center gap-1 text-[#a1a1a1]">
                    <span class="material-symbols-outlined text-base">"schedule"</span>
                    {service.duration}
                </span>
            </div>
            <A
                href=Route::Contact.path()
                {..}
                class="mt-6 text-center bg-[#b8a47e] text-black py-2 rounded-lg font-semibold hover:bg-[#b8a47e]/90"
            >
                "Book Now"
            </A>
        </div>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="text-center mb-12">
                <h1 class="text-4xl md:text-5xl font-bold text-[#f4f4f4] mb-6">
                    "Our " <span class="text-[#b8a47e]">"Services"</span>
                </h1>
                <p class="text-xl text-[#a1a1a1] max-w-2xl mx-auto">
                    "Transparent pricing and fixed time windows for every job."
                </p>
            </div>
            <div class="grid gap-6 md:grid-cols-2">
                {SERVICES
                    .iter()
                    .map(|service| view! { <ServiceCard service=service /> })
                    .collect_view()}
            </div>
        </AppShell>
    }
}
