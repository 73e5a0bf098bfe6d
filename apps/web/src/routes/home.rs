use crate::components::AppShell;
use crate::features::{catalog::SERVICES, navigation::Route};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="text-center py-16">
                <h1 class="text-4xl md:text-6xl font-bold text-[#f4f4f4] mb-6">
                    "Crystal Clear " <span class="text-[#b8a47e]">"Window Services"</span>
                </h1>
                <p class="text-xl text-[#a1a1a1] max-w-2xl mx-auto mb-8">
                    "Repair, replacement, repainting and installation by certified technicians."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <A
                        href=Route::Contact.path()
                        {..}
                        class="bg-[#b8a47e] text-black py-3 px-8 rounded-lg font-semibold hover:bg-[#b8a47e]/90"
                    >
                        "Get a Free Quote"
                    </A>
                    <A
                        href=Route::Services.path()
                        {..}
                        class="border border-[#b8a47e] text-[#b8a47e] py-3 px-8 rounded-lg font-semibold hover:bg-[#b8a47e]/10"
                    >
                        "Our Services"
                    </A>
                </div>
            </section>
            <section class="py-12">
                <h2 class="text-3xl font-bold text-center text-[#f4f4f4] mb-8">"What We Do"</h2>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-6">
                                    <h3 class="text-lg font-semibold text-[#f4f4f4] mb-2">
                                        {service.name}
                                    </h3>
                                    <p class="text-sm text-[#a1a1a1]">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </AppShell>
    }
}
