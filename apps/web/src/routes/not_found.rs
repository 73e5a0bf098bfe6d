//! Fallback page for unknown paths.

use crate::components::AppShell;
use crate::features::navigation::Route;
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::warn;

fn go_back() {
    let Some(window) = web_sys::window() else {
        warn!("no window to navigate back from");
        return;
    };
    if let Err(err) = window.history().and_then(|history| history.back()) {
        warn!(error = ?err, "history back failed");
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <div class="relative">
                    <h1 class="text-9xl font-black text-[#1a1a1a] select-none">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-[#f4f4f4] whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>
                <div class="mt-4 space-y-6">
                    <p class="text-[#a1a1a1] max-w-sm mx-auto">
                        "The page you requested does not exist."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A
                            href=Route::Home.path()
                            {..}
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-black bg-[#b8a47e] rounded-lg hover:bg-[#b8a47e]/90 transition-all"
                        >
                            <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                            "Go Home"
                        </A>
                        <button
                            on:click=move |_| go_back()
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-[#f4f4f4] border border-[#2a2a2a] rounded-lg hover:text-[#b8a47e] transition-all"
                        >
                            <span class="material-symbols-outlined mr-2 text-base">"arrow_back"</span>
                            "Go Back"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
