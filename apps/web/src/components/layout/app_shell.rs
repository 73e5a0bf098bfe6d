//! Shared layout wrapper with header, footer and the mobile bottom bar. The
//! header swaps its account link on the stored session; that is a UX hint,
//! not access control.

use super::BottomNav;
use crate::{
    app_lib::build_info,
    features::navigation::Route,
    state::use_session,
};
use leptos::prelude::*;
use leptos_router::components::A;

const HEADER_LINKS: [(Route, &str); 3] = [
    (Route::Home, "Home"),
    (Route::Services, "Services"),
    (Route::Contact, "Contact"),
];

const LINK_CLASS: &str =
    "block py-2 px-3 text-[#a1a1a1] rounded hover:text-[#b8a47e] md:p-0 transition-colors";

/// Wraps routes with a header, main content container and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let session = use_session();
    let is_authenticated = session.is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col pb-16 md:pb-0">
            <header class="border-b border-[#2a2a2a] bg-[#0e0e0e]/90 backdrop-blur">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=Route::Home.path()
                        {..}
                        class="flex items-center space-x-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="material-symbols-outlined text-[#b8a47e]">"window"</span>
                        <span class="font-semibold whitespace-nowrap text-[#f4f4f4]">
                            "WindowFix Pro"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-[#a1a1a1] rounded-lg md:hidden hover:bg-white/5 focus:outline-none"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 md:flex-row md:space-x-8 md:mt-0">
                            {HEADER_LINKS
                                .into_iter()
                                .map(|(route, label)| {
                                    view! {
                                        <li>
                                            <A
                                                href=route.path()
                                                {..}
                                                class=LINK_CLASS
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <A
                                                href=Route::Login.path()
                                                {..}
                                                class=LINK_CLASS
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Login"
                                            </A>
                                        }
                                    }
                                >
                                    <A
                                        href=Route::Dashboard.path()
                                        {..}
                                        class=LINK_CLASS
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Dashboard"
                                    </A>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="border-t border-[#2a2a2a] py-6 text-center text-sm text-[#a1a1a1]">
                <p>"© WindowFix Pro. Professional window services."</p>
                <p class="mt-1 font-mono text-xs" title=build_info::git_commit_hash()>
                    {format!("v{} build {}", build_info::version(), build_info::short_commit_hash())}
                </p>
            </footer>
            <BottomNav />
        </div>
    }
}
