use crate::features::navigation::{active_nav_item, BOTTOM_NAV};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

/// Fixed tab bar for small screens.
#[component]
pub fn BottomNav() -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| active_nav_item(&location.pathname.get()).map(|item| item.route));

    view! {
        <nav class="fixed bottom-0 inset-x-0 z-40 border-t border-[#2a2a2a] bg-[#1a1a1a]/95 md:hidden">
            <ul class="grid grid-cols-4">
                {BOTTOM_NAV
                    .into_iter()
                    .map(|item| {
                        let is_active = move || active.get() == Some(item.route);
                        view! {
                            <li>
                                <A
                                    href=item.route.path()
                                    {..}
                                    class=move || {
                                        if is_active() {
                                            "flex flex-col items-center py-2 text-xs text-[#b8a47e]"
                                        } else {
                                            "flex flex-col items-center py-2 text-xs text-[#a1a1a1]"
                                        }
                                    }
                                    aria-current=move || is_active().then_some("page")
                                >
                                    <span class="material-symbols-outlined">{item.icon}</span>
                                    {item.label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
