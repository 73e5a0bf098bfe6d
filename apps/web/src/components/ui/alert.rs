//! Alert banners for flow-level outcomes. Field errors render under their
//! inputs instead.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let (class, icon) = match kind {
        AlertKind::Error => (
            "flex items-center gap-2 rounded-lg border border-red-500/40 bg-red-500/10 px-4 py-3 text-sm text-red-400",
            "error",
        ),
        AlertKind::Success => (
            "flex items-center gap-2 rounded-lg border border-green-500/40 bg-green-500/10 px-4 py-3 text-sm text-green-500",
            "check_circle",
        ),
        AlertKind::Info => (
            "flex items-center gap-2 rounded-lg border border-[#b8a47e]/40 bg-[#b8a47e]/10 px-4 py-3 text-sm text-[#b8a47e]",
            "info",
        ),
    };
    view! {
        <div class=class role="alert">
            <span class="material-symbols-outlined text-base">{icon}</span>
            <span>{message}</span>
        </div>
    }
}
