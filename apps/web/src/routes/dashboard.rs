//! Customer dashboard. The session gate runs on mount: without a readable
//! stored user the page redirects to login; otherwise it renders exactly the
//! stored user's fields.

use crate::app_lib::ServiceError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::{
    auth::{gate, logout, GateOutcome, MockUser},
    bookings::{Booking, DashboardTab, SUPPORT_EMAIL, SUPPORT_PHONE},
    navigation::Route,
};
use crate::state::{use_services, use_session, ServicesHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{components::A, hooks::use_navigate, NavigateOptions};
use tracing::warn;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = use_services();
    let session = use_session();
    let navigate = use_navigate();

    match gate(services.sessions.as_ref()) {
        GateOutcome::Render(user) => {
            session.set_user(user.clone());
            view! {
                <AppShell>
                    <Dashboard user=user />
                </AppShell>
            }
            .into_any()
        }
        GateOutcome::Redirect(route) => {
            session.clear();
            Effect::new(move |_| {
                navigate(
                    route.path(),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            });
            view! {
                <div class="min-h-screen flex items-center justify-center">
                    <Spinner label="Checking your session" />
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Dashboard(user: MockUser) -> impl IntoView {
    let services = use_services();
    let tab = RwSignal::new(DashboardTab::default());
    let bookings = RwSignal::new(None::<Result<Vec<Booking>, ServiceError>>);

    let provider = services.bookings.clone();
    let owner = user.clone();
    spawn_local(async move {
        let result = provider.bookings_for(&owner).await;
        bookings.try_set(Some(result));
    });

    let greeting = user.name.clone();
    view! {
        <div class="max-w-6xl mx-auto">
            <div class="mb-8">
                <h1 class="text-3xl md:text-4xl font-bold text-[#f4f4f4] mb-2">
                    "Welcome back, " <span class="text-[#b8a47e]">{greeting}</span>
                </h1>
                <p class="text-[#a1a1a1]">"Manage your window services and account settings"</p>
            </div>
            <div class="flex gap-2 mb-8 border-b border-[#2a2a2a]" role="tablist">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|item| {
                        let selected = move || tab.get() == item;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                id=format!("tab-{}", item.id())
                                aria-controls=format!("panel-{}", item.id())
                                aria-selected=move || selected().to_string()
                                class=move || {
                                    if selected() {
                                        "px-4 py-2 font-medium text-[#b8a47e] border-b-2 border-[#b8a47e]"
                                    } else {
                                        "px-4 py-2 font-medium text-[#a1a1a1] hover:text-[#f4f4f4]"
                                    }
                                }
                                on:click=move |_| tab.set(item)
                            >
                                {item.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                role="tabpanel"
                id=move || format!("panel-{}", tab.get().id())
                aria-labelledby=move || format!("tab-{}", tab.get().id())
            >
                {move || match tab.get() {
                    DashboardTab::Bookings => view! { <BookingsTab bookings=bookings /> }.into_any(),
                    DashboardTab::Profile => view! { <ProfileTab user=user.clone() /> }.into_any(),
                    DashboardTab::Support => view! { <SupportTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn BookingsTab(bookings: RwSignal<Option<Result<Vec<Booking>, ServiceError>>>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-[#f4f4f4]">"Your Bookings"</h2>
                <A
                    href=Route::Services.path()
                    {..}
                    class="bg-[#b8a47e] text-black px-4 py-2 rounded-lg font-semibold hover:bg-[#b8a47e]/90"
                >
                    "Book New Service"
                </A>
            </div>
            {move || match bookings.get() {
                None => view! { <Spinner label="Loading bookings" /> }.into_any(),
                Some(Err(err)) => {
                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="text-[#a1a1a1]">"No bookings yet."</p> }.into_any()
                }
                Some(Ok(list)) => {
                    list.into_iter()
                        .map(|booking| view! { <BookingCard booking=booking /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BookingCard(booking: Booking) -> impl IntoView {
    let status = booking.status;
    let badge = format!(
        "status-badge status-{} px-3 py-1 rounded-full text-sm font-medium",
        status.tone()
    );
    view! {
        <div class="rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-6">
            <div class="flex items-start justify-between mb-4">
                <h3 class="text-xl font-semibold text-[#f4f4f4]">{booking.service}</h3>
                <span class=badge>{status.label()}</span>
            </div>
            <dl class="grid sm:grid-cols-3 gap-4 text-sm text-[#a1a1a1] mb-4">
                <div class="flex items-center gap-2">
                    <span class="material-symbols-outlined text-base">"calendar_today"</span>
                    <dd>{booking.date}</dd>
                </div>
                <div class="flex items-center gap-2">
                    <span class="material-symbols-outlined text-base">"schedule"</span>
                    <dd>{booking.time}</dd>
                </div>
                <div class="flex items-center gap-2">
                    <span class="material-symbols-outlined text-base">"location_on"</span>
                    <dd>{booking.address}</dd>
                </div>
            </dl>
            {booking
                .description
                .map(|description| view! { <p class="text-[#a1a1a1] mb-4">{description}</p> })}
            <div class="flex gap-3">
                <Show when=move || status.is_cancellable()>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg border border-red-500/40 text-red-400 hover:bg-red-500/10"
                    >
                        "Cancel"
                    </button>
                </Show>
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg border border-[#b8a47e]/40 text-[#b8a47e] hover:bg-[#b8a47e]/10"
                >
                    "View Details"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProfileTab(user: MockUser) -> impl IntoView {
    let services = expect_context::<ServicesHandle>();
    let session = use_session();
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<String>>(None);

    let on_logout = move |_| match services.with_value(|services| logout(services.sessions.as_ref())) {
        Ok(route) => {
            session.clear();
            navigate(route.path(), Default::default());
        }
        Err(err) => {
            warn!(error = %err, "logout failed");
            set_error.set(Some(err.to_string()));
        }
    };

    let read_only = |label: &'static str, value: String| {
        view! {
            <div>
                <label class="block text-sm font-medium text-[#a1a1a1] mb-2">{label}</label>
                <input
                    type="text"
                    readonly
                    value=value
                    class="w-full px-4 py-3 bg-white/5 border border-white/10 rounded-lg text-[#f4f4f4]"
                />
            </div>
        }
    };

    view! {
        <div class="rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-8">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-[#f4f4f4]">"Profile Information"</h2>
                <button
                    type="button"
                    class="flex items-center gap-2 px-4 py-2 rounded-lg border border-red-500/40 text-red-400 hover:bg-red-500/10"
                    on:click=on_logout
                >
                    <span class="material-symbols-outlined text-base">"logout"</span>
                    "Logout"
                </button>
            </div>
            {move || error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
            <div class="grid md:grid-cols-2 gap-6 mt-4">
                {read_only("Full Name", user.name)}
                {read_only("Email Address", user.email)}
                {read_only("Phone Number", user.phone)}
            </div>
            <p class="mt-6 text-sm text-[#a1a1a1]">
                "Profile editing will be available in a future update."
            </p>
        </div>
    }
}

#[component]
fn SupportTab() -> impl IntoView {
    view! {
        <div class="rounded-xl border border-[#2a2a2a] bg-[#1a1a1a] p-8">
            <h2 class="text-2xl font-bold text-[#f4f4f4] mb-6">"Customer Support"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                <div class="rounded-lg bg-white/5 p-6">
                    <span class="material-symbols-outlined text-3xl text-[#b8a47e] mb-3">"call"</span>
                    <h3 class="text-lg font-semibold text-[#f4f4f4] mb-2">"24/7 Phone Support"</h3>
                    <p class="text-[#a1a1a1] mb-2">"Call us anytime for urgent repairs"</p>
                    <p class="text-[#b8a47e] font-bold">{SUPPORT_PHONE}</p>
                </div>
                <div class="rounded-lg bg-white/5 p-6">
                    <span class="material-symbols-outlined text-3xl text-[#b8a47e] mb-3">"mail"</span>
                    <h3 class="text-lg font-semibold text-[#f4f4f4] mb-2">"Email Support"</h3>
                    <p class="text-[#a1a1a1] mb-2">"Get help via email"</p>
                    <p class="text-[#b8a47e] font-medium">{SUPPORT_EMAIL}</p>
                </div>
            </div>
        </div>
    }
}
