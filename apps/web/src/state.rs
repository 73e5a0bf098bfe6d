//! Application context shared through Leptos: the injected collaborators and
//! the reactive view of the stored session. Collaborators sit behind `Rc` in
//! a local `StoredValue` because they are not `Send`.

use crate::{
    app_lib::config::AppConfig,
    features::{
        auth::{gate, AuthService, GateOutcome, MockUser, SimulatedAuthService},
        bookings::{BookingProvider, FixtureBookings},
        contact::{ContactService, SimulatedContactService},
        recovery::{OtpService, SimulatedOtpService},
        session::{BrowserStorage, SessionRepository, SessionStore},
    },
};
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    pub auth: Rc<dyn AuthService>,
    pub otp: Rc<dyn OtpService>,
    pub contact: Rc<dyn ContactService>,
    pub bookings: Rc<dyn BookingProvider>,
    pub sessions: Rc<dyn SessionRepository>,
}

impl Services {
    /// Simulated collaborators with the configured latencies, and the session
    /// kept in local storage.
    pub fn simulated(config: AppConfig) -> Self {
        let sessions = SessionStore::with_key(BrowserStorage, config.session_key.clone());
        Self {
            auth: Rc::new(SimulatedAuthService::new(config.auth_latency_ms)),
            otp: Rc::new(SimulatedOtpService::new(config.otp_latency_ms)),
            contact: Rc::new(SimulatedContactService::new(config.contact_latency_ms)),
            bookings: Rc::new(FixtureBookings),
            sessions: Rc::new(sessions),
            config,
        }
    }
}

pub type ServicesHandle = StoredValue<Services, LocalStorage>;

/// Signed-in user as seen by the chrome (header links, bottom nav).
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<MockUser>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new(user: RwSignal<Option<MockUser>>) -> Self {
        let is_authenticated = Signal::derive(move || user.with(Option::is_some));
        Self {
            user,
            is_authenticated,
        }
    }

    pub fn set_user(&self, user: MockUser) {
        self.user.set(Some(user));
    }

    pub fn clear(&self) {
        self.user.set(None);
    }
}

/// Provides the collaborators and hydrates the session once on mount.
#[component]
pub fn ServicesProvider(config: AppConfig, children: Children) -> impl IntoView {
    let services = Services::simulated(config);
    let initial = match gate(services.sessions.as_ref()) {
        GateOutcome::Render(user) => Some(user),
        GateOutcome::Redirect(_) => None,
    };

    provide_context::<ServicesHandle>(StoredValue::new_local(services));
    provide_context(SessionContext::new(RwSignal::new(initial)));

    view! { {children()} }
}

pub fn use_services() -> Services {
    expect_context::<ServicesHandle>().get_value()
}

/// Returns the session context or a signed-out fallback.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(RwSignal::new(None)))
}
