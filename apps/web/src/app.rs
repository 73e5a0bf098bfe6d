use crate::app_lib::config::AppConfig;
use crate::routes::AppRoutes;
use crate::state::ServicesProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    view! {
        <ServicesProvider config=config>
            <Router>
                <AppRoutes />
            </Router>
        </ServicesProvider>
    }
}
