mod contact;
mod dashboard;
mod forgot_password;
mod home;
mod login;
mod not_found;
mod services;
mod signup;

pub(crate) use contact::ContactPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use services::ServicesPage;
pub(crate) use signup::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/services") view=ServicesPage />
            <Route path=path!("/contact") view=ContactPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
