//! Layout components shared across routes.

mod app_shell;
mod bottom_nav;

pub(crate) use app_shell::AppShell;
pub(crate) use bottom_nav::BottomNav;
