//! Client-side gate for the dashboard. Presence of a readable session entry
//! is the only check; there is no server-side authorization behind it.

use super::types::MockUser;
use crate::{
    app_lib::AppError,
    features::{navigation::Route, session::SessionRepository},
};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Render(MockUser),
    Redirect(Route),
}

/// Decides whether a protected page may render.
///
/// An unreadable entry is removed and treated as signed out, so a corrupt
/// value cannot wedge the dashboard.
pub fn gate<R>(sessions: &R) -> GateOutcome
where
    R: SessionRepository + ?Sized,
{
    match sessions.load() {
        Ok(Some(user)) => GateOutcome::Render(user),
        Ok(None) => {
            debug!("no session, redirecting to login");
            GateOutcome::Redirect(Route::Login)
        }
        Err(err) => {
            warn!(error = %err, "discarding unreadable session");
            if let Err(err) = sessions.clear() {
                warn!(error = %err, "failed to clear unreadable session");
            }
            GateOutcome::Redirect(Route::Login)
        }
    }
}

/// Forgets the user and returns where to go next.
///
/// # Errors
/// Returns the storage error when the entry could not be removed.
pub fn logout<R>(sessions: &R) -> Result<Route, AppError>
where
    R: SessionRepository + ?Sized,
{
    sessions.clear()?;
    debug!("logged out");
    Ok(Route::Login)
}
