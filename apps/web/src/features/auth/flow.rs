//! Login and signup submissions in two steps: `prepare_*` validates the form
//! synchronously, `complete_*` calls the auth collaborator and persists the
//! fabricated user. Nothing is stored unless the collaborator reported
//! success.

use super::{
    client::AuthService,
    types::{Credentials, MockUser, Registration},
};
use crate::features::{
    forms::{Form, SubmitError},
    session::SessionRepository,
};
use tracing::{debug, warn};

/// Validates the login form. On failure the messages stay on `form` and
/// nothing is sent.
///
/// # Errors
/// `SubmitError::Invalid` with the field messages.
pub fn prepare_login(form: &mut Form) -> Result<Credentials, SubmitError> {
    let values = form.submit().map_err(SubmitError::Invalid)?;
    Ok(Credentials::from_values(&values))
}

/// Signs in with already validated credentials and stores the user.
///
/// # Errors
/// `SubmitError::Failed` when the collaborator or the session store refused;
/// nothing is stored then.
pub async fn complete_login<A, R>(
    credentials: &Credentials,
    auth: &A,
    sessions: &R,
) -> Result<MockUser, SubmitError>
where
    A: AuthService + ?Sized,
    R: SessionRepository + ?Sized,
{
    if let Err(err) = auth.login(credentials).await {
        warn!(error = %err, "login rejected");
        return Err(err.into());
    }
    let user = MockUser::from_login(credentials);
    persist(&user, sessions)?;
    debug!("login complete");
    Ok(user)
}

/// Validates the signup form, same contract as [`prepare_login`].
///
/// # Errors
/// `SubmitError::Invalid` with the field messages.
pub fn prepare_signup(form: &mut Form) -> Result<Registration, SubmitError> {
    let values = form.submit().map_err(SubmitError::Invalid)?;
    Ok(Registration::from_values(&values))
}

pub async fn complete_signup<A, R>(
    registration: &Registration,
    auth: &A,
    sessions: &R,
) -> Result<MockUser, SubmitError>
where
    A: AuthService + ?Sized,
    R: SessionRepository + ?Sized,
{
    if let Err(err) = auth.signup(registration).await {
        warn!(error = %err, "signup rejected");
        return Err(err.into());
    }
    let user = MockUser::from_registration(registration);
    persist(&user, sessions)?;
    debug!("signup complete");
    Ok(user)
}

fn persist<R>(user: &MockUser, sessions: &R) -> Result<(), SubmitError>
where
    R: SessionRepository + ?Sized,
{
    sessions.save(user).map_err(|err| {
        warn!(error = %err, "failed to persist session");
        SubmitError::Failed(err)
    })
}
