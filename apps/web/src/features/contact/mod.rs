//! Contact form submission. On success the form is reset and a notice is
//! shown until `notice_dismiss_ms` elapses; on failure the typed values stay.

use crate::{
    app_lib::{latency, ServiceError},
    features::forms::{Field, Form, FormState, SubmitError},
};
use async_trait::async_trait;
use tracing::{debug, warn};

pub const SUCCESS_NOTICE: &str = "Message sent successfully!";

/// A validated contact request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn from_values(values: &FormState) -> Self {
        Self {
            name: values.text(Field::Name).trim().to_string(),
            email: values.text(Field::Email).trim().to_string(),
            phone: values.text(Field::Phone).to_string(),
            message: values.text(Field::Message).trim().to_string(),
        }
    }
}

#[async_trait(?Send)]
pub trait ContactService {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ServiceError>;
}

#[derive(Clone, Copy, Debug)]
pub struct SimulatedContactService {
    latency_ms: u32,
}

impl SimulatedContactService {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl ContactService for SimulatedContactService {
    async fn submit(&self, _message: &ContactMessage) -> Result<(), ServiceError> {
        latency::pause(self.latency_ms).await;
        Ok(())
    }
}

/// Validates `form`. On failure the messages stay on the form and nothing
/// is sent.
///
/// # Errors
/// `SubmitError::Invalid` with the field messages.
pub fn prepare(form: &mut Form) -> Result<ContactMessage, SubmitError> {
    let values = form.submit().map_err(SubmitError::Invalid)?;
    Ok(ContactMessage::from_values(&values))
}

/// Sends a validated message. The caller resets its form when this returns
/// `Ok` and keeps the typed values otherwise.
///
/// # Errors
/// `SubmitError::Failed` when the service refused.
pub async fn send<C>(message: &ContactMessage, service: &C) -> Result<(), SubmitError>
where
    C: ContactService + ?Sized,
{
    if let Err(err) = service.submit(message).await {
        warn!(error = %err, "contact request failed");
        return Err(err.into());
    }
    debug!("contact request sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{prepare, send, ContactMessage, ContactService, SimulatedContactService};
    use crate::{
        app_lib::ServiceError,
        features::forms::{rules, Field, Form, FormKind, SubmitError},
    };
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Outbox {
        sent: RefCell<Vec<ContactMessage>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl ContactService for Outbox {
        async fn submit(&self, message: &ContactMessage) -> Result<(), ServiceError> {
            if self.fail {
                return Err(ServiceError::Unavailable("mailbox offline".to_string()));
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    /// Same sequence as the contact page: validate, send, reset on success.
    async fn submit<C>(form: &mut Form, service: &C) -> Result<(), SubmitError>
    where
        C: ContactService + ?Sized,
    {
        let message = prepare(form)?;
        send(&message, service).await?;
        form.reset();
        Ok(())
    }

    fn filled() -> Form {
        let mut form = Form::new(FormKind::Contact);
        form.set_text(Field::Name, "Sam Lee ");
        form.set_text(Field::Email, "sam@example.com");
        form.set_text(Field::Phone, "555 123 4567");
        form.set_text(Field::Message, "Cracked pane in the kitchen");
        form
    }

    #[tokio::test]
    async fn success_sends_trimmed_message_and_resets() {
        let outbox = Outbox::default();
        let mut form = filled();

        assert_eq!(submit(&mut form, &outbox).await, Ok(()));

        assert_eq!(
            outbox.sent.borrow().as_slice(),
            &[ContactMessage {
                name: "Sam Lee".to_string(),
                email: "sam@example.com".to_string(),
                phone: "555 123 4567".to_string(),
                message: "Cracked pane in the kitchen".to_string(),
            }]
        );
        assert_eq!(form, Form::new(FormKind::Contact));
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() {
        let outbox = Outbox::default();
        let mut form = filled();
        form.set_text(Field::Message, "   ");

        let outcome = submit(&mut form, &outbox).await;

        assert!(matches!(outcome, Err(SubmitError::Invalid(_))));
        assert_eq!(form.error(Field::Message), Some(rules::MESSAGE_REQUIRED));
        assert!(outbox.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_values() {
        let outbox = Outbox {
            fail: true,
            ..Outbox::default()
        };
        let mut form = filled();

        let outcome = submit(&mut form, &outbox).await;

        assert_eq!(
            outcome.map_err(|err| err.banner()),
            Err(Some("Service unavailable: mailbox offline".to_string()))
        );
        assert_eq!(form.text(Field::Name), "Sam Lee ");
    }

    #[tokio::test]
    async fn simulated_service_accepts() {
        let mut form = filled();
        assert_eq!(submit(&mut form, &SimulatedContactService::new(0)).await, Ok(()));
    }
}
