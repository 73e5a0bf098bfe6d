//! Forgot-password wizard. The state machine is synchronous: `submit` and
//! `resend` hand out a [`PendingRequest`] for the caller to run against an
//! [`OtpService`], and `complete` applies the outcome. The step only moves
//! once a confirmation for the current ticket arrives.

use super::{
    client::OtpService,
    step::{RecoveryStep, TransitionError},
};
use crate::{
    app_lib::ServiceError,
    features::{
        forms::{ErrorState, Field, Form, FormKind},
        navigation::Route,
    },
};
use std::fmt;
use tracing::{debug, warn};

/// Identifies one in-flight request. Completions carrying any other ticket
/// are stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OtpAction {
    SendCode { phone: String },
    ResendCode { phone: String },
    VerifyCode { phone: String, code: String },
}

impl OtpAction {
    /// Runs this action against `service`.
    pub async fn perform<O>(&self, service: &O) -> Result<(), ServiceError>
    where
        O: OtpService + ?Sized,
    {
        match self {
            OtpAction::SendCode { phone } | OtpAction::ResendCode { phone } => {
                service.send_code(phone).await
            }
            OtpAction::VerifyCode { phone, code } => service.verify_code(phone, code).await,
        }
    }
}

impl fmt::Display for OtpAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            OtpAction::SendCode { .. } => "send_code",
            OtpAction::ResendCode { .. } => "resend_code",
            OtpAction::VerifyCode { .. } => "verify_code",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub action: OtpAction,
}

/// Why the wizard refused a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardError {
    /// A request is already in flight.
    Busy,
    /// The current step's form failed validation.
    Invalid(ErrorState),
    /// Resend outside the OTP step.
    ResendUnavailable,
    /// Submit on the terminal step.
    Finished,
    Transition(TransitionError),
}

impl fmt::Display for WizardError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::Busy => write!(formatter, "a request is already in progress"),
            WizardError::Invalid(errors) => {
                write!(formatter, "{} field(s) failed validation", errors.len())
            }
            WizardError::ResendUnavailable => {
                write!(formatter, "a code can only be resent while entering it")
            }
            WizardError::Finished => write!(formatter, "the recovery flow is already complete"),
            WizardError::Transition(err) => write!(formatter, "{err}"),
        }
    }
}

impl std::error::Error for WizardError {}

/// What `complete` did with an outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The step moved forward.
    Advanced,
    /// A resend finished; the step is unchanged.
    Resent,
    /// The collaborator failed; the message is on [`RecoveryWizard::flow_error`].
    Failed,
    /// The ticket was cancelled or superseded.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct RecoveryWizard {
    step: RecoveryStep,
    phone_form: Form,
    otp_form: Form,
    in_flight: Option<PendingRequest>,
    issued: u64,
    flow_error: Option<String>,
}

impl Default for RecoveryWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryWizard {
    pub fn new() -> Self {
        Self {
            step: RecoveryStep::Phone,
            phone_form: Form::new(FormKind::RecoveryPhone),
            otp_form: Form::new(FormKind::RecoveryOtp),
            in_flight: None,
            issued: 0,
            flow_error: None,
        }
    }

    pub fn step(&self) -> &RecoveryStep {
        &self.step
    }

    /// True while a request is in flight; the submit control stays disabled.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&PendingRequest> {
        self.in_flight.as_ref()
    }

    /// Message from the last failed request, if any.
    pub fn flow_error(&self) -> Option<&str> {
        self.flow_error.as_deref()
    }

    /// The form for the current step. The success step keeps the OTP form.
    pub fn form(&self) -> &Form {
        match self.step {
            RecoveryStep::Phone => &self.phone_form,
            RecoveryStep::Otp { .. } | RecoveryStep::Success { .. } => &self.otp_form,
        }
    }

    fn form_mut(&mut self) -> &mut Form {
        match self.step {
            RecoveryStep::Phone => &mut self.phone_form,
            RecoveryStep::Otp { .. } | RecoveryStep::Success { .. } => &mut self.otp_form,
        }
    }

    /// Edits a field of the current step's form (optimistic clear).
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        self.form_mut().set_text(field, value);
    }

    /// Validates the current step and, when it passes, starts its request.
    ///
    /// # Errors
    /// `Busy` while another request runs, `Finished` on the success step and
    /// `Invalid` when validation fails (the step does not change).
    pub fn submit(&mut self) -> Result<PendingRequest, WizardError> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        self.flow_error = None;
        let action = match &self.step {
            RecoveryStep::Phone => {
                let values = self.phone_form.submit().map_err(WizardError::Invalid)?;
                OtpAction::SendCode {
                    phone: values.text(Field::Phone).to_string(),
                }
            }
            RecoveryStep::Otp { phone } => {
                let phone = phone.clone();
                let values = self.otp_form.submit().map_err(WizardError::Invalid)?;
                OtpAction::VerifyCode {
                    phone,
                    code: values.text(Field::Otp).to_string(),
                }
            }
            RecoveryStep::Success { .. } => return Err(WizardError::Finished),
        };
        Ok(self.start(action))
    }

    /// Asks for a new code without leaving the OTP step or touching its input.
    ///
    /// # Errors
    /// `Busy` while another request runs, `ResendUnavailable` outside OTP.
    pub fn resend(&mut self) -> Result<PendingRequest, WizardError> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        self.flow_error = None;
        let RecoveryStep::Otp { phone } = &self.step else {
            return Err(WizardError::ResendUnavailable);
        };
        let action = OtpAction::ResendCode {
            phone: phone.clone(),
        };
        Ok(self.start(action))
    }

    fn start(&mut self, action: OtpAction) -> PendingRequest {
        self.issued += 1;
        let request = PendingRequest {
            ticket: Ticket(self.issued),
            action,
        };
        debug!(step = %self.step.kind(), action = %request.action, "recovery request started");
        self.in_flight = Some(request.clone());
        request
    }

    /// Applies the collaborator's answer for `ticket`.
    ///
    /// # Errors
    /// Only when the table rejects the edge, which means the wizard and the
    /// request disagree about the current step.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<(), ServiceError>,
    ) -> Result<Completion, WizardError> {
        let request = match self.in_flight.take() {
            Some(request) if request.ticket == ticket => request,
            other => {
                self.in_flight = other;
                debug!("ignoring stale recovery completion");
                return Ok(Completion::Ignored);
            }
        };

        if let Err(err) = outcome {
            warn!(action = %request.action, error = %err, "recovery request failed");
            self.flow_error = Some(err.to_string());
            return Ok(Completion::Failed);
        }

        let next = match request.action {
            OtpAction::ResendCode { .. } => return Ok(Completion::Resent),
            OtpAction::SendCode { phone } => RecoveryStep::Otp { phone },
            OtpAction::VerifyCode { phone, .. } => RecoveryStep::Success { phone },
        };
        let current = std::mem::replace(&mut self.step, RecoveryStep::Phone);
        match current.clone().transition(next) {
            Ok(step) => {
                self.step = step;
                debug!(step = %self.step.kind(), "recovery step advanced");
                Ok(Completion::Advanced)
            }
            Err(err) => {
                self.step = current;
                Err(WizardError::Transition(err))
            }
        }
    }

    /// Abandons the in-flight request; a late completion for it is ignored.
    /// Returns whether anything was cancelled.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.in_flight.take().is_some();
        if cancelled {
            debug!("recovery request cancelled");
        }
        cancelled
    }

    /// "Back to login", available from every step.
    pub fn exit(&mut self) -> Route {
        self.cancel();
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::{Completion, OtpAction, RecoveryWizard, WizardError};
    use crate::{
        app_lib::ServiceError,
        features::{
            forms::{rules, Field},
            navigation::Route,
            recovery::{client::OtpService, step::RecoveryStep, SimulatedOtpService},
        },
    };
    use async_trait::async_trait;
    use std::{cell::RefCell, time::Duration};
    use tokio::sync::oneshot;

    type Gate = oneshot::Receiver<Result<(), ServiceError>>;

    /// Holds every call until the test releases its gate.
    #[derive(Default)]
    struct GatedOtp {
        gate: RefCell<Option<Gate>>,
    }

    impl GatedOtp {
        fn new(gate: Gate) -> Self {
            Self {
                gate: RefCell::new(Some(gate)),
            }
        }

        async fn wait(&self) -> Result<(), ServiceError> {
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(gate) => gate
                    .await
                    .unwrap_or_else(|_| Err(ServiceError::Unavailable("gate dropped".to_string()))),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl OtpService for GatedOtp {
        async fn send_code(&self, _phone: &str) -> Result<(), ServiceError> {
            self.wait().await
        }

        async fn verify_code(&self, _phone: &str, _code: &str) -> Result<(), ServiceError> {
            self.wait().await
        }
    }

    fn at_otp_step() -> RecoveryWizard {
        let mut wizard = RecoveryWizard::new();
        wizard.set_text(Field::Phone, "555-123-4567");
        let request = wizard.submit().expect("valid phone");
        assert_eq!(
            wizard.complete(request.ticket, Ok(())),
            Ok(Completion::Advanced)
        );
        wizard
    }

    #[test]
    fn invalid_phone_stays_on_phone_step() {
        let mut wizard = RecoveryWizard::new();
        wizard.set_text(Field::Phone, "12345");

        let outcome = wizard.submit();

        let Err(WizardError::Invalid(errors)) = outcome else {
            panic!("expected validation failure, got {outcome:?}");
        };
        assert_eq!(errors.get(Field::Phone), Some(rules::PHONE_INVALID));
        assert_eq!(wizard.step(), &RecoveryStep::Phone);
        assert_eq!(wizard.form().error(Field::Phone), Some(rules::PHONE_INVALID));
        assert!(!wizard.is_busy());
    }

    #[tokio::test]
    async fn advances_only_after_confirmation_resolves() {
        let mut wizard = RecoveryWizard::new();
        wizard.set_text(Field::Phone, "(555) 123-4567");
        let request = wizard.submit().expect("valid phone");
        assert_eq!(
            request.action,
            OtpAction::SendCode {
                phone: "(555) 123-4567".to_string()
            }
        );

        let (release, gate) = oneshot::channel();
        let service = GatedOtp::new(gate);
        let confirmation = request.action.perform(&service);
        tokio::pin!(confirmation);

        let early = tokio::time::timeout(Duration::ZERO, &mut confirmation).await;
        assert!(early.is_err(), "confirmation resolved before release");
        assert_eq!(wizard.step(), &RecoveryStep::Phone);
        assert!(wizard.is_busy());

        release.send(Ok(())).expect("receiver alive");
        let outcome = confirmation.await;
        assert_eq!(
            wizard.complete(request.ticket, outcome),
            Ok(Completion::Advanced)
        );
        assert_eq!(
            wizard.step(),
            &RecoveryStep::Otp {
                phone: "(555) 123-4567".to_string()
            }
        );
        assert!(!wizard.is_busy());
    }

    #[test]
    fn busy_wizard_refuses_submit_and_resend() {
        let mut wizard = at_otp_step();
        wizard.set_text(Field::Otp, "123456");
        let _pending = wizard.submit().expect("valid otp");

        assert_eq!(wizard.submit(), Err(WizardError::Busy));
        assert_eq!(wizard.resend(), Err(WizardError::Busy));
    }

    #[tokio::test]
    async fn verify_reaches_success_with_simulated_service() {
        let mut wizard = at_otp_step();
        wizard.set_text(Field::Otp, "123456");
        let request = wizard.submit().expect("valid otp");

        let outcome = request.action.perform(&SimulatedOtpService::new(0)).await;
        assert_eq!(
            wizard.complete(request.ticket, outcome),
            Ok(Completion::Advanced)
        );
        assert_eq!(
            wizard.step(),
            &RecoveryStep::Success {
                phone: "555-123-4567".to_string()
            }
        );
        assert_eq!(wizard.submit(), Err(WizardError::Finished));
    }

    #[test]
    fn invalid_otp_stays_on_otp_step() {
        let mut wizard = at_otp_step();
        wizard.set_text(Field::Otp, "12a456");

        assert!(matches!(wizard.submit(), Err(WizardError::Invalid(_))));
        assert_eq!(wizard.form().error(Field::Otp), Some(rules::OTP_INVALID));
        assert!(matches!(wizard.step(), RecoveryStep::Otp { .. }));
    }

    #[test]
    fn resend_keeps_step_and_typed_code() {
        let mut wizard = at_otp_step();
        wizard.set_text(Field::Otp, "12");

        let request = wizard.resend().expect("resend in otp");
        assert_eq!(
            request.action,
            OtpAction::ResendCode {
                phone: "555-123-4567".to_string()
            }
        );
        assert_eq!(
            wizard.complete(request.ticket, Ok(())),
            Ok(Completion::Resent)
        );
        assert!(matches!(wizard.step(), RecoveryStep::Otp { .. }));
        assert_eq!(wizard.form().text(Field::Otp), "12");
    }

    #[test]
    fn resend_only_exists_on_otp_step() {
        let mut wizard = RecoveryWizard::new();
        assert_eq!(wizard.resend(), Err(WizardError::ResendUnavailable));
    }

    #[test]
    fn failure_keeps_step_and_records_message() {
        let mut wizard = at_otp_step();
        wizard.set_text(Field::Otp, "654321");
        let request = wizard.submit().expect("valid otp");

        let outcome = Err(ServiceError::Rejected("Invalid verification code".to_string()));
        assert_eq!(
            wizard.complete(request.ticket, outcome),
            Ok(Completion::Failed)
        );
        assert!(matches!(wizard.step(), RecoveryStep::Otp { .. }));
        assert_eq!(wizard.flow_error(), Some("Invalid verification code"));
        assert!(!wizard.is_busy());

        // A new attempt clears the banner.
        let _retry = wizard.submit().expect("retry allowed");
        assert_eq!(wizard.flow_error(), None);
    }

    #[test]
    fn invalid_resubmit_drops_previous_failure_banner() {
        let mut wizard = RecoveryWizard::new();
        wizard.set_text(Field::Phone, "555-123-4567");
        let request = wizard.submit().expect("valid phone");
        let outcome = Err(ServiceError::Unavailable("down".to_string()));
        assert_eq!(
            wizard.complete(request.ticket, outcome),
            Ok(Completion::Failed)
        );
        assert!(wizard.flow_error().is_some());

        wizard.set_text(Field::Phone, "12");
        assert!(matches!(wizard.submit(), Err(WizardError::Invalid(_))));
        assert_eq!(wizard.flow_error(), None);
        assert_eq!(wizard.form().error(Field::Phone), Some(rules::PHONE_INVALID));
    }

    #[test]
    fn resend_drops_previous_failure_banner() {
        let mut wizard = at_otp_step();
        wizard.set_text(Field::Otp, "654321");
        let request = wizard.submit().expect("valid otp");
        let outcome = Err(ServiceError::Rejected("Invalid verification code".to_string()));
        assert_eq!(
            wizard.complete(request.ticket, outcome),
            Ok(Completion::Failed)
        );

        let _resend = wizard.resend().expect("resend in otp");
        assert_eq!(wizard.flow_error(), None);
    }

    #[test]
    fn cancelled_ticket_is_ignored() {
        let mut wizard = RecoveryWizard::new();
        wizard.set_text(Field::Phone, "5551234567");
        let request = wizard.submit().expect("valid phone");

        assert!(wizard.cancel());
        assert_eq!(
            wizard.complete(request.ticket, Ok(())),
            Ok(Completion::Ignored)
        );
        assert_eq!(wizard.step(), &RecoveryStep::Phone);
    }

    #[test]
    fn superseded_ticket_does_not_clear_newer_request() {
        let mut wizard = RecoveryWizard::new();
        wizard.set_text(Field::Phone, "5551234567");
        let first = wizard.submit().expect("valid phone");
        wizard.cancel();
        let second = wizard.submit().expect("resubmit");

        assert_eq!(wizard.complete(first.ticket, Ok(())), Ok(Completion::Ignored));
        assert_eq!(wizard.in_flight(), Some(&second));
        assert_eq!(
            wizard.complete(second.ticket, Ok(())),
            Ok(Completion::Advanced)
        );
    }

    #[test]
    fn exit_returns_login_from_any_step() {
        let mut wizard = RecoveryWizard::new();
        assert_eq!(wizard.exit(), Route::Login);

        let mut wizard = at_otp_step();
        let _pending = wizard.resend().expect("resend");
        assert_eq!(wizard.exit(), Route::Login);
        assert!(!wizard.is_busy());
    }
}
