//! Forgot-password flow: phone, then a one-time code, then success. The
//! wizard is a pure state machine driven by the page; the OTP collaborator
//! is injected so the confirmation can be stubbed or gated in tests.

pub mod client;
pub mod step;
pub mod wizard;

pub use client::{OtpService, SimulatedOtpService};
pub use step::{RecoveryStep, StepKind, TransitionError};
pub use wizard::{Completion, OtpAction, PendingRequest, RecoveryWizard, Ticket, WizardError};
