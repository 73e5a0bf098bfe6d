//! Steps of the forgot-password flow and the edges allowed between them.

use std::fmt;

/// Current step, carrying the phone number once it has been accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecoveryStep {
    Phone,
    Otp { phone: String },
    Success { phone: String },
}

/// Payload-free tag of a [`RecoveryStep`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Phone,
    Otp,
    Success,
}

impl fmt::Display for StepKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            StepKind::Phone => "phone",
            StepKind::Otp => "otp",
            StepKind::Success => "success",
        })
    }
}

/// Forward edges; everything else is illegal. The flow never moves back.
pub const TRANSITIONS: [(StepKind, StepKind); 2] = [
    (StepKind::Phone, StepKind::Otp),
    (StepKind::Otp, StepKind::Success),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionError {
    pub from: StepKind,
    pub to: StepKind,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "illegal recovery transition {} -> {}", self.from, self.to)
    }
}

impl std::error::Error for TransitionError {}

impl RecoveryStep {
    pub fn kind(&self) -> StepKind {
        match self {
            RecoveryStep::Phone => StepKind::Phone,
            RecoveryStep::Otp { .. } => StepKind::Otp,
            RecoveryStep::Success { .. } => StepKind::Success,
        }
    }

    /// The accepted phone number, once past the first step.
    pub fn phone(&self) -> Option<&str> {
        match self {
            RecoveryStep::Phone => None,
            RecoveryStep::Otp { phone } | RecoveryStep::Success { phone } => Some(phone),
        }
    }

    /// Moves to `next` when the table allows the edge.
    ///
    /// # Errors
    /// Returns a [`TransitionError`] naming both ends of a rejected edge.
    pub fn transition(self, next: RecoveryStep) -> Result<RecoveryStep, TransitionError> {
        let edge = (self.kind(), next.kind());
        if TRANSITIONS.contains(&edge) {
            Ok(next)
        } else {
            Err(TransitionError {
                from: edge.0,
                to: edge.1,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RecoveryStep, StepKind, TransitionError};

    fn otp() -> RecoveryStep {
        RecoveryStep::Otp {
            phone: "5551234567".to_string(),
        }
    }

    fn success() -> RecoveryStep {
        RecoveryStep::Success {
            phone: "5551234567".to_string(),
        }
    }

    #[test]
    fn forward_edges_are_allowed() {
        assert_eq!(RecoveryStep::Phone.transition(otp()), Ok(otp()));
        assert_eq!(otp().transition(success()), Ok(success()));
    }

    #[test]
    fn skipping_and_going_back_are_rejected() {
        assert_eq!(
            RecoveryStep::Phone.transition(success()),
            Err(TransitionError {
                from: StepKind::Phone,
                to: StepKind::Success,
            })
        );
        assert!(otp().transition(RecoveryStep::Phone).is_err());
        assert!(success().transition(otp()).is_err());
        assert!(otp().transition(otp()).is_err());
    }

    #[test]
    fn phone_is_carried_after_first_step() {
        assert_eq!(RecoveryStep::Phone.phone(), None);
        assert_eq!(success().phone(), Some("5551234567"));
        assert_eq!(
            TransitionError {
                from: StepKind::Success,
                to: StepKind::Phone
            }
            .to_string(),
            "illegal recovery transition success -> phone"
        );
    }
}
