//! OTP delivery and verification collaborator.

use crate::app_lib::{latency, ServiceError};
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait OtpService {
    /// Sends (or re-sends) a one-time code to `phone`.
    async fn send_code(&self, phone: &str) -> Result<(), ServiceError>;

    /// Checks `code` against the one last sent to `phone`.
    async fn verify_code(&self, phone: &str, code: &str) -> Result<(), ServiceError>;
}

/// Waits the configured latency and accepts every phone and code.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedOtpService {
    latency_ms: u32,
}

impl SimulatedOtpService {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl OtpService for SimulatedOtpService {
    async fn send_code(&self, _phone: &str) -> Result<(), ServiceError> {
        latency::pause(self.latency_ms).await;
        Ok(())
    }

    async fn verify_code(&self, _phone: &str, _code: &str) -> Result<(), ServiceError> {
        latency::pause(self.latency_ms).await;
        Ok(())
    }
}
