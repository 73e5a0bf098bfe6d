//! Authentication collaborator. The shipped implementation is simulated: it
//! waits the configured latency and accepts every request.

use super::types::{Credentials, Registration};
use crate::app_lib::{latency, ServiceError};
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait AuthService {
    /// Checks a phone/password pair.
    async fn login(&self, credentials: &Credentials) -> Result<(), ServiceError>;

    /// Creates an account.
    async fn signup(&self, registration: &Registration) -> Result<(), ServiceError>;
}

#[derive(Clone, Copy, Debug)]
pub struct SimulatedAuthService {
    latency_ms: u32,
}

impl SimulatedAuthService {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl AuthService for SimulatedAuthService {
    async fn login(&self, _credentials: &Credentials) -> Result<(), ServiceError> {
        latency::pause(self.latency_ms).await;
        Ok(())
    }

    async fn signup(&self, _registration: &Registration) -> Result<(), ServiceError> {
        latency::pause(self.latency_ms).await;
        Ok(())
    }
}
