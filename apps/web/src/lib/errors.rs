use std::fmt;

/// Failure reported by a simulated backend collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// The collaborator answered and refused the request (wrong code, bad credentials).
    Rejected(String),
    /// The collaborator could not be reached.
    Unavailable(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Rejected(message) => write!(formatter, "{message}"),
            ServiceError::Unavailable(message) => {
                write!(formatter, "Service unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Storage(String),
    Serialization(String),
    Service(ServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Serialization error: {message}")
            }
            AppError::Service(err) => write!(formatter, "{err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::Service(err)
    }
}
