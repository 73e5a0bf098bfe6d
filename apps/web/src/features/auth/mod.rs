//! Login, signup and the dashboard gate. Authentication is simulated: the
//! collaborator only waits, and a fabricated user is kept in the session
//! store. Passwords never leave the submitting flow and are never logged.

pub mod client;
pub mod flow;
pub mod gate;
pub mod types;

pub use client::{AuthService, SimulatedAuthService};
pub use gate::{gate, logout, GateOutcome};
pub use types::{Credentials, MockUser, Registration};
