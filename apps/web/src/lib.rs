//! # WindowFix Pro web app
//!
//! Everything with a behavioral contract lives in this library so it can be
//! exercised on the host: form validation, the password-recovery wizard, the
//! login/signup/contact controllers, the session repository and the booking
//! provider. The Leptos UI in `main.rs` only wires these into components.
//!
//! ## Simulated backend
//!
//! There is no server-side API. Authentication, OTP delivery, contact
//! submissions and bookings are collaborators behind traits. The shipped
//! implementations wait a configured latency and succeed; tests inject stubs
//! that resolve instantly or fail on demand.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;
