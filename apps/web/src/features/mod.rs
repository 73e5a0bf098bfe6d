//! Feature modules: forms and the flows built on them, the session store, the
//! simulated backend collaborators and the static catalog data.

pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod contact;
pub mod forms;
pub mod navigation;
pub mod recovery;
pub mod session;
