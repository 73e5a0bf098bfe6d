//! Client-side session persistence. A [`SessionStore`] keeps the signed-in
//! [`MockUser`](crate::features::auth::types::MockUser) as JSON under a single
//! key of a [`KeyValueStore`]: the browser's local storage in production, an
//! in-memory map in tests. There is no expiry, versioning or encryption;
//! presence of the entry is the whole session.

mod repository;
mod store;

pub use repository::{SessionRepository, SessionStore};
#[cfg(target_arch = "wasm32")]
pub use store::BrowserStorage;
pub use store::{KeyValueStore, MemoryStore};
