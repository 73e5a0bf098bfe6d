use super::store::KeyValueStore;
use crate::{
    app_lib::{config::DEFAULT_SESSION_KEY, AppError},
    features::auth::types::MockUser,
};
use tracing::debug;

/// Where the signed-in user is remembered across page loads.
pub trait SessionRepository {
    fn load(&self) -> Result<Option<MockUser>, AppError>;
    fn save(&self, user: &MockUser) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

/// JSON-serialized [`MockUser`] under one key of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStore> SessionRepository for SessionStore<S> {
    fn load(&self) -> Result<Option<MockUser>, AppError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| AppError::Serialization(format!("Stored session is unreadable: {err}")))
    }

    fn save(&self, user: &MockUser) -> Result<(), AppError> {
        let payload = serde_json::to_string(user)
            .map_err(|err| AppError::Serialization(format!("Failed to encode session: {err}")))?;
        self.store.set(&self.key, &payload)?;
        debug!(key = %self.key, "session stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionRepository, SessionStore};
    use crate::{
        app_lib::AppError,
        features::{
            auth::types::MockUser,
            session::{KeyValueStore, MemoryStore},
        },
    };

    fn user() -> MockUser {
        MockUser {
            name: "Jane Roe".to_string(),
            phone: "555-123-4567".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn save_then_load_returns_same_user() -> Result<(), AppError> {
        let sessions = SessionStore::new(MemoryStore::new());
        assert_eq!(sessions.load()?, None);

        sessions.save(&user())?;
        assert_eq!(sessions.load()?, Some(user()));
        Ok(())
    }

    #[test]
    fn stores_plain_json_under_user_key() -> Result<(), AppError> {
        let backing = MemoryStore::new();
        let sessions = SessionStore::new(backing.clone());
        sessions.save(&user())?;

        let raw = backing.get("user")?.unwrap_or_default();
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|err| AppError::Serialization(err.to_string()))?;
        assert_eq!(value["name"], "Jane Roe");
        assert_eq!(value["phone"], "555-123-4567");
        assert_eq!(value["email"], "jane@example.com");
        Ok(())
    }

    #[test]
    fn corrupt_entry_is_a_serialization_error() -> Result<(), AppError> {
        let backing = MemoryStore::new();
        backing.set("user", "{not json")?;
        let sessions = SessionStore::new(backing);

        assert!(matches!(sessions.load(), Err(AppError::Serialization(_))));
        Ok(())
    }

    #[test]
    fn clear_removes_only_the_session_key() -> Result<(), AppError> {
        let backing = MemoryStore::new();
        backing.set("theme", "dark")?;
        let sessions = SessionStore::with_key(backing.clone(), "portal_user");
        sessions.save(&user())?;

        sessions.clear()?;

        assert_eq!(sessions.load()?, None);
        assert_eq!(backing.get("theme")?, Some("dark".to_string()));
        Ok(())
    }
}
