use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::auth::identity::AuthUser;
use crate::types::error::AppError;

/// Turns a session identifier back into a user.
///
/// Returning `Ok(None)` means "no such user" and is not an error; `Err` is
/// reserved for storage failures.
#[async_trait]
pub trait UserLoader: Send + Sync {
    type User: AuthUser + Send;

    async fn load_user(&self, user_id: &str) -> Result<Option<Self::User>, AppError>;
}

/// Session-side entry point. The loader is handed in at startup instead of being
/// registered globally.
pub struct LoginManager<L: UserLoader> {
    loader: Arc<L>,
}

impl<L: UserLoader> Clone for LoginManager<L> {
    fn clone(&self) -> Self {
        Self { loader: Arc::clone(&self.loader) }
    }
}

impl<L: UserLoader> LoginManager<L> {
    pub fn new(loader: Arc<L>) -> Self {
        Self { loader }
    }

    /// Resolves the identifier carried by a session, if there is one.
    pub async fn current_user(&self, session_id: Option<&str>) -> Result<Option<L::User>, AppError> {
        let Some(id) = session_id else {
            return Ok(None);
        };
        let user = self.loader.load_user(id).await?;
        if user.is_none() {
            debug!("session refers to unknown user {id:?}");
        }
        Ok(user.filter(|u| u.is_active()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Named(String);

    impl AuthUser for Named {
        fn get_id(&self) -> String {
            self.0.clone()
        }
    }

    struct MapLoader(HashMap<String, String>);

    #[async_trait]
    impl UserLoader for MapLoader {
        type User = Named;

        async fn load_user(&self, user_id: &str) -> Result<Option<Named>, AppError> {
            Ok(self.0.get(user_id).map(|name| Named(name.clone())))
        }
    }

    fn manager() -> LoginManager<MapLoader> {
        let mut users = HashMap::new();
        users.insert("1".to_string(), "ada".to_string());
        LoginManager::new(Arc::new(MapLoader(users)))
    }

    #[tokio::test]
    async fn resolves_known_id() {
        let user = manager().current_user(Some("1")).await.unwrap();
        assert_eq!(user.map(|u| u.get_id()), Some("ada".to_string()));
    }

    #[tokio::test]
    async fn unknown_or_missing_id_is_absent() {
        let m = manager();
        assert!(m.current_user(Some("2")).await.unwrap().is_none());
        assert!(m.current_user(None).await.unwrap().is_none());
    }
}
