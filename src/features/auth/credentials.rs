use std::path::Path;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::features::auth::model::UserModel;
use crate::shared::constants::{ROLE_ADMINISTRATOR, ROLE_USER};

/// Lookup of login credentials
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// User whose username matches case-insensitively and whose password digest matches
    async fn find(&self, username: &str, password: &str) -> Option<UserModel>;
}

/// Fixed, in-process credential list
pub struct StaticCredentialStore {
    users: Vec<UserModel>,
}

impl StaticCredentialStore {
    pub fn new(users: Vec<UserModel>) -> Self {
        Self { users }
    }

    /// The two built-in accounts
    pub fn seeded() -> Self {
        Self::new(vec![
            UserModel {
                username: "John_admin".to_string(),
                password_sha256: password_digest("Admin_Password7"),
                email: "admin.john@gmail.com".to_string(),
                given_name: "John".to_string(),
                surname: "Smith".to_string(),
                role: ROLE_ADMINISTRATOR.to_string(),
            },
            UserModel {
                username: "Kate_user".to_string(),
                password_sha256: password_digest("User_Password8"),
                email: "user.kate@gmail.com".to_string(),
                given_name: "Kate".to_string(),
                surname: "Clark".to_string(),
                role: ROLE_USER.to_string(),
            },
        ])
    }

    /// Load users from a JSON array of [`UserModel`]
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let users: Vec<UserModel> = serde_json::from_str(&raw)?;
        if users.is_empty() {
            anyhow::bail!("{} contains no users", path.display());
        }
        Ok(Self::new(users))
    }

    /// File-backed store when `path` is set, built-in accounts otherwise
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let store = Self::from_file(path)?;
                tracing::info!(
                    "Loaded {} login account(s) from {}",
                    store.users.len(),
                    path.display()
                );
                Ok(store)
            }
            None => {
                tracing::warn!("AUTH_USERS_FILE not set, using built-in accounts");
                Ok(Self::seeded())
            }
        }
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn find(&self, username: &str, password: &str) -> Option<UserModel> {
        let digest = password_digest(password);
        let username = username.to_lowercase();
        self.users
            .iter()
            .find(|u| u.username.to_lowercase() == username && u.password_sha256 == digest)
            .cloned()
    }
}

/// Lowercase hex SHA-256 of a password
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
