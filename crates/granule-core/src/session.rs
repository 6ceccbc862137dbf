//! Demo sign-in session, persisted next to the app shortcuts.

use crate::storage::{
    AUTH_PROFILE_KEY, AUTH_USER_KEY, KeyValueStorage, StorageError, read_json, write_json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// The only accepted email.
pub const DEMO_EMAIL: &str = "admin@example.com";

/// The only accepted password.
pub const DEMO_PASSWORD: &str = "123456";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Not signed in")]
    SignedOut,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub organization_id: Option<String>,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
}

/// The signed-in user, restored from storage on startup.
pub struct Session<S: KeyValueStorage> {
    storage: Arc<S>,
    user: Option<AuthUser>,
    profile: Option<Profile>,
}

impl<S: KeyValueStorage> Session<S> {
    /// Restore whatever session `storage` holds. Malformed entries are ignored,
    /// and a profile without a user is dropped.
    pub fn restore(storage: Arc<S>) -> Self {
        let user: Option<AuthUser> = read_json(&*storage, AUTH_USER_KEY);
        let profile = user
            .as_ref()
            .and_then(|_| read_json(&*storage, AUTH_PROFILE_KEY));
        Self {
            storage,
            user,
            profile,
        }
    }

    /// Check the demo credentials and persist the session on success.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&Profile, AuthError> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            log::info!("Rejected sign-in for {email}");
            return Err(AuthError::InvalidCredentials);
        }

        let user = AuthUser {
            id: "1".to_string(),
            email: email.to_string(),
        };
        let profile = Profile {
            id: "1".to_string(),
            organization_id: None,
            email: email.to_string(),
            full_name: Some("Demo Admin".to_string()),
            role: Role::Admin,
        };

        // The user key marks the session, so it goes last.
        write_json(&*self.storage, AUTH_PROFILE_KEY, &profile)?;
        if let Err(e) = write_json(&*self.storage, AUTH_USER_KEY, &user) {
            if let Err(cleanup) = self.storage.remove(AUTH_PROFILE_KEY) {
                log::warn!("Failed to remove {AUTH_PROFILE_KEY}: {cleanup}");
            }
            return Err(e.into());
        }
        log::info!("Signed in as {email}");

        self.user = Some(user);
        Ok(self.profile.insert(profile))
    }

    /// Accepts any registration without creating an account.
    pub fn sign_up(&self, email: &str, _password: &str, _full_name: &str) -> Result<(), AuthError> {
        log::debug!("Ignoring sign-up for {email}");
        Ok(())
    }

    /// Forget the session in storage, then in memory.
    ///
    /// If the user key can't be removed the session stays signed in.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.storage.remove(AUTH_USER_KEY)?;
        self.user = None;
        self.profile = None;
        self.storage.remove(AUTH_PROFILE_KEY)?;
        log::info!("Signed out");
        Ok(())
    }

    /// Change the display name on the signed-in profile.
    ///
    /// A blank name clears it. Memory only changes once the write succeeds.
    pub fn update_profile(&mut self, full_name: &str) -> Result<&Profile, AuthError> {
        let Some(current) = self.profile.as_ref().filter(|_| self.user.is_some()) else {
            return Err(AuthError::SignedOut);
        };

        let full_name = full_name.trim();
        let updated = Profile {
            full_name: (!full_name.is_empty()).then(|| full_name.to_string()),
            ..current.clone()
        };
        write_json(&*self.storage, AUTH_PROFILE_KEY, &updated)?;
        log::info!("Updated profile for {}", updated.email);
        Ok(self.profile.insert(updated))
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}
