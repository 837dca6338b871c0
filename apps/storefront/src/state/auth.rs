//! # Auth State
//!
//! Tracks the signed-in user for the session.
//!
//! The shell doesn't perform authentication itself; it receives the
//! authenticated identity from the sign-in flow and holds it for the
//! operations that require one (order submission, wishlist persistence,
//! order history).

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use veld_core::{CoreError, CoreResult};

/// The authenticated user for this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Stable user identifier; the key for orders and wishlist rows.
    pub uid: String,

    pub email: String,

    /// Optional display name for greeting copy.
    pub display_name: Option<String>,
}

/// Session auth state.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    user: Arc<Mutex<Option<AuthUser>>>,
}

impl AuthState {
    /// Creates a signed-out auth state.
    pub fn new() -> Self {
        AuthState {
            user: Arc::new(Mutex::new(None)),
        }
    }

    /// Records a successful sign-in.
    pub fn sign_in(&self, user: AuthUser) {
        let mut guard = self.user.lock().expect("Auth mutex poisoned");
        *guard = Some(user);
    }

    /// Clears the session.
    pub fn sign_out(&self) {
        let mut guard = self.user.lock().expect("Auth mutex poisoned");
        *guard = None;
    }

    /// Returns the current user, if signed in.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.user.lock().expect("Auth mutex poisoned").clone()
    }

    /// Returns the current user or fails with [`CoreError::NotSignedIn`].
    ///
    /// Used by operations that must not proceed anonymously.
    pub fn require_user(&self) -> CoreResult<AuthUser> {
        self.current_user().ok_or(CoreError::NotSignedIn)
    }

    /// Checks whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }
}
