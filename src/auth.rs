//! Authentication provider contract.
//!
//! The real provider is a remote service whose wire protocol is not this
//! crate's business; the cores only need a presence stream and an async
//! sign-in that succeeds or fails with a user-displayable message.
//! [`StaticAuthProvider`] is the in-process stand-in for tests and
//! offline builds.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use crate::BoxFuture;

/// Why a sign-in attempt did not produce an authenticated user.
///
/// Every variant is recoverable by a fresh user-initiated attempt; the
/// display form is surfaced verbatim in the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("authentication timed out")]
    Timeout,

    #[error("authentication provider error: {0}")]
    Provider(String),
}

/// External authentication service seam.
///
/// `subscribe` streams whether a user is currently present; the initial
/// value reflects the provider's view at subscription time. `sign_in`
/// performs one network round trip and resolves exactly once.
pub trait AuthProvider: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<bool>;

    fn sign_in(&self, username: String, password: String)
        -> BoxFuture<'static, Result<(), AuthError>>;
}

/// Fixed-credential provider: a username/password table checked locally.
pub struct StaticAuthProvider {
    accounts: Arc<HashMap<String, String>>,
    presence: Arc<watch::Sender<bool>>,
}

impl StaticAuthProvider {
    pub fn new(accounts: impl IntoIterator<Item = (String, String)>) -> Self {
        let (presence, _) = watch::channel(false);
        Self {
            accounts: Arc::new(accounts.into_iter().collect()),
            presence: Arc::new(presence),
        }
    }

    /// Convenience constructor for a single account.
    pub fn single(username: &str, password: &str) -> Self {
        Self::new([(username.to_string(), password.to_string())])
    }

    /// Drop the authenticated user, notifying presence subscribers.
    pub fn sign_out(&self) {
        self.presence.send_replace(false);
    }
}

impl AuthProvider for StaticAuthProvider {
    fn subscribe(&self) -> watch::Receiver<bool> {
        self.presence.subscribe()
    }

    fn sign_in(
        &self,
        username: String,
        password: String,
    ) -> BoxFuture<'static, Result<(), AuthError>> {
        let accounts = Arc::clone(&self.accounts);
        let presence = Arc::clone(&self.presence);
        Box::pin(async move {
            match accounts.get(&username) {
                Some(expected) if *expected == password => {
                    presence.send_replace(true);
                    Ok(())
                }
                Some(_) => Err(AuthError::InvalidCredentials("bad password".to_string())),
                None => Err(AuthError::InvalidCredentials(format!(
                    "no account for {username}"
                ))),
            }
        })
    }
}
