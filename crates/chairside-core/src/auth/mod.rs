//! Session and identity management.
//!
//! Owns the credential-directory bootstrap and the single active session.
//! Login compares email and password by exact string equality against the
//! persisted directory, matching the source system's mock credential
//! contract (plaintext, no normalization).

use std::sync::Arc;

use crate::models::{Session, User};
use crate::seed;
use crate::store::{keys, KvStore};

/// The session/identity store.
pub struct AuthStore {
    kv: Arc<KvStore>,
    session: Option<Session>,
    loading: bool,
}

impl AuthStore {
    /// Create a store over the shared persistence handle. Call
    /// [`initialize`](Self::initialize) before first use.
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self {
            kv,
            session: None,
            loading: false,
        }
    }

    /// Seed the credential directory on first run, then restore any
    /// persisted session. Idempotent; safe to call once per process start.
    pub fn initialize(&mut self) {
        self.loading = true;
        if self.kv.get::<Vec<User>>(keys::USERS).is_none() {
            if let Err(e) = self.kv.set(keys::USERS, &seed::seed_users()) {
                tracing::warn!("failed to persist seed users: {}", e);
            }
        }
        self.session = self.kv.get(keys::SESSION);
        self.loading = false;
    }

    /// Authenticate against the credential directory.
    ///
    /// On a match the password-stripped session becomes active and is
    /// persisted; on a mismatch the previous session is left untouched
    /// and the call returns false.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        self.loading = true;
        let users: Vec<User> = self.kv.get(keys::USERS).unwrap_or_default();
        let found = users
            .iter()
            .find(|u| u.email == email && u.password == password);

        let ok = match found {
            Some(user) => {
                let session = user.session();
                if let Err(e) = self.kv.set(keys::SESSION, &session) {
                    tracing::warn!("failed to persist session: {}", e);
                }
                tracing::info!("login succeeded: {}", session.email);
                self.session = Some(session);
                true
            }
            None => {
                tracing::info!("login failed: {}", email);
                false
            }
        };
        self.loading = false;
        ok
    }

    /// Clear the active session and its persisted form. Idempotent.
    pub fn logout(&mut self) {
        self.session = None;
        if let Err(e) = self.kv.remove(keys::SESSION) {
            tracing::warn!("failed to clear persisted session: {}", e);
        }
    }

    /// The active session, if any.
    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// True only while `initialize` or `login` are executing. Consumers
    /// use it to gate rendering; it is not a concurrency primitive.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
