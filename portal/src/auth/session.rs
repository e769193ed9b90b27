//! Session lifecycle: restore on startup, login, logout.
//!
//! [`SessionManager`] is the single source of truth for who is signed in on
//! this device. It is an explicit, injectable object: tests build isolated
//! instances over [`MemoryStorage`](crate::storage::MemoryStorage) and
//! [`NoLatency`], the server shares one instance behind an `Arc`.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::auth::credentials::CredentialStore;
use crate::auth::models::AuthState;
use crate::errors::{PortalError, PortalResult};
use crate::storage::SessionStorage;
use crate::utils::token::generate_session_token;

/// Storage key of the persisted session record.
pub const STORAGE_KEY: &str = "phc_auth_state";

/// Whether the persisted session has been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Restoring,
    Ready,
}

/// Observable view of the session, published on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub auth: AuthState,
}

impl SessionSnapshot {
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Restoring
    }
}

/// Async boundary standing in for the login round trip.
#[async_trait]
pub trait LoginLatency: Send + Sync {
    async fn wait(&self);
}

/// Sleeps for a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct FixedLatency(pub Duration);

#[async_trait]
impl LoginLatency for FixedLatency {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl LoginLatency for NoLatency {
    async fn wait(&self) {}
}

/// Counts a login as in flight until dropped, whether it completed or the
/// caller abandoned the future.
struct PendingLogin<'a>(&'a AtomicUsize);

impl<'a> PendingLogin<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for PendingLogin<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct SessionManager {
    credentials: Arc<dyn CredentialStore>,
    storage: Arc<dyn SessionStorage>,
    latency: Arc<dyn LoginLatency>,
    snapshot: watch::Sender<SessionSnapshot>,
    pending_logins: AtomicUsize,
}

impl SessionManager {
    /// Creates a manager in the `Restoring` phase with an empty session.
    /// Call [`SessionManager::restore`] before making access decisions.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        storage: Arc<dyn SessionStorage>,
        latency: Arc<dyn LoginLatency>,
    ) -> Self {
        let (snapshot, _) = watch::channel(SessionSnapshot {
            phase: SessionPhase::Restoring,
            auth: AuthState::empty(),
        });

        Self {
            credentials,
            storage,
            latency,
            snapshot,
            pending_logins: AtomicUsize::new(0),
        }
    }

    /// Reads the persisted session, if any, and leaves the `Restoring` phase.
    ///
    /// Absent, unreadable or malformed records all yield the empty session.
    /// A malformed record is deleted so the next start is clean.
    pub fn restore(&self) -> AuthState {
        let mut restored = AuthState::empty();
        self.snapshot.send_modify(|snapshot| {
            restored = self.read_stored();
            snapshot.phase = SessionPhase::Ready;
            snapshot.auth = restored.clone();
        });

        match restored.user() {
            Some(user) => info!(user_id = %user.id, role = %user.role, "Restored session"),
            None => debug!("No stored session to restore"),
        }
        restored
    }

    fn read_stored(&self) -> AuthState {
        match self.storage.get(STORAGE_KEY) {
            Ok(None) => AuthState::empty(),
            Ok(Some(raw)) => match AuthState::from_json(&raw) {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "Discarding stored session");
                    if let Err(e) = self.storage.remove(STORAGE_KEY) {
                        warn!(error = %e, "Failed to clear malformed stored session");
                    }
                    AuthState::empty()
                }
            },
            Err(e) => {
                warn!(error = %e, "Could not read stored session, starting signed out");
                AuthState::empty()
            }
        }
    }

    /// Authenticates `identifier`/`secret` against the credential store.
    ///
    /// On success the new session is persisted and published before this
    /// returns. On failure the current session is left untouched. If the
    /// future is dropped before completion nothing is applied.
    pub async fn login(&self, identifier: &str, secret: &str) -> PortalResult<AuthState> {
        let _pending = PendingLogin::start(&self.pending_logins);

        self.latency.wait().await;

        let record = self.credentials.lookup(identifier).ok_or_else(|| {
            debug!(identifier, "Login rejected: unknown identifier");
            PortalError::not_found(identifier)
        })?;

        if record.secret != secret {
            debug!(identifier, "Login rejected: secret mismatch");
            return Err(PortalError::InvalidSecret);
        }

        let state = AuthState::authenticated(record.profile.clone(), generate_session_token());
        // Storage is written under the snapshot lock so a concurrent logout
        // or login cannot land between the write and the publish.
        self.snapshot.send_modify(|snapshot| {
            self.persist(&state);
            snapshot.auth = state.clone();
        });

        info!(
            user_id = %record.profile.id,
            role = %record.profile.role,
            "User logged in"
        );
        Ok(state)
    }

    /// Runs [`SessionManager::login`] on its own task so it settles even if
    /// the caller stops waiting. Dropping the handle only detaches the caller.
    pub fn spawn_login(
        self: &Arc<Self>,
        identifier: String,
        secret: String,
    ) -> JoinHandle<PortalResult<AuthState>> {
        let manager = Arc::clone(self);
        tokio::spawn(async move { manager.login(&identifier, &secret).await })
    }

    /// Clears the session in memory and in storage. Idempotent.
    pub fn logout(&self) {
        let mut previous = AuthState::empty();
        self.snapshot.send_modify(|snapshot| {
            if let Err(e) = self.storage.remove(STORAGE_KEY) {
                warn!(error = %e, "Failed to delete stored session");
            }
            previous = std::mem::take(&mut snapshot.auth);
        });

        if let Some(user) = previous.user() {
            info!(user_id = %user.id, "User logged out");
        }
    }

    pub fn current(&self) -> AuthState {
        self.snapshot.borrow().auth.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.snapshot.borrow().phase
    }

    /// True until [`SessionManager::restore`] has run.
    pub fn is_loading(&self) -> bool {
        self.phase() == SessionPhase::Restoring
    }

    /// True while at least one login attempt is in flight.
    pub fn is_signing_in(&self) -> bool {
        self.pending_logins.load(Ordering::SeqCst) > 0
    }

    /// Receives every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.subscribe()
    }

    fn persist(&self, state: &AuthState) {
        let result = state
            .to_json()
            .and_then(|json| self.storage.set(STORAGE_KEY, &json));
        if let Err(e) = result {
            warn!(error = %e, "Failed to persist session, it will not survive a restart");
        }
    }
}
