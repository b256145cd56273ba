//! Session service - Tracks the signed-in investor.
//!
//! There is no credential check: any non-empty email signs in, creating an
//! investor record on first use. Login, profile and password operations
//! wait out a configurable delay that the caller can cancel.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, CancellationToken, LatencyConfig};
use domain::{ChangePassword, Investor, LoginRequest, UpdateProfile};
use store_service_lib::PersistentStore;

/// Observable session state
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Mounting, or a login is in flight
    Loading,
    Authenticated(Investor),
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&Investor> {
        match self {
            SessionState::Authenticated(investor) => Some(investor),
            _ => None,
        }
    }
}

/// Session service trait for dependency injection.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Snapshot of the current state
    fn state(&self) -> SessionState;

    /// Receive every subsequent state change
    fn subscribe(&self) -> watch::Receiver<SessionState>;

    /// The signed-in investor, if any
    fn current_user(&self) -> Option<Investor>;

    /// Sign in by email, creating the investor on first use
    async fn login(&self, request: LoginRequest, cancel: &CancellationToken)
        -> AppResult<Investor>;

    /// Forget the signed-in investor
    async fn logout(&self) -> AppResult<()>;

    /// Merge profile fields into the signed-in investor
    async fn update_profile(
        &self,
        update: UpdateProfile,
        cancel: &CancellationToken,
    ) -> AppResult<Investor>;

    /// Accept a password change for the signed-in investor
    async fn change_password(
        &self,
        request: ChangePassword,
        cancel: &CancellationToken,
    ) -> AppResult<()>;
}

/// Concrete implementation of SessionService over the persistent store.
pub struct SessionManager {
    store: PersistentStore,
    latency: LatencyConfig,
    state: watch::Sender<SessionState>,
}

impl SessionManager {
    /// Restore the session from the current-user pointer.
    ///
    /// Starts in `Loading` and settles on `Authenticated` or
    /// `Unauthenticated` once the pointer has been read.
    pub async fn mount(store: PersistentStore, latency: LatencyConfig) -> AppResult<Self> {
        let (state, _) = watch::channel(SessionState::Loading);
        let manager = Self {
            store,
            latency,
            state,
        };

        let restored = match manager.store.get_current_user().await? {
            Some(investor) => {
                debug!(user_id = %investor.id(), "Session restored");
                SessionState::Authenticated(investor)
            }
            None => SessionState::Unauthenticated,
        };
        manager.state.send_replace(restored);

        Ok(manager)
    }

    /// Wait out `delay` unless `cancel` fires first.
    async fn simulate_latency(&self, delay: Duration, cancel: &CancellationToken) -> AppResult<()> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Session operation cancelled");
                Err(AppError::Cancelled)
            }
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }

    fn authenticated_user(&self) -> AppResult<Investor> {
        self.state
            .borrow()
            .user()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }

    async fn complete_login(&self, email: &str, cancel: &CancellationToken) -> AppResult<Investor> {
        self.simulate_latency(self.latency.login(), cancel).await?;

        let now = Utc::now();
        let mut investors = self.store.get_investors().await?;

        let investor = match investors.iter().position(|i| i.user.has_email(email)) {
            Some(index) => {
                let existing = &mut investors[index];
                existing.touch_login(now);
                existing.clone()
            }
            None => {
                let created = Investor::from_email(email, now);
                info!(user_id = %created.id(), name = %created.name(), "Created investor on first login");
                investors.push(created.clone());
                created
            }
        };

        // Two separate writes; a failure in between leaves the collection updated
        self.store.set_investors(&investors).await?;
        self.store.set_current_user(&investor).await?;

        Ok(investor)
    }
}

#[async_trait]
impl SessionService for SessionManager {
    fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn current_user(&self) -> Option<Investor> {
        self.state.borrow().user().cloned()
    }

    async fn login(
        &self,
        request: LoginRequest,
        cancel: &CancellationToken,
    ) -> AppResult<Investor> {
        let request = request.normalized();
        request.check()?;

        let previous = self.state.send_replace(SessionState::Loading);

        match self.complete_login(&request.email, cancel).await {
            Ok(investor) => {
                info!(user_id = %investor.id(), "Investor signed in");
                self.state
                    .send_replace(SessionState::Authenticated(investor.clone()));
                Ok(investor)
            }
            Err(e) => {
                self.state.send_replace(previous);
                Err(e)
            }
        }
    }

    async fn logout(&self) -> AppResult<()> {
        self.store.clear_current_user().await?;
        self.state.send_replace(SessionState::Unauthenticated);
        info!("Investor signed out");
        Ok(())
    }

    async fn update_profile(
        &self,
        update: UpdateProfile,
        cancel: &CancellationToken,
    ) -> AppResult<Investor> {
        let caller = self.authenticated_user()?;
        self.simulate_latency(self.latency.profile(), cancel).await?;

        // Re-read: the session may have ended or changed hands while we waited
        let mut updated = self.authenticated_user()?;
        if updated.id() != caller.id() {
            warn!(
                requested_by = %caller.id(),
                signed_in = %updated.id(),
                "Session changed during profile update, abandoning"
            );
            return Err(AppError::Cancelled);
        }
        updated.user.apply(update);

        let mut investors = self.store.get_investors().await?;
        for investor in investors.iter_mut().filter(|i| i.id() == updated.id()) {
            *investor = updated.clone();
        }
        self.store.set_investors(&investors).await?;
        self.store.set_current_user(&updated).await?;

        debug!(user_id = %updated.id(), "Profile updated");
        self.state
            .send_replace(SessionState::Authenticated(updated.clone()));
        Ok(updated)
    }

    async fn change_password(
        &self,
        _request: ChangePassword,
        cancel: &CancellationToken,
    ) -> AppResult<()> {
        let user = self.authenticated_user()?;
        self.simulate_latency(self.latency.password(), cancel).await?;

        // No password is modelled; the change is acknowledged and dropped
        debug!(user_id = %user.id(), "Password change accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use store_service_lib::storage::MemoryStorage;

    #[test]
    fn test_state_helpers() {
        assert!(SessionState::Loading.is_loading());
        assert!(!SessionState::Unauthenticated.is_authenticated());
        assert!(SessionState::Unauthenticated.user().is_none());
    }

    #[tokio::test]
    async fn test_authenticated_user_requires_session() {
        let store = PersistentStore::new(Arc::new(MemoryStorage::new()));
        let manager = SessionManager::mount(store, LatencyConfig::immediate())
            .await
            .unwrap();

        assert!(matches!(
            manager.authenticated_user(),
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_precancelled_latency_fails_fast() {
        let store = PersistentStore::new(Arc::new(MemoryStorage::new()));
        let manager = SessionManager::mount(store, LatencyConfig::immediate())
            .await
            .unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = manager.simulate_latency(Duration::ZERO, &cancel).await;
        assert!(matches!(result, Err(AppError::Cancelled)));
    }
}
