//! Auth gate - a UI convenience flag, not access control.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::SessionError;
use crate::ports::MarkerStore;

/// Key under which the signed-in marker is persisted.
pub const AUTH_MARKER_KEY: &str = "bloggy_auth";

/// Value of the marker while signed in.
pub const AUTH_MARKER_VALUE: &str = "authenticated";

/// Password accepted when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "bloggy";

/// Process-wide session shared by every route guard.
///
/// Initialized from durable storage at startup, mutated only by
/// [`login`](Self::login) and [`logout`](Self::logout). There is no hashing,
/// lockout or rate limiting.
pub struct AuthSession {
    store: Arc<dyn MarkerStore>,
    password: String,
    authenticated: AtomicBool,
}

impl AuthSession {
    /// Restore the session from the marker store. Unreadable storage starts signed out.
    pub async fn restore(store: Arc<dyn MarkerStore>, password: impl Into<String>) -> Self {
        let authenticated = match store.load(AUTH_MARKER_KEY).await {
            Ok(value) => value.as_deref() == Some(AUTH_MARKER_VALUE),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read auth marker; starting signed out");
                false
            }
        };

        tracing::info!(authenticated, "Auth session restored");

        Self {
            store,
            password: password.into(),
            authenticated: AtomicBool::new(authenticated),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Returns `Ok(false)` on a wrong password and leaves storage untouched.
    pub async fn login(&self, password: &str) -> Result<bool, SessionError> {
        if password != self.password {
            tracing::info!("Login rejected");
            return Ok(false);
        }

        self.store.save(AUTH_MARKER_KEY, AUTH_MARKER_VALUE).await?;
        self.authenticated.store(true, Ordering::SeqCst);
        tracing::info!("Login accepted");
        Ok(true)
    }

    /// Clears the persisted marker, then the in-memory flag.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.store.remove(AUTH_MARKER_KEY).await?;
        self.authenticated.store(false, Ordering::SeqCst);
        tracing::info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeMarkers;

    #[tokio::test]
    async fn test_login_with_password_persists() {
        let markers = Arc::new(FakeMarkers::default());
        let session = AuthSession::restore(markers.clone(), DEFAULT_ADMIN_PASSWORD).await;
        assert!(!session.is_authenticated());

        assert!(session.login("bloggy").await.unwrap());

        assert!(session.is_authenticated());
        assert_eq!(
            markers.get(AUTH_MARKER_KEY).as_deref(),
            Some(AUTH_MARKER_VALUE)
        );
    }

    #[tokio::test]
    async fn test_wrong_password_does_not_persist() {
        let markers = Arc::new(FakeMarkers::default());
        let session = AuthSession::restore(markers.clone(), DEFAULT_ADMIN_PASSWORD).await;

        assert!(!session.login("Bloggy").await.unwrap());
        assert!(!session.login("").await.unwrap());

        assert!(!session.is_authenticated());
        assert_eq!(markers.get(AUTH_MARKER_KEY), None);
    }

    #[tokio::test]
    async fn test_logout_clears_marker() {
        let markers = Arc::new(FakeMarkers::default());
        let session = AuthSession::restore(markers.clone(), DEFAULT_ADMIN_PASSWORD).await;
        session.login("bloggy").await.unwrap();

        session.logout().await.unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(markers.get(AUTH_MARKER_KEY), None);
    }

    #[tokio::test]
    async fn test_restore_reads_marker() {
        let markers = Arc::new(FakeMarkers::with(AUTH_MARKER_KEY, AUTH_MARKER_VALUE));
        let session = AuthSession::restore(markers, DEFAULT_ADMIN_PASSWORD).await;
        assert!(session.is_authenticated());

        let markers = Arc::new(FakeMarkers::with(AUTH_MARKER_KEY, "yes"));
        let session = AuthSession::restore(markers, DEFAULT_ADMIN_PASSWORD).await;
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_flag() {
        let markers = Arc::new(FakeMarkers::default());
        let session = AuthSession::restore(markers.clone(), DEFAULT_ADMIN_PASSWORD).await;
        markers.break_storage();

        assert!(session.login("bloggy").await.is_err());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_configured_password() {
        let markers = Arc::new(FakeMarkers::default());
        let session = AuthSession::restore(markers, "hunter2").await;

        assert!(!session.login("bloggy").await.unwrap());
        assert!(session.login("hunter2").await.unwrap());
    }
}
