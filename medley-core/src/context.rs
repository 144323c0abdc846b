use std::future::Future;
use std::time::Duration;

use medley_types::MedleyError;
use tokio_util::sync::CancellationToken;

/// Per-call context handed to every provider method.
///
/// Carries a cancellation token (cloned contexts share it), an optional
/// timeout override, and the user's session token for user-scoped calls.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: CancellationToken,
    timeout: Option<Duration>,
    session_token: Option<String>,
}

impl CallContext {
    /// Fresh context with its own cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context bound to an existing cancellation token.
    #[must_use]
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: token,
            ..Self::default()
        }
    }

    /// Override the per-provider timeout for calls made with this context.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach the user's session token (e.g. a Spotify or Twitter user token).
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Timeout override, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The user's session token, if any.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// A handle that cancels every call made with this context.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Cancel all calls made with this context.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// True once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drive `fut` to completion unless the context is cancelled first.
    ///
    /// # Errors
    /// Returns `Cancelled` if cancellation wins the race.
    pub async fn run<T, F>(&self, fut: F) -> Result<T, MedleyError>
    where
        F: Future<Output = T>,
    {
        if self.is_cancelled() {
            return Err(MedleyError::Cancelled);
        }
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(MedleyError::Cancelled),
            out = fut => Ok(out),
        }
    }

    /// Drive `fut` under cancellation and a deadline.
    ///
    /// The context's own timeout wins over `default_timeout`.
    ///
    /// # Errors
    /// Returns `Cancelled` on cancellation, `ProviderTimeout` when the deadline
    /// elapses, or the future's own error.
    pub async fn run_with_timeout<T, F>(
        &self,
        connector: &str,
        capability: &str,
        default_timeout: Duration,
        fut: F,
    ) -> Result<T, MedleyError>
    where
        F: Future<Output = Result<T, MedleyError>>,
    {
        let limit = self.timeout.unwrap_or(default_timeout);
        match self.run(tokio::time::timeout(limit, fut)).await? {
            Ok(res) => res,
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(connector, capability, ?limit, "provider call timed out");
                Err(MedleyError::provider_timeout(connector, capability))
            }
        }
    }
}
