use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the medley workspace.
///
/// This wraps capability mismatches, argument validation errors, provider-tagged
/// transport and decoding failures, authentication gaps, timeouts, and an
/// aggregate for multi-provider attempts.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MedleyError {
    /// The requested capability is not implemented by any eligible connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "top-headlines").
        capability: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{connector} returned HTTP {status}")]
    Http {
        /// Connector name that received the status.
        connector: String,
        /// HTTP status code.
        status: u16,
    },

    /// The provider payload could not be decoded.
    #[error("{connector} sent an unreadable payload: {msg}")]
    Decode {
        /// Connector name whose payload failed to decode.
        connector: String,
        /// Decoder message.
        msg: String,
    },

    /// The connector has no credentials configured.
    #[error("{connector} has no credentials configured")]
    MissingCredentials {
        /// Connector name lacking credentials.
        connector: String,
    },

    /// The call needs a user session token and none was supplied.
    #[error("{connector} requires the user to sign in")]
    AuthRequired {
        /// Connector name that requires authentication.
        connector: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<MedleyError>),

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "popular-movies", "search").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// All attempted providers timed out for the requested capability.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },

    /// The caller cancelled the request.
    #[error("request cancelled")]
    Cancelled,
}

impl MedleyError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Http` error.
    pub fn http(connector: impl Into<String>, status: u16) -> Self {
        Self::Http {
            connector: connector.into(),
            status,
        }
    }

    /// Helper: build a `Decode` error.
    pub fn decode(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Decode {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `MissingCredentials` error.
    pub fn missing_credentials(connector: impl Into<String>) -> Self {
        Self::MissingCredentials {
            connector: connector.into(),
        }
    }

    /// Helper: build an `AuthRequired` error.
    pub fn auth_required(connector: impl Into<String>) -> Self {
        Self::AuthRequired {
            connector: connector.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and caller-initiated cancellation are not actionable.
    /// Aggregates are classified based on their contents.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::Cancelled => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// True when this error, or any error inside an aggregate, asks the user to sign in.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        match self {
            Self::AuthRequired { .. } => true,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::requires_auth),
            _ => false,
        }
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

