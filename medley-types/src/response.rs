//! Result types produced by connectors and orchestrators.
//!
//! [`Outcome`] is the primary result type: it keeps "live data",
//! "substitute data" and "no data" apart so callers can branch on them.
//! [`ApiResponse`] is the flat envelope consumers of the JSON surface expect;
//! it is derived from an `Outcome` and never constructed by connectors.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{ContentItem, MedleyError};

/// One page of normalized items plus the provider's total, when reported.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    /// Items in presentation order.
    pub items: Vec<ContentItem>,
    /// Total matches reported by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

impl ContentPage {
    /// Page without a provider total.
    #[must_use]
    pub const fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            total_results: None,
        }
    }

    /// Attach the provider-reported total.
    #[must_use]
    pub const fn with_total(mut self, total: Option<u64>) -> Self {
        self.total_results = total;
        self
    }

    /// Number of items on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Why an [`Outcome`] carries substitute or incomplete data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegradeReason {
    /// The live call failed (or could not be made) and fixture data was served instead.
    MockFallback {
        /// Connector that fell back.
        connector: String,
        /// What prevented the live call.
        cause: MedleyError,
    },
    /// An aggregate in which some sources failed or fell back.
    PartialFailure {
        /// Sources that contributed nothing.
        failed: Vec<MedleyError>,
        /// Connectors whose contribution is fixture data.
        fallbacks: Vec<String>,
    },
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MockFallback { connector, cause } => {
                write!(f, "{connector} unavailable ({cause}); showing sample data")
            }
            Self::PartialFailure { failed, fallbacks } => {
                write!(f, "{} source(s) failed", failed.len())?;
                if !fallbacks.is_empty() {
                    write!(f, "; sample data from {}", fallbacks.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// Result of a connector or orchestrator call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Live data from the provider(s).
    Success(T),
    /// Usable data that is substitute or incomplete.
    Degraded {
        /// The data to show.
        data: T,
        /// Why it is not the full live result.
        reason: DegradeReason,
    },
    /// Nothing usable.
    Failure(MedleyError),
}

impl<T> Outcome<T> {
    /// Fixture data substituted for `connector` because of `cause`.
    pub fn fallback(connector: impl Into<String>, cause: MedleyError, data: T) -> Self {
        Self::Degraded {
            data,
            reason: DegradeReason::MockFallback {
                connector: connector.into(),
                cause,
            },
        }
    }

    /// Borrow the data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(d) | Self::Degraded { data: d, .. } => Some(d),
            Self::Failure(_) => None,
        }
    }

    /// Take the data, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(d) | Self::Degraded { data: d, .. } => Some(d),
            Self::Failure(_) => None,
        }
    }

    /// The failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&MedleyError> {
        match self {
            Self::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// The degrade reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<&DegradeReason> {
        match self {
            Self::Degraded { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// True for live data.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True for substitute or incomplete data.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// True when there is no data.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// True if the user must sign in to get the full result.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        match self {
            Self::Failure(e) => e.requires_auth(),
            Self::Degraded {
                reason: DegradeReason::PartialFailure { failed, .. },
                ..
            } => failed.iter().any(MedleyError::requires_auth),
            Self::Degraded {
                reason: DegradeReason::MockFallback { cause, .. },
                ..
            } => cause.requires_auth(),
            Self::Success(_) => false,
        }
    }

    /// Transform the data, keeping the variant.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success(d) => Outcome::Success(f(d)),
            Self::Degraded { data, reason } => Outcome::Degraded {
                data: f(data),
                reason,
            },
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Collapse into a `Result`, discarding the degrade reason.
    ///
    /// # Errors
    /// Returns the contained error for `Failure`.
    pub fn into_result(self) -> Result<T, MedleyError> {
        match self {
            Self::Success(d) | Self::Degraded { data: d, .. } => Ok(d),
            Self::Failure(e) => Err(e),
        }
    }
}

impl<T> From<Result<T, MedleyError>> for Outcome<T> {
    fn from(r: Result<T, MedleyError>) -> Self {
        match r {
            Ok(d) => Self::Success(d),
            Err(e) => Self::Failure(e),
        }
    }
}

/// Response status in the [`ApiResponse`] envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// Data is present (live or substitute).
    Success,
    /// No data.
    Error,
}

/// Flat response envelope used by the JSON surface.
///
/// Substitute data is reported as `status: success` with an advisory
/// `message`; use the originating [`Outcome`] to branch reliably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Payload.
    pub data: T,
    /// Envelope status.
    pub status: ResponseStatus,
    /// Provider-reported total, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    /// Advisory message for degraded or failed responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Set when the user must sign in to see this content.
    #[serde(default, skip_serializing_if = "core::ops::Not::not")]
    pub requires_auth: bool,
}

impl From<Outcome<ContentPage>> for ApiResponse<Vec<ContentItem>> {
    fn from(outcome: Outcome<ContentPage>) -> Self {
        let requires_auth = outcome.requires_auth();
        match outcome {
            Outcome::Success(page) => Self {
                total_results: page.total_results,
                data: page.items,
                status: ResponseStatus::Success,
                message: None,
                requires_auth,
            },
            Outcome::Degraded { data, reason } => Self {
                total_results: data.total_results,
                data: data.items,
                status: ResponseStatus::Success,
                message: Some(reason.to_string()),
                requires_auth,
            },
            Outcome::Failure(e) => Self {
                data: Vec::new(),
                status: ResponseStatus::Error,
                total_results: None,
                message: Some(e.to_string()),
                requires_auth,
            },
        }
    }
}
