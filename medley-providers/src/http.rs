//! Shared HTTP plumbing: endpoint joining, JSON decoding, and the
//! live-or-fixture policy every connector applies to its calls.

use std::future::Future;
use std::time::Duration;

use medley_core::{
    CallContext, Capability, ContentItem, ContentPage, MedleyError, Outcome, ensure_unique_ids,
};
use serde::de::DeserializeOwned;
use url::Url;

/// Default per-call deadline applied by connectors.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client, base URL and deadline shared by one connector.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
}

impl Endpoint {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub(crate) fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.trim_end_matches('/').to_string();
    }

    /// `base_url` joined with `path` and the given query pairs.
    pub(crate) fn url(
        &self,
        connector: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Url, MedleyError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw)
            .map_err(|e| MedleyError::connector(connector, format!("bad endpoint {raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

/// Send `req` and decode a JSON body.
///
/// Non-2xx statuses map to `Http` (401 to `AuthRequired` when `auth_on_401`),
/// transport errors to `Connector`, and unparseable bodies to `Decode`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    connector: &str,
    req: reqwest::RequestBuilder,
    auth_on_401: bool,
) -> Result<T, MedleyError> {
    let resp = req
        .send()
        .await
        .map_err(|e| MedleyError::connector(connector, e.to_string()))?;
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED && auth_on_401 {
        return Err(MedleyError::auth_required(connector));
    }
    if !status.is_success() {
        return Err(MedleyError::http(connector, status.as_u16()));
    }
    let body = resp
        .bytes()
        .await
        .map_err(|e| MedleyError::connector(connector, e.to_string()))?;
    serde_json::from_slice(&body).map_err(|e| MedleyError::decode(connector, e.to_string()))
}

/// Run one live call and apply the fallback policy.
///
/// Cancellation, authentication gaps and invalid arguments are reported as
/// `Failure`. Every other error (status, transport, decode, missing
/// credentials, timeout) yields `Degraded` with the `fixture` dataset.
/// Successful pages are passed through [`ensure_unique_ids`] with `prefix`.
pub(crate) async fn live_or_fixture<F>(
    connector: &'static str,
    capability: Capability,
    ctx: &CallContext,
    timeout: Duration,
    prefix: &str,
    fixture: fn() -> Vec<ContentItem>,
    call: F,
) -> Outcome<ContentPage>
where
    F: Future<Output = Result<ContentPage, MedleyError>>,
{
    match ctx
        .run_with_timeout(connector, capability.as_str(), timeout, call)
        .await
    {
        Ok(page) => {
            let total = page.total_results;
            Outcome::Success(
                ContentPage::new(ensure_unique_ids(page.items, Some(prefix))).with_total(total),
            )
        }
        Err(
            e @ (MedleyError::Cancelled
            | MedleyError::AuthRequired { .. }
            | MedleyError::InvalidArg(_)),
        ) => Outcome::Failure(e),
        Err(cause) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                connector,
                capability = capability.as_str(),
                error = %cause,
                "live call failed; serving sample data"
            );
            let items = fixture();
            let total = items.len() as u64;
            Outcome::fallback(connector, cause, ContentPage::new(items).with_total(Some(total)))
        }
    }
}

/// Keep at most `limit` items.
pub(crate) fn truncate(mut items: Vec<ContentItem>, limit: Option<u32>) -> Vec<ContentItem> {
    if let Some(n) = limit {
        items.truncate(n as usize);
    }
    items
}

/// Trimmed, non-empty free-text query or `InvalidArg`.
pub(crate) fn required_query<'a>(q: Option<&'a str>, what: &str) -> Result<&'a str, MedleyError> {
    q.map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| MedleyError::InvalidArg(format!("{what} requires a non-empty query")))
}

/// Parse an RFC 3339 timestamp, falling back to "now" for absent or malformed values.
pub(crate) fn parse_timestamp(raw: Option<&str>) -> chrono::DateTime<chrono::Utc> {
    raw.and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map_or_else(chrono::Utc::now, |dt| dt.with_timezone(&chrono::Utc))
}
