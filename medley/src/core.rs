use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use medley_core::connector::ConnectorKey;
use medley_core::{
    CallContext, Capability, ContentKind, ContentPage, MedleyConfig, MedleyConnector, MedleyError,
    Outcome, ensure_unique_ids,
};

use rand::seq::SliceRandom;

use crate::router::util::{
    Settled, SourceCall, collapse_errors, join_with_deadline, merge_settled,
};

/// Orchestrator that routes content requests across registered providers.
pub struct Medley {
    pub(crate) connectors: Vec<Arc<dyn MedleyConnector>>,
    pub(crate) per_kind_priority: HashMap<ContentKind, Vec<ConnectorKey>>,
    pub(crate) cfg: MedleyConfig,
}

/// Builder for constructing a `Medley` orchestrator with custom configuration.
pub struct MedleyBuilder {
    connectors: Vec<Arc<dyn MedleyConnector>>,
    per_kind_priority: HashMap<ContentKind, Vec<ConnectorKey>>,
    cfg: MedleyConfig,
}

impl Default for MedleyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MedleyBuilder {
    /// Create a new builder with the defaults of [`MedleyConfig`].
    ///
    /// Starts with no connectors; register at least one via [`with_connector`](Self::with_connector).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            per_kind_priority: HashMap::new(),
            cfg: MedleyConfig::default(),
        }
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub fn config(mut self, cfg: MedleyConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Register a provider connector.
    ///
    /// Registration order is the routing order for a kind unless
    /// [`prefer_for_kind`](Self::prefer_for_kind) says otherwise. Duplicates are not
    /// removed; avoid registering the same connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn MedleyConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set preferred providers for a `ContentKind` using connector instances.
    ///
    /// Behavior and trade-offs:
    /// - Influences ordering among eligible providers for the given kind; it does not
    ///   filter out non-listed connectors (they remain after the listed ones).
    /// - Only the single-provider fetchers honor the order. Aggregates call every
    ///   capable connector concurrently.
    #[must_use]
    pub fn prefer_for_kind(
        mut self,
        kind: ContentKind,
        connectors_desc: &[Arc<dyn MedleyConnector>],
    ) -> Self {
        let keys: Vec<ConnectorKey> = connectors_desc.iter().map(|c| c.key()).collect();
        self.per_kind_priority.insert(kind, keys);
        self
    }

    /// Set the per-provider call timeout.
    ///
    /// A `CallContext` timeout, when present, overrides this value for that call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for fan-out aggregations (feed, trending, search, showcase).
    ///
    /// When exceeded, the aggregate returns a `RequestTimeout` failure for the capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Toggle shuffling of merged feed and trending results.
    #[must_use]
    pub const fn shuffle(mut self, yes: bool) -> Self {
        self.cfg.shuffle = yes;
        self
    }

    /// Maximum number of items returned by [`Medley::trending_content`].
    #[must_use]
    pub const fn trending_limit(mut self, limit: usize) -> Self {
        self.cfg.trending_limit = limit;
        self
    }

    /// Number of items requested from each source in feed, trending and search fan-outs.
    #[must_use]
    pub const fn per_source_limit(mut self, limit: u32) -> Self {
        self.cfg.per_source_limit = limit;
        self
    }

    /// Build the `Medley` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered or a limit is zero.
    pub fn build(mut self) -> Result<Medley, MedleyError> {
        // Drop priority keys for connectors that were never registered, and dedup.
        let known: HashSet<&'static str> = self.connectors.iter().map(|c| c.name()).collect();
        for keys in self.per_kind_priority.values_mut() {
            let mut seen: HashSet<&'static str> = HashSet::new();
            keys.retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));
        }

        if self.connectors.is_empty() {
            return Err(MedleyError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.trending_limit == 0 || self.cfg.per_source_limit == 0 {
            return Err(MedleyError::InvalidArg(
                "trending_limit and per_source_limit must be greater than zero".to_string(),
            ));
        }

        Ok(Medley {
            connectors: self.connectors,
            per_kind_priority: self.per_kind_priority,
            cfg: self.cfg,
        })
    }
}

/// Await `fut` under an optional overall deadline, mapping expiry to `RequestTimeout`.
pub(crate) async fn with_request_deadline<T, Fut>(
    capability: Capability,
    deadline: Option<Duration>,
    fut: Fut,
) -> Result<T, MedleyError>
where
    Fut: Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| MedleyError::request_timeout(capability.as_str())),
        None => Ok(fut.await),
    }
}

impl Medley {
    /// Wrap a provider future with the context's cancellation and a timeout.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "medley::core::provider_call_with_timeout",
            skip(ctx, fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        ctx: &CallContext,
        fut: Fut,
    ) -> Outcome<T>
    where
        Fut: Future<Output = Outcome<T>>,
    {
        ctx.run_with_timeout(connector_name, capability.as_str(), timeout, async {
            Ok(fut.await)
        })
        .await
        .unwrap_or_else(Outcome::Failure)
    }

    /// Start building a new `Medley` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use medley::{ContentKind, Medley};
    /// use medley_providers::{TmdbConnector, TwitterConnector};
    ///
    /// let tmdb = Arc::new(TmdbConnector::new(Some("key".into())));
    /// let twitter = Arc::new(TwitterConnector::new(None));
    ///
    /// let medley = Medley::builder()
    ///     .with_connector(tmdb)
    ///     .with_connector(twitter)
    ///     .trending_limit(10)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> MedleyBuilder {
        MedleyBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MedleyConfig {
        &self.cfg
    }

    /// Connectors in routing order for `kind`; registration order when `kind` is
    /// `None` or has no preference.
    pub(crate) fn ordered_for_kind(
        &self,
        kind: Option<ContentKind>,
    ) -> Vec<Arc<dyn MedleyConnector>> {
        let mut out: Vec<(usize, Arc<dyn MedleyConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if let Some(k) = kind
            && let Some(pref) = self.per_kind_priority.get(&k)
        {
            let pos: HashMap<_, _> = pref
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Single-provider fetch in priority order.
    ///
    /// - The first `Success` wins.
    /// - A `Degraded` answer is remembered and returned only if no later
    ///   connector succeeds.
    /// - `Unsupported` answers do not count as attempts.
    /// - Otherwise errors collapse via [`collapse_errors`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "medley::core::fetch_single",
            skip(self, ctx, call),
            fields(kind = %kind, capability = %capability, prefix = prefix),
        )
    )]
    pub(crate) async fn fetch_single<F, Fut>(
        &self,
        kind: ContentKind,
        capability: Capability,
        prefix: &'static str,
        ctx: &CallContext,
        call: F,
    ) -> Outcome<ContentPage>
    where
        F: Fn(Arc<dyn MedleyConnector>) -> Option<Fut>,
        Fut: Future<Output = Outcome<ContentPage>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<MedleyError> = Vec::new();
        let mut degraded: Option<Outcome<ContentPage>> = None;

        for c in self.ordered_for_kind(Some(kind)) {
            let Some(fut) = call(Arc::clone(&c)) else {
                continue;
            };
            let res = Self::provider_call_with_timeout(
                c.name(),
                capability,
                self.cfg.provider_timeout,
                ctx,
                fut,
            )
            .await;
            match res {
                Outcome::Success(page) => {
                    return Outcome::Success(uniquified(page, prefix));
                }
                d @ Outcome::Degraded { .. } => {
                    attempted_any = true;
                    if degraded.is_none() {
                        degraded = Some(d);
                    }
                }
                Outcome::Failure(MedleyError::Cancelled) => {
                    return Outcome::Failure(MedleyError::Cancelled);
                }
                Outcome::Failure(MedleyError::Unsupported { .. }) => {}
                Outcome::Failure(e) => {
                    attempted_any = true;
                    errors.push(e);
                }
            }
        }

        if let Some(d) = degraded {
            return d.map(|page| uniquified(page, prefix));
        }
        Outcome::Failure(collapse_errors(capability, attempted_any, errors))
    }

    /// Run `calls` concurrently and merge whatever settles.
    ///
    /// Each call is bounded by the provider timeout; the whole fan-out by the
    /// optional request timeout. Merged items are shuffled when `shuffle` is set
    /// and then truncated to `limit`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "medley::core::fan_out",
            skip(self, ctx, calls),
            fields(capability = %capability, sources = calls.len()),
        )
    )]
    pub(crate) async fn fan_out(
        &self,
        capability: Capability,
        ctx: &CallContext,
        calls: Vec<SourceCall<'_>>,
        shuffle: bool,
        limit: Option<usize>,
    ) -> Outcome<ContentPage> {
        if calls.is_empty() {
            return Outcome::Failure(MedleyError::unsupported(capability.as_str()));
        }
        if ctx.is_cancelled() {
            return Outcome::Failure(MedleyError::Cancelled);
        }

        let timeout = self.cfg.provider_timeout;
        let tasks = calls.into_iter().map(move |call| async move {
            let outcome = Self::provider_call_with_timeout(
                call.connector,
                call.capability,
                timeout,
                ctx,
                call.fut,
            )
            .await;
            Settled {
                connector: call.connector,
                prefix: call.prefix,
                outcome,
            }
        });

        let settled =
            match join_with_deadline(capability, tasks, self.cfg.request_timeout).await {
                Ok(v) => v,
                Err(e) => return Outcome::Failure(e),
            };
        if ctx.is_cancelled() {
            return Outcome::Failure(MedleyError::Cancelled);
        }

        merge_settled(capability, settled).map(|mut items| {
            if shuffle {
                items.shuffle(&mut rand::rng());
            }
            if let Some(n) = limit {
                items.truncate(n);
            }
            let total = items.len() as u64;
            ContentPage::new(items).with_total(Some(total))
        })
    }
}

fn uniquified(page: ContentPage, prefix: &str) -> ContentPage {
    ContentPage {
        items: ensure_unique_ids(page.items, Some(prefix)),
        total_results: page.total_results,
    }
}
