use futures::future::BoxFuture;
use medley_core::{
    Capability, ContentItem, ContentPage, DegradeReason, MedleyError, Outcome, SourceGroup,
    combine_with_unique_ids,
};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// This wraps `futures::future::join_all(tasks)` with `crate::core::with_request_deadline`.
/// On timeout it returns `MedleyError::RequestTimeout` labelled with `capability`.
///
/// # Errors
/// Returns `RequestTimeout` when `deadline` elapses before every task settles.
pub async fn join_with_deadline<I, F, T>(
    capability: Capability,
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, MedleyError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = T>,
{
    crate::core::with_request_deadline(capability, deadline, futures::future::join_all(tasks))
        .await
}

/// Collapse a set of provider errors into a uniform `MedleyError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If all errors ask for a signed-in user → the first `AuthRequired`.
/// - If all errors are `InvalidArg` → the first of them.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    mut errors: Vec<MedleyError>,
) -> MedleyError {
    if !attempted_any {
        return MedleyError::unsupported(capability.as_str());
    }
    if errors.is_empty() {
        return MedleyError::AllProvidersFailed(errors);
    }
    if errors
        .iter()
        .all(|e| matches!(e, MedleyError::ProviderTimeout { .. }))
    {
        return MedleyError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if errors
        .iter()
        .all(|e| matches!(e, MedleyError::AuthRequired { .. }))
        || errors
            .iter()
            .all(|e| matches!(e, MedleyError::InvalidArg(_)))
    {
        return errors.swap_remove(0);
    }
    MedleyError::AllProvidersFailed(errors)
}

/// One planned provider call inside a fan-out.
pub(crate) struct SourceCall<'a> {
    pub(crate) connector: &'static str,
    pub(crate) capability: Capability,
    pub(crate) prefix: &'static str,
    pub(crate) fut: BoxFuture<'a, Outcome<ContentPage>>,
}

impl<'a> SourceCall<'a> {
    pub(crate) fn new(
        connector: &'static str,
        capability: Capability,
        prefix: &'static str,
        fut: BoxFuture<'a, Outcome<ContentPage>>,
    ) -> Self {
        Self {
            connector,
            capability,
            prefix,
            fut,
        }
    }
}

/// A fan-out call after it settled.
#[derive(Debug)]
pub(crate) struct Settled {
    pub(crate) connector: &'static str,
    pub(crate) prefix: &'static str,
    pub(crate) outcome: Outcome<ContentPage>,
}

/// Merge settled fan-out calls into one outcome.
///
/// Every group that produced data (live or sample) is combined in call order
/// through `combine_with_unique_ids`. Failed groups contribute nothing; their
/// errors and the names of connectors that fell back become a
/// `PartialFailure` reason. `Unsupported` answers are ignored.
pub(crate) fn merge_settled(
    capability: Capability,
    settled: Vec<Settled>,
) -> Outcome<Vec<ContentItem>> {
    let mut groups: Vec<SourceGroup> = Vec::with_capacity(settled.len());
    let mut failed: Vec<MedleyError> = Vec::new();
    let mut fallbacks: Vec<String> = Vec::new();
    let mut attempted_any = false;

    for s in settled {
        match s.outcome {
            Outcome::Success(page) => {
                attempted_any = true;
                groups.push(SourceGroup::prefixed(s.prefix, page.items));
            }
            Outcome::Degraded { data, reason } => {
                attempted_any = true;
                match reason {
                    DegradeReason::MockFallback { connector, .. } => {
                        if !fallbacks.contains(&connector) {
                            fallbacks.push(connector);
                        }
                    }
                    DegradeReason::PartialFailure {
                        failed: inner,
                        fallbacks: inner_fallbacks,
                    } => {
                        failed.extend(inner);
                        for f in inner_fallbacks {
                            if !fallbacks.contains(&f) {
                                fallbacks.push(f);
                            }
                        }
                    }
                }
                groups.push(SourceGroup::prefixed(s.prefix, data.items));
            }
            Outcome::Failure(MedleyError::Unsupported { .. }) => {}
            Outcome::Failure(e) => {
                attempted_any = true;
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    connector = s.connector,
                    prefix = s.prefix,
                    error = %e,
                    "source dropped from aggregate"
                );
                failed.push(e);
            }
        }
    }

    if groups.is_empty() {
        return Outcome::Failure(collapse_errors(capability, attempted_any, failed));
    }

    let items = combine_with_unique_ids(groups);
    if failed.is_empty() && fallbacks.is_empty() {
        Outcome::Success(items)
    } else {
        Outcome::Degraded {
            data: items,
            reason: DegradeReason::PartialFailure { failed, fallbacks },
        }
    }
}
