//! medley-core
//!
//! Core types, traits, and utilities shared across the medley ecosystem.
//!
//! - `connector`: the `MedleyConnector` trait and the per-kind provider role traits.
//! - `context`: per-call cancellation, timeout and session token.
//! - `clock`: injectable time source for expiry bookkeeping.
//! - `uniquify`: identifier uniquification for merged result sets.
//! - `fixtures`: the hand-authored datasets connectors serve when a live call fails.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime.
//! `context::CallContext` wraps a `tokio_util::sync::CancellationToken` and
//! applies deadlines with `tokio::time::timeout`, so code that drives provider
//! calls must run under a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Injectable time source.
pub mod clock;
/// Connector capability traits and the primary `MedleyConnector` interface.
pub mod connector;
/// Per-call context: cancellation, timeout override and user session.
pub mod context;
/// Fallback datasets served when a provider is unavailable.
pub mod fixtures;
/// Identifier uniquification across merged result sets.
pub mod uniquify;

pub use clock::{Clock, ManualClock, SystemClock};
pub use connector::MedleyConnector;
pub use context::CallContext;
pub use uniquify::{
    KNOWN_PREFIXES, SourceGroup, combine_with_unique_ids, ensure_unique_ids, original_id,
    remove_duplicates_by_original_id,
};

pub use medley_types::*;
