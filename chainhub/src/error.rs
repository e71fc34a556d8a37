//! Unified error types for the dispatch layer.

use thiserror::Error;

use crate::protocol::Protocol;

/// Top-level error type for adapter resolution and dispatch.
///
/// This layer performs no recovery, retry, or suppression anywhere; every
/// failure is surfaced immediately to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Chain name not present in the registry.
    #[error("unknown chain `{0}`")]
    UnknownChain(String),

    /// Chain's protocol tag has no registered adapter factory.
    #[error("no adapter for protocol `{0}`")]
    UnsupportedProtocol(Protocol),

    /// Deterministic address derivation exhausted its bounded search space
    /// or was given invalid seeds.
    #[error("address derivation: {0}")]
    Derivation(String),

    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// Error raised inside a caller-supplied per-chain operation,
    /// propagated unmodified.
    #[error(transparent)]
    Other(Box<dyn core::error::Error + Send + Sync>),
}

impl Error {
    /// Shorthand for [`Error::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Shorthand for [`Error::Derivation`].
    pub fn derivation(msg: impl Into<String>) -> Self {
        Self::Derivation(msg.into())
    }

    /// Wrap an arbitrary operation error for pass-through propagation.
    pub fn other(err: impl core::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(err))
    }
}
