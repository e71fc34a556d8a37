//! Shared connectivity handle supplying network endpoints per chain.

use std::collections::HashMap;

use url::Url;

use crate::chain::ChainRegistry;
use crate::error::Error;

/// Per-chain network endpoints, constructed once and shared read-only
/// (behind an [`Arc`](std::sync::Arc)) into every adapter constructor.
///
/// Holds endpoint values only; this type performs no network I/O and is
/// never mutated by the dispatch core.
#[derive(Debug, Clone)]
pub struct Connectivity {
    endpoints: HashMap<String, Url>,
}

impl Connectivity {
    /// Build connectivity covering every chain in the registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any chain's RPC endpoint is not a
    /// valid URL.
    pub fn from_registry(registry: &ChainRegistry) -> Result<Self, Error> {
        let mut endpoints = HashMap::with_capacity(registry.len());
        for metadata in registry.iter() {
            let url = Url::parse(metadata.spec.rpc()).map_err(|e| {
                Error::config(format!(
                    "invalid RPC endpoint for chain `{}`: {e}",
                    metadata.name
                ))
            })?;
            endpoints.insert(metadata.name.clone(), url);
        }
        Ok(Self { endpoints })
    }

    /// RPC endpoint for the given chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if the chain has no configured
    /// endpoint.
    pub fn endpoint(&self, chain: &str) -> Result<&Url, Error> {
        self.endpoints
            .get(chain)
            .ok_or_else(|| Error::UnknownChain(chain.to_owned()))
    }

    /// Names of all chains with a configured endpoint.
    pub fn chains(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }
}
