//! Keyed chain-metadata storage and lookup.

use std::collections::HashMap;

use super::config::{ChainMetadata, ChainsConfig};
use crate::error::Error;

/// Registry of per-chain metadata, keyed by unique chain name.
///
/// Map-keyed storage guarantees exactly one entry per registered name.
/// Iteration order is registry-defined; callers must treat it as unordered.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: HashMap<String, ChainMetadata>,
}

impl ChainRegistry {
    /// Build a registry from parsed chain configuration.
    #[must_use]
    pub fn new(config: ChainsConfig) -> Self {
        let chains = config
            .0
            .into_iter()
            .map(|(name, spec)| {
                let metadata = ChainMetadata {
                    name: name.clone(),
                    spec,
                };
                (name, metadata)
            })
            .collect();
        Self { chains }
    }

    /// Look up metadata for a chain by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if no entry is registered under
    /// `name`; never falls back to a default.
    pub fn get(&self, name: &str) -> Result<&ChainMetadata, Error> {
        self.chains
            .get(name)
            .ok_or_else(|| Error::UnknownChain(name.to_owned()))
    }

    /// Iterate over registered chain names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    /// Iterate over registered metadata entries.
    pub fn iter(&self) -> impl Iterator<Item = &ChainMetadata> {
        self.chains.values()
    }

    /// Apply `f` to every registered chain, collecting per-key results.
    pub fn map<T>(&self, f: impl Fn(&ChainMetadata) -> T) -> HashMap<String, T> {
        self.chains
            .iter()
            .map(|(name, metadata)| (name.clone(), f(metadata)))
            .collect()
    }

    /// Number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
