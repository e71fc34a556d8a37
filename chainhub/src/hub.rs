//! Adapter resolution and multi-chain batch dispatch.
//!
//! [`ChainHub`] translates chain names into live adapter instances and
//! applies per-chain operations across every registered chain.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future;

use crate::adapter::{AdapterFactories, ChainAdapter};
use crate::chain::{ChainMetadata, ChainRegistry};
use crate::connect::Connectivity;
use crate::error::Error;

/// Adapter resolver and batch dispatcher over all registered chains.
///
/// Holds the metadata registry, the shared connectivity object, and the
/// protocol-to-factory map supplied at assembly time.
#[derive(Debug)]
pub struct ChainHub {
    registry: ChainRegistry,
    connectivity: Arc<Connectivity>,
    factories: AdapterFactories,
}

impl ChainHub {
    /// Assemble a hub from its three collaborators.
    #[must_use]
    pub const fn new(
        registry: ChainRegistry,
        connectivity: Arc<Connectivity>,
        factories: AdapterFactories,
    ) -> Self {
        Self {
            registry,
            connectivity,
            factories,
        }
    }

    /// Registry of chain metadata backing this hub.
    #[must_use]
    pub const fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Metadata for the given chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if the name is not registered.
    pub fn metadata(&self, chain: &str) -> Result<&ChainMetadata, Error> {
        self.registry.get(chain)
    }

    /// Resolve a chain name into a freshly constructed adapter.
    ///
    /// Construction is eager and unconditional: every call allocates a new
    /// instance. Adapters are cheap to construct and stateless beyond their
    /// bound connectivity reference, so there is no caching, memoisation,
    /// or pooling. The constructed adapter's tag is not re-checked against
    /// the metadata tag; a misregistered factory yields a wrong adapter
    /// silently.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] for an unregistered name, and
    /// [`Error::UnsupportedProtocol`] when no factory is registered for
    /// the chain's protocol.
    pub fn adapter(&self, chain: &str) -> Result<Box<dyn ChainAdapter>, Error> {
        let metadata = self.registry.get(chain)?;
        let protocol = metadata.protocol();
        let factory = self
            .factories
            .get(protocol)
            .ok_or(Error::UnsupportedProtocol(protocol))?;
        tracing::debug!(chain, %protocol, "constructing adapter");
        factory(Arc::clone(&self.connectivity))
    }

    /// Construct one adapter per registered chain.
    ///
    /// # Errors
    ///
    /// Propagates the first resolution failure; no partial map is
    /// returned.
    pub fn adapters(&self) -> Result<HashMap<String, Box<dyn ChainAdapter>>, Error> {
        self.registry
            .names()
            .map(|name| Ok((name.to_owned(), self.adapter(name)?)))
            .collect()
    }

    /// Apply an asynchronous operation to every registered chain.
    ///
    /// Resolves each chain's adapter and invokes `op(name, adapter)`. All
    /// per-chain futures are issued up front and joined once, so they
    /// interleave arbitrarily on the current task; the result map becomes
    /// observable only after every operation has finished, keyed by the
    /// full registered chain-name set.
    ///
    /// # Errors
    ///
    /// First failure wins: if any resolution or operation fails, the whole
    /// call fails and completed sibling results are discarded. Operation
    /// errors propagate unmodified. Timeouts and cancellation are the
    /// operation's (or the connectivity layer's) concern; a hang in one
    /// chain's operation hangs the whole call.
    pub async fn adapter_map<T, F, Fut>(&self, op: F) -> Result<HashMap<String, T>, Error>
    where
        F: Fn(String, Box<dyn ChainAdapter>) -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let op = &op;
        let tasks = self.registry.names().map(|name| {
            let name = name.to_owned();
            async move {
                let adapter = self.adapter(&name)?;
                let value = op(name.clone(), adapter).await?;
                Ok::<_, Error>((name, value))
            }
        });
        let entries = future::try_join_all(tasks).await?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::adapter::EvmAdapter;
    use crate::chain::ChainsConfig;
    use crate::protocol::Protocol;

    const TWO_CHAINS: &str = r#"
        [base]
        protocol = "evm"
        rpc = "https://mainnet.base.org"

        [base.contracts]
        messenger = "0x4200000000000000000000000000000000000007"

        [solana]
        protocol = "svm"
        rpc = "https://api.mainnet-beta.solana.com"

        [solana.programs]
        messenger = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr"
    "#;

    fn hub(factories: AdapterFactories) -> ChainHub {
        let chains: ChainsConfig = toml::from_str(TWO_CHAINS).unwrap();
        let registry = ChainRegistry::new(chains);
        let connectivity = Arc::new(Connectivity::from_registry(&registry).unwrap());
        ChainHub::new(registry, connectivity, factories)
    }

    fn evm_only() -> AdapterFactories {
        let mut factories = AdapterFactories::new();
        factories.register(Protocol::Evm, EvmAdapter::boxed);
        factories
    }

    #[test]
    fn adapter_tag_matches_metadata_tag() {
        let hub = hub(AdapterFactories::standard());
        for name in ["base", "solana"] {
            let adapter = hub.adapter(name).unwrap();
            assert_eq!(adapter.protocol(), hub.metadata(name).unwrap().protocol());
        }
    }

    #[test]
    fn every_call_constructs_a_fresh_instance() {
        let hub = hub(AdapterFactories::standard());
        let first = hub.adapter("base").unwrap();
        let before = Arc::strong_count(first.connectivity());
        let _second = hub.adapter("base").unwrap();
        // A second resolution bound another instance to the shared object.
        assert_eq!(Arc::strong_count(first.connectivity()), before + 1);
    }

    #[test]
    fn unregistered_name_fails_for_metadata_and_adapter() {
        let hub = hub(AdapterFactories::standard());
        assert!(matches!(
            hub.metadata("near").unwrap_err(),
            Error::UnknownChain(name) if name == "near"
        ));
        assert!(matches!(
            hub.adapter("near").unwrap_err(),
            Error::UnknownChain(name) if name == "near"
        ));
    }

    #[test]
    fn unmapped_protocol_fails_with_the_tag_embedded() {
        let hub = hub(evm_only());
        let err = hub.adapter("solana").unwrap_err();
        assert!(matches!(err, Error::UnsupportedProtocol(Protocol::Svm)));
        assert_eq!(err.to_string(), "no adapter for protocol `svm`");
    }

    #[test]
    fn adapters_covers_the_full_chain_set() {
        let hub = hub(AdapterFactories::standard());
        let adapters = hub.adapters().unwrap();
        let names: HashSet<&str> = adapters.keys().map(String::as_str).collect();
        assert_eq!(names, HashSet::from(["base", "solana"]));
    }

    #[test]
    fn adapters_propagates_a_single_resolution_failure() {
        let hub = hub(evm_only());
        assert!(matches!(
            hub.adapters().unwrap_err(),
            Error::UnsupportedProtocol(Protocol::Svm)
        ));
    }

    #[tokio::test]
    async fn adapter_map_matches_sequential_application() {
        let hub = hub(AdapterFactories::standard());
        let results = hub
            .adapter_map(|name, adapter| async move {
                Ok(format!("{name}:{}", adapter.protocol()))
            })
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        for name in ["base", "solana"] {
            let adapter = hub.adapter(name).unwrap();
            assert_eq!(results[name], format!("{name}:{}", adapter.protocol()));
        }
    }

    #[tokio::test]
    async fn adapter_map_fails_as_a_whole_when_one_op_fails() {
        let hub = hub(AdapterFactories::standard());
        let result = hub
            .adapter_map(|name, _adapter| async move {
                if name == "solana" {
                    Err(Error::config("boom"))
                } else {
                    Ok(name)
                }
            })
            .await;
        assert!(matches!(result.unwrap_err(), Error::Config(msg) if msg == "boom"));
    }

    #[tokio::test]
    async fn adapter_map_surfaces_resolution_failures() {
        let hub = hub(evm_only());
        let result = hub.adapter_map(|name, _adapter| async move { Ok(name) }).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UnsupportedProtocol(Protocol::Svm)
        ));
    }
}
