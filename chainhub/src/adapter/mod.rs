//! Adapter capability interface and factory registry.
//!
//! - [`ChainAdapter`] — the shared capability surface every protocol
//!   adapter implements.
//! - [`AdapterFactories`] — explicit protocol-to-constructor mapping
//!   consumed by the resolver.
//! - [`evm`] / [`svm`] — one adapter base type per protocol family.

pub mod evm;
pub mod svm;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::connect::Connectivity;
use crate::error::Error;
use crate::protocol::Protocol;

pub use self::evm::EvmAdapter;
pub use self::svm::SvmAdapter;

/// Shared capability surface of every protocol adapter.
///
/// An adapter is bound to the shared [`Connectivity`] object and carries a
/// protocol tag fixed by its concrete type. Protocol-specific capability
/// methods (message routing, token transfers) live on the concrete types,
/// not here.
pub trait ChainAdapter: fmt::Debug + Send + Sync {
    /// Protocol tag fixed by the concrete adapter type.
    fn protocol(&self) -> Protocol;

    /// Shared connectivity object this adapter is bound to.
    fn connectivity(&self) -> &Arc<Connectivity>;
}

/// Constructor reference for one protocol family's adapter.
///
/// Invoked with the shared connectivity object as its single argument;
/// must be deterministic and side-effect-free. The instance it yields is
/// expected to carry the protocol tag it was registered under — the
/// resolver does not re-verify this.
pub type AdapterFactory = fn(Arc<Connectivity>) -> Result<Box<dyn ChainAdapter>, Error>;

/// Explicit mapping from protocol tag to adapter constructor.
///
/// Supplied when the application is assembled. Protocols without an entry
/// resolve to [`Error::UnsupportedProtocol`].
#[derive(Debug, Clone, Default)]
pub struct AdapterFactories {
    factories: HashMap<Protocol, AdapterFactory>,
}

impl AdapterFactories {
    /// Empty factory map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory map covering both built-in adapter base types.
    #[must_use]
    pub fn standard() -> Self {
        let mut factories = Self::new();
        factories.register(Protocol::Evm, EvmAdapter::boxed);
        factories.register(Protocol::Svm, SvmAdapter::boxed);
        factories
    }

    /// Register (or replace) the factory for `protocol`.
    pub fn register(&mut self, protocol: Protocol, factory: AdapterFactory) {
        self.factories.insert(protocol, factory);
    }

    /// Factory registered for `protocol`, if any.
    #[must_use]
    pub fn get(&self, protocol: Protocol) -> Option<AdapterFactory> {
        self.factories.get(&protocol).copied()
    }
}
