//! Account-model (EVM) adapter base type.

use std::sync::Arc;

use super::ChainAdapter;
use crate::connect::Connectivity;
use crate::error::Error;
use crate::protocol::Protocol;

/// Adapter base for account-model chains. Fixes [`Protocol::Evm`].
#[derive(Debug, Clone)]
pub struct EvmAdapter {
    connectivity: Arc<Connectivity>,
}

impl EvmAdapter {
    /// Bind a new adapter to the shared connectivity object.
    #[must_use]
    pub const fn new(connectivity: Arc<Connectivity>) -> Self {
        Self { connectivity }
    }

    /// [`AdapterFactory`](super::AdapterFactory)-compatible constructor.
    ///
    /// # Errors
    ///
    /// Infallible today; the signature matches the factory contract.
    pub fn boxed(connectivity: Arc<Connectivity>) -> Result<Box<dyn ChainAdapter>, Error> {
        Ok(Box::new(Self::new(connectivity)))
    }
}

impl ChainAdapter for EvmAdapter {
    fn protocol(&self) -> Protocol {
        Protocol::Evm
    }

    fn connectivity(&self) -> &Arc<Connectivity> {
        &self.connectivity
    }
}
