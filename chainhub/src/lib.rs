//! Uniform adapter layer over multiple blockchain protocol families.
//!
//! Client code addresses chains by name; [`ChainHub`] resolves each name
//! to a protocol-appropriate adapter (account-model / EVM or
//! instruction-model / SVM) behind the shared [`ChainAdapter`] capability
//! surface, and batch helpers apply an operation across every registered
//! chain concurrently.
//!
//! This layer performs no network I/O itself: adapters are bound to a
//! shared, read-only [`Connectivity`] object and constructed fresh on
//! every resolution.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chainhub::{AdapterFactories, ChainHub, ChainRegistry, Connectivity};
//!
//! # fn main() -> Result<(), chainhub::Error> {
//! let config = chainhub::load_config("config.toml".as_ref())?;
//! let registry = ChainRegistry::new(config.chains);
//! let connectivity = Arc::new(Connectivity::from_registry(&registry)?);
//! let hub = ChainHub::new(registry, connectivity, AdapterFactories::standard());
//!
//! let adapter = hub.adapter("base")?;
//! assert_eq!(adapter.protocol(), hub.metadata("base")?.protocol());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod chain;
mod config;
mod connect;
mod error;
mod hub;
mod protocol;

pub use self::adapter::{AdapterFactories, AdapterFactory, ChainAdapter, EvmAdapter, SvmAdapter};
pub use self::chain::{
    ChainMetadata, ChainRegistry, ChainSpec, ChainsConfig, EvmChainSpec, SvmChainSpec,
};
pub use self::config::{Config, default_config_template, load_config};
pub use self::connect::Connectivity;
pub use self::error::Error;
pub use self::hub::ChainHub;
pub use self::protocol::Protocol;
