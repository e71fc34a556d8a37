//! Chain metadata types, configuration, and registry.
//!
//! - [`config`] — Chain metadata types and name-keyed TOML (de)serialisation.
//! - [`registry`] — [`ChainRegistry`] keyed storage, lookup, and iteration.

mod config;
mod registry;

pub use self::config::*;
pub use self::registry::*;
