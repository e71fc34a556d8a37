//! Chain metadata types and name-keyed TOML (de)serialisation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::protocol::Protocol;

/// Configuration for an account-model (EVM) chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvmChainSpec {
    /// HTTP(S) RPC endpoint.
    pub rpc: String,
    /// Deployed contract addresses keyed by role (e.g. `"messenger"`).
    #[serde(default)]
    pub contracts: HashMap<String, String>,
}

/// Configuration for an instruction-model (SVM) chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvmChainSpec {
    /// HTTP(S) RPC endpoint.
    pub rpc: String,
    /// On-chain program identifiers keyed by role (base58).
    #[serde(default)]
    pub programs: HashMap<String, String>,
}

/// Protocol-specific portion of a chain's metadata.
///
/// Selected by the `protocol` field of each `[chains.<name>]` table
/// (`"evm"` → account model, `"svm"` → instruction model).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "protocol", rename_all = "lowercase")]
pub enum ChainSpec {
    /// Account-model chain configuration.
    Evm(EvmChainSpec),
    /// Instruction-model chain configuration.
    Svm(SvmChainSpec),
}

impl ChainSpec {
    /// Protocol tag declared by this configuration.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        match self {
            Self::Evm(_) => Protocol::Evm,
            Self::Svm(_) => Protocol::Svm,
        }
    }

    /// RPC endpoint for this chain.
    #[must_use]
    pub fn rpc(&self) -> &str {
        match self {
            Self::Evm(spec) => &spec.rpc,
            Self::Svm(spec) => &spec.rpc,
        }
    }

    /// Contract or program address registered under `role`, if present.
    ///
    /// Presence is the only check performed; address syntax is the
    /// consuming adapter's concern.
    #[must_use]
    pub fn address(&self, role: &str) -> Option<&str> {
        let addresses = match self {
            Self::Evm(spec) => &spec.contracts,
            Self::Svm(spec) => &spec.programs,
        };
        addresses.get(role).map(String::as_str)
    }
}

/// Static per-chain metadata: unique chain name plus its protocol-specific
/// configuration. One entry per registered chain, owned by the
/// [`ChainRegistry`](super::ChainRegistry) and read-only thereafter.
#[derive(Debug, Clone)]
pub struct ChainMetadata {
    /// Unique chain name, the sole lookup key.
    pub name: String,
    /// Protocol-specific configuration.
    pub spec: ChainSpec,
}

impl ChainMetadata {
    /// Protocol tag declared by this chain.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.spec.protocol()
    }
}

/// Name-keyed collection of [`ChainSpec`] entries.
///
/// Serialised as a TOML map: one `[chains.<name>]` table per chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainsConfig(pub HashMap<String, ChainSpec>);
