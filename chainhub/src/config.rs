//! Configuration loading and default template generation.
//!
//! - [`Config`] — Top-level configuration holding the name-keyed
//!   [`ChainsConfig`] registry section.
//! - [`load_config`] — Reads and parses a TOML configuration file.
//! - [`default_config_template`] — Produces a commented TOML template.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::ChainsConfig;
use crate::error::Error;

/// Top-level configuration: the chain metadata registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-chain metadata, keyed by unique chain name.
    #[serde(default)]
    pub chains: ChainsConfig,
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be resolved, read, or
/// parsed.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config(format!(
            "failed to resolve config path '{}': {e}",
            path.display()
        ))
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config(format!(
            "failed to read config file '{}': {e}",
            config_path.display()
        ))
    })?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        Error::config(format!(
            "failed to parse TOML config '{}': {e}",
            config_path.display()
        ))
    })?;
    tracing::info!(chains = config.chains.0.len(), "configuration loaded");
    Ok(config)
}

/// Generate a commented default TOML configuration template, with one
/// example chain per protocol family.
#[must_use]
pub fn default_config_template() -> String {
    String::from(
        r#"# Chain registry configuration.
# One [chains.<name>] table per chain; <name> is the unique lookup key.

# ── Account-model (EVM) chains ──────────────────────────────────────
[chains.base]
protocol = "evm"
rpc = "https://mainnet.base.org"

[chains.base.contracts]
messenger = "0x4200000000000000000000000000000000000007"

# ── Instruction-model (SVM) chains ──────────────────────────────────
[chains.solana]
protocol = "svm"
rpc = "https://api.mainnet-beta.solana.com"

[chains.solana.programs]
messenger = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr"
"#,
    )
}
