//! Chain protocol family tags.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Execution-model family of a blockchain.
///
/// A closed set: every registered chain declares exactly one protocol tag,
/// and adapter resolution matches on it by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Account-model chains (EVM / EIP-155 compatible networks).
    Evm,
    /// Instruction-model chains (SVM / Solana compatible networks).
    Svm,
}

impl Protocol {
    /// Lowercase identifier used in configuration files and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Svm => "svm",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
