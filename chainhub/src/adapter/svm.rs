//! Instruction-model (SVM) adapter base type and deterministic
//! program-derived address computation.

use std::sync::Arc;

use solana_pubkey::{MAX_SEED_LEN, MAX_SEEDS, PubkeyError};
pub use solana_pubkey::Pubkey;

use super::ChainAdapter;
use crate::connect::Connectivity;
use crate::error::Error;
use crate::protocol::Protocol;

/// Adapter base for instruction-model chains. Fixes [`Protocol::Svm`].
#[derive(Debug, Clone)]
pub struct SvmAdapter {
    connectivity: Arc<Connectivity>,
}

impl SvmAdapter {
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

    /// Compute a deterministic program-derived address.
    ///
    /// Appends a bump seed to `seeds`, searching from 255 down to 0, until
    /// the candidate address is off-curve (unaddressable by ordinary key
    /// generation), and returns the address together with the bump that
    /// produced it. Identical inputs always yield the same output. The
    /// per-candidate hash and on-curve check are delegated to
    /// [`Pubkey::create_program_address`]; this function owns the bounded
    /// bump search. Pure: no network I/O.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Derivation`] if a seed exceeds [`MAX_SEED_LEN`]
    /// bytes, there is no room left for the bump seed, or the bump range
    /// is exhausted without finding an off-curve candidate.
    pub fn derive_program_address(
        seeds: &[&[u8]],
        program_id: &Pubkey,
    ) -> Result<(Pubkey, u8), Error> {
        if seeds.len() >= MAX_SEEDS {
            return Err(Error::derivation(format!(
                "too many seeds: {} (maximum {MAX_SEEDS} including the bump seed)",
                seeds.len()
            )));
        }
        if let Some(seed) = seeds.iter().find(|seed| seed.len() > MAX_SEED_LEN) {
            return Err(Error::derivation(format!(
                "seed of {} bytes exceeds the {MAX_SEED_LEN}-byte maximum",
                seed.len()
            )));
        }

        for bump in (0..=u8::MAX).rev() {
            let bump_seed = [bump];
            let mut with_bump = Vec::with_capacity(seeds.len() + 1);
            with_bump.extend_from_slice(seeds);
            with_bump.push(&bump_seed);
            match Pubkey::create_program_address(&with_bump, program_id) {
                Ok(address) => return Ok((address, bump)),
                // Candidate landed on the curve; try the next bump.
                Err(PubkeyError::InvalidSeeds) => {}
                Err(e) => return Err(Error::derivation(e.to_string())),
            }
        }
        Err(Error::derivation(format!(
            "bump seed range exhausted for program `{program_id}`"
        )))
    }
}

impl ChainAdapter for SvmAdapter {
    fn protocol(&self) -> Protocol {
        Protocol::Svm
    }

    fn connectivity(&self) -> &Arc<Connectivity> {
        &self.connectivity
    }
}
