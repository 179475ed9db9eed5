//! Blockchain network descriptors.
//!
//! This module provides the chain-agnostic [`NetworkInfo`] record. Concrete
//! network data lives in chain-specific crates:
//!
//! - `solblink-svm` provides `SOLANA_NETWORKS` for the Solana clusters

use crate::chain::ChainId;

/// A known network definition with its chain ID and human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Human-readable network name (e.g., "solana-devnet")
    pub name: &'static str,
    /// CAIP-2 namespace (e.g., "solana")
    pub namespace: &'static str,
    /// Chain reference (e.g., "EtWTRABZaYq6iMfeYKouRu166VU2xqa1" for Solana devnet)
    pub reference: &'static str,
}

impl NetworkInfo {
    /// Create a `ChainId` from this network info
    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        ChainId::new(self.namespace, self.reference)
    }
}
