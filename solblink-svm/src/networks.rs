//! Well-known Solana clusters.
//!
//! Solana networks are identified by the first 32 characters of their genesis
//! block hash:
//! - Mainnet: `5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp`
//! - Devnet: `EtWTRABZaYq6iMfeYKouRu166VU2xqa1`
//! - Testnet: `4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z`

use serde::{Deserialize, Serialize};
use solblink::chain::ChainId;
use solblink::networks::NetworkInfo;
use std::fmt;
use std::str::FromStr;

/// Solana mainnet-beta.
pub const SOLANA_MAINNET: NetworkInfo = NetworkInfo {
    name: "solana",
    namespace: "solana",
    reference: "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp",
};

/// Solana devnet.
pub const SOLANA_DEVNET: NetworkInfo = NetworkInfo {
    name: "solana-devnet",
    namespace: "solana",
    reference: "EtWTRABZaYq6iMfeYKouRu166VU2xqa1",
};

/// Solana testnet.
pub const SOLANA_TESTNET: NetworkInfo = NetworkInfo {
    name: "solana-testnet",
    namespace: "solana",
    reference: "4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z",
};

/// Well-known Solana networks with their names and CAIP-2 identifiers.
pub static SOLANA_NETWORKS: &[NetworkInfo] = &[SOLANA_MAINNET, SOLANA_DEVNET, SOLANA_TESTNET];

/// A public Solana cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolanaCluster {
    /// Mainnet-beta.
    #[serde(rename = "solana", alias = "mainnet-beta", alias = "mainnet")]
    Mainnet,
    /// Devnet.
    #[default]
    #[serde(rename = "solana-devnet", alias = "devnet")]
    Devnet,
    /// Testnet.
    #[serde(rename = "solana-testnet", alias = "testnet")]
    Testnet,
}

impl SolanaCluster {
    /// Returns the network descriptor of this cluster.
    #[must_use]
    pub const fn network(&self) -> &'static NetworkInfo {
        match self {
            Self::Mainnet => &SOLANA_MAINNET,
            Self::Devnet => &SOLANA_DEVNET,
            Self::Testnet => &SOLANA_TESTNET,
        }
    }

    /// Returns the CAIP-2 chain ID of this cluster.
    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.network().chain_id()
    }

    /// Returns the public JSON-RPC endpoint operated by Solana Labs.
    #[must_use]
    pub const fn default_rpc_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
        }
    }
}

impl fmt::Display for SolanaCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.network().name)
    }
}

/// Error returned when parsing an unknown cluster name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown Solana cluster {0}")]
pub struct UnknownClusterError(String);

impl FromStr for SolanaCluster {
    type Err = UnknownClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solana" | "mainnet-beta" | "mainnet" => Ok(Self::Mainnet),
            "solana-devnet" | "devnet" => Ok(Self::Devnet),
            "solana-testnet" | "testnet" => Ok(Self::Testnet),
            _ => Err(UnknownClusterError(s.to_owned())),
        }
    }
}
