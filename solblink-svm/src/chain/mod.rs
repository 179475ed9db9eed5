//! Solana chain support for Solana Actions.
//!
//! This module provides the address type used in action query parameters and
//! POST bodies, and the provider abstraction over the Solana JSON-RPC API.
//!
//! # Key Types
//!
//! - [`Address`] - A Solana public key (base58-encoded)
//! - [`SolanaChainProviderLike`] - The chain operations a transfer action needs
//! - [`SolanaChainProvider`] - JSON-RPC implementation of [`SolanaChainProviderLike`]
//! - [`BlockReference`] - A recent blockhash and the last block height it is valid for

/// Core Solana chain types.
pub mod types;
pub use types::*;

/// Solana chain provider implementation.
pub mod provider;
pub use provider::*;
