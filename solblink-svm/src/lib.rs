#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Solana chain support for Solana Actions.
//!
//! This crate turns the chain-agnostic action types of `solblink` into a
//! working `transfer-sol` action: it parses Solana addresses, talks to a
//! cluster over JSON-RPC, and builds unsigned SOL transfer transactions for a
//! wallet to sign.
//!
//! # Architecture
//!
//! - [`chain`] - Addresses and the JSON-RPC chain provider
//! - [`networks`] - Public Solana clusters and their CAIP-2 identifiers
//! - [`transfer`] - The `transfer-sol` action (metadata and transaction)
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation
//!
//! # Usage Examples
//!
//! ```ignore
//! use solblink::params::TransferParams;
//! use solblink_svm::SolanaCluster;
//! use solblink_svm::chain::SolanaChainProvider;
//! use solblink_svm::transfer::build_transfer_transaction;
//!
//! let provider = SolanaChainProvider::for_cluster(SolanaCluster::Devnet);
//! let params = TransferParams {
//!     to: "5jZ8KE9B2i1svQ7jRK6geRTMEWLKT22cAyd7T33ohVWq".parse()?,
//!     amount: "0.1".parse()?,
//! };
//! let transfer = build_transfer_transaction(&provider, Some(wallet), &params).await?;
//! let response = transfer.into_post_response()?;
//! ```

pub mod chain;
pub mod networks;
pub mod transfer;

pub use chain::{Address, SolanaChainProvider, SolanaChainProviderLike};
pub use networks::{SOLANA_NETWORKS, SolanaCluster};
pub use transfer::{TransferError, TransferSolAction};
