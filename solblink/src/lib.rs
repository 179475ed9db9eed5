#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the Solana Actions protocol.
//!
//! A Solana Action is a pair of HTTP endpoints: a `GET` that describes an
//! on-chain operation with a title, an icon and a set of links, and a `POST`
//! that turns one of those links into a transaction for the user's wallet to
//! sign. This crate holds the chain-agnostic pieces; Solana-specific address
//! parsing and transaction building live in `solblink-svm`.
//!
//! # Modules
//!
//! - [`action`] - `GET`/`POST` request and response bodies
//! - [`amount`] - Exact decimal amounts and base-unit conversion
//! - [`chain`] - CAIP-2 chain identifiers
//! - [`discovery`] - The `actions.json` discovery document
//! - [`encoding`] - Base64 helpers for serialized transactions
//! - [`networks`] - Network descriptors
//! - [`params`] - Query-parameter validation for transfer actions
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod action;
pub mod amount;
pub mod chain;
pub mod discovery;
pub mod encoding;
pub mod networks;
pub mod params;

pub use action::{ActionGetResponse, ActionPostRequest, ActionPostResponse};
pub use amount::{Amount, AmountError};
pub use discovery::ActionsJson;
pub use params::{InvalidParameterError, TransferDefaults, TransferParams, TransferQuery};
