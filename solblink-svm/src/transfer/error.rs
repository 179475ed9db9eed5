//! Error types for the `transfer-sol` action.

use solblink::amount::{Amount, AmountError};

use crate::chain::{Address, SolanaChainProviderError};

/// Errors raised while building a transfer transaction.
///
/// The [`Display`](std::fmt::Display) output of each variant is safe to return
/// to the wallet as-is.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The request body carried no `account`.
    #[error("Invalid \"account\" provided")]
    MissingAccount,
    /// The request body carried an `account` that is not a valid address.
    #[error("Invalid \"account\" provided: {0}")]
    InvalidAccount(String),
    /// The transferred amount would not keep the destination rent exempt.
    #[error("Account may not be rent exempt: {destination}")]
    BelowRentExemption {
        /// The destination account.
        destination: Address,
        /// Amount requested, in SOL.
        amount: Amount,
        /// Minimum balance for a zero-data account.
        minimum_balance: u64,
    },
    /// The amount cannot be expressed in lamports.
    #[error(transparent)]
    Amount(#[from] AmountError),
    /// The RPC node could not be queried.
    #[error(transparent)]
    Chain(#[from] SolanaChainProviderError),
    /// The transaction could not be serialized.
    #[error(transparent)]
    Encoding(#[from] TransactionToB64Error),
}

/// Error encoding a transaction to base64.
#[derive(Debug, thiserror::Error)]
#[error("Can not encode transaction to base64: {0}")]
pub struct TransactionToB64Error(pub String);
