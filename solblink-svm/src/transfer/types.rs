//! Transaction building blocks for the `transfer-sol` action.

use solana_message::{Message, VersionedMessage};
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction::versioned::VersionedTransaction;
use solblink::encoding::Base64Bytes;

use super::error::TransactionToB64Error;

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimal places of SOL.
pub const SOL_DECIMALS: u32 = 9;

/// An unsigned transaction waiting for the wallet to sign it.
///
/// Signature slots are filled with default (all-zero) signatures, one per
/// required signer, which is the layout wallets expect to overwrite.
#[derive(Debug, Clone)]
pub struct UnsignedTransaction {
    inner: VersionedTransaction,
}

impl UnsignedTransaction {
    /// Wraps a legacy message, reserving a signature slot for each signer.
    #[must_use]
    pub fn legacy(message: Message) -> Self {
        let signers = usize::from(message.header.num_required_signatures);
        Self {
            inner: VersionedTransaction {
                signatures: vec![Signature::default(); signers],
                message: VersionedMessage::Legacy(message),
            },
        }
    }

    /// Returns the wrapped transaction.
    #[must_use]
    pub const fn inner(&self) -> &VersionedTransaction {
        &self.inner
    }

    /// Returns the fee payer, the first account of the message.
    #[must_use]
    pub fn fee_payer(&self) -> Option<&Pubkey> {
        self.inner.message.static_account_keys().first()
    }

    /// Serializes the transaction in wire format and encodes it as base64.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionToB64Error`] if serialization fails.
    pub fn as_base64(&self) -> Result<Base64Bytes, TransactionToB64Error> {
        let bytes =
            bincode::serialize(&self.inner).map_err(|e| TransactionToB64Error(format!("{e}")))?;
        Ok(Base64Bytes::encode(bytes))
    }
}
