//! Builds the unsigned transaction returned by a `transfer-sol` `POST`.

use rust_decimal::Decimal;
use solana_message::Message;
use solana_system_interface::instruction as system_instruction;
use solblink::action::{ActionPostResponse, PostResponseType};
use solblink::amount::Amount;
use solblink::params::TransferParams;
use std::str::FromStr;

use super::error::{TransactionToB64Error, TransferError};
use super::types::{LAMPORTS_PER_SOL, SOL_DECIMALS, UnsignedTransaction};
use crate::chain::{Address, BlockReference, SolanaChainProviderLike};

/// An unsigned SOL transfer ready to be handed to a wallet.
#[derive(Debug, Clone)]
pub struct UnsignedTransfer {
    /// Sender and fee payer.
    pub from: Address,
    /// Destination.
    pub to: Address,
    /// Lamports moved.
    pub lamports: u64,
    /// Blockhash the transaction references.
    pub block: BlockReference,
    /// The transaction itself.
    pub transaction: UnsignedTransaction,
    /// Summary shown by the wallet.
    pub message: String,
}

impl UnsignedTransfer {
    /// Encodes the transaction into an action `POST` response.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Encoding`] if the transaction cannot be
    /// serialized.
    pub fn into_post_response(self) -> Result<ActionPostResponse, TransferError> {
        Ok(create_post_response(&self.transaction, Some(self.message))?)
    }
}

/// Wraps a transaction into an action `POST` response.
///
/// # Errors
///
/// Returns [`TransactionToB64Error`] if the transaction cannot be serialized.
pub fn create_post_response(
    transaction: &UnsignedTransaction,
    message: Option<String>,
) -> Result<ActionPostResponse, TransactionToB64Error> {
    Ok(ActionPostResponse {
        kind: PostResponseType::Transaction,
        transaction: transaction.as_base64()?.into_string(),
        message,
    })
}

/// Builds an unsigned transfer of `params.amount` SOL from `account` to
/// `params.to`.
///
/// `account` pays the fee. The transfer is rejected when the amount, taken
/// exactly in lamports, is below the rent-exempt minimum of a zero-data
/// account, since a fresh destination would otherwise be left unfunded.
///
/// # Errors
///
/// - [`TransferError::MissingAccount`] if `account` is absent or blank
/// - [`TransferError::InvalidAccount`] if `account` is not a valid address
/// - [`TransferError::Chain`] if the RPC node cannot be reached
/// - [`TransferError::BelowRentExemption`] if the amount is too small
/// - [`TransferError::Amount`] if the amount is not a whole number of lamports
pub async fn build_transfer_transaction<P>(
    provider: &P,
    account: Option<&str>,
    params: &TransferParams<Address>,
) -> Result<UnsignedTransfer, TransferError>
where
    P: SolanaChainProviderLike + ?Sized,
{
    let account = account
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or(TransferError::MissingAccount)?;
    let from =
        Address::from_str(account).map_err(|e| TransferError::InvalidAccount(e.to_string()))?;
    let to = params.to;

    let minimum_balance = provider.minimum_balance_for_rent_exemption(0).await?;
    if below_rent_exemption(params.amount, minimum_balance) {
        #[cfg(feature = "telemetry")]
        tracing::debug!(
            destination = %to,
            amount = %params.amount,
            minimum_balance,
            "Transfer below rent-exempt minimum"
        );
        return Err(TransferError::BelowRentExemption {
            destination: to,
            amount: params.amount,
            minimum_balance,
        });
    }
    let lamports = params.amount.to_base_units(SOL_DECIMALS)?;

    let block = provider.latest_block_reference().await?;
    let instruction = system_instruction::transfer(from.pubkey(), to.pubkey(), lamports);
    let message = Message::new_with_blockhash(&[instruction], Some(from.pubkey()), &block.blockhash);
    let transaction = UnsignedTransaction::legacy(message);

    #[cfg(feature = "telemetry")]
    tracing::info!(
        from = %from,
        to = %to,
        lamports,
        last_valid_block_height = block.last_valid_block_height,
        "Built unsigned transfer"
    );

    Ok(UnsignedTransfer {
        from,
        to,
        lamports,
        block,
        transaction,
        message: format!("Send {} SOL to {}", params.amount, to),
    })
}

/// Compares `amount` SOL against `minimum_balance` lamports without rounding.
fn below_rent_exemption(amount: Amount, minimum_balance: u64) -> bool {
    amount
        .inner()
        .checked_mul(Decimal::from(LAMPORTS_PER_SOL))
        .is_some_and(|lamports| lamports < Decimal::from(minimum_balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::SolanaChainProviderError;
    use crate::networks::SolanaCluster;
    use solana_message::{Hash, VersionedMessage};
    use solana_system_interface::program as system_program;
    use solana_transaction::versioned::VersionedTransaction;
    use solblink::chain::ChainId;
    use solblink::encoding::Base64Bytes;

    const PAYER: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
    const DESTINATION: &str = "5jZ8KE9B2i1svQ7jRK6geRTMEWLKT22cAyd7T33ohVWq";

    struct FixedProvider {
        minimum_balance: u64,
        blockhash: Hash,
    }

    impl FixedProvider {
        fn new() -> Self {
            Self {
                minimum_balance: 890_880,
                blockhash: Hash::new_from_array([9; 32]),
            }
        }
    }

    #[async_trait::async_trait]
    impl SolanaChainProviderLike for FixedProvider {
        fn chain_id(&self) -> ChainId {
            SolanaCluster::Devnet.chain_id()
        }

        async fn minimum_balance_for_rent_exemption(
            &self,
            _data_len: usize,
        ) -> Result<u64, SolanaChainProviderError> {
            Ok(self.minimum_balance)
        }

        async fn latest_block_reference(&self) -> Result<BlockReference, SolanaChainProviderError> {
            Ok(BlockReference {
                blockhash: self.blockhash,
                last_valid_block_height: 100,
            })
        }
    }

    struct DownProvider;

    #[async_trait::async_trait]
    impl SolanaChainProviderLike for DownProvider {
        fn chain_id(&self) -> ChainId {
            SolanaCluster::Devnet.chain_id()
        }

        async fn minimum_balance_for_rent_exemption(
            &self,
            _data_len: usize,
        ) -> Result<u64, SolanaChainProviderError> {
            Err(SolanaChainProviderError::Rpc("connection refused".into()))
        }

        async fn latest_block_reference(&self) -> Result<BlockReference, SolanaChainProviderError> {
            Err(SolanaChainProviderError::Rpc("connection refused".into()))
        }
    }

    fn params(amount: &str) -> TransferParams<Address> {
        TransferParams {
            to: DESTINATION.parse().unwrap(),
            amount: amount.parse::<Amount>().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_builds_legacy_transfer() {
        let provider = FixedProvider::new();
        let transfer = build_transfer_transaction(&provider, Some(PAYER), &params("1"))
            .await
            .unwrap();

        assert_eq!(transfer.lamports, 1_000_000_000);
        assert_eq!(transfer.message, format!("Send 1 SOL to {DESTINATION}"));
        assert_eq!(transfer.from.to_string(), PAYER);
        assert_eq!(transfer.transaction.fee_payer(), Some(transfer.from.pubkey()));

        let VersionedMessage::Legacy(message) = &transfer.transaction.inner().message else {
            panic!("expected a legacy message");
        };
        assert_eq!(message.recent_blockhash, provider.blockhash);
        assert_eq!(message.header.num_required_signatures, 1);
        assert_eq!(message.instructions.len(), 1);
        let program = message.program_id(0).unwrap();
        assert_eq!(*program, system_program::ID);

        let data = &message.instructions[0].data;
        assert_eq!(data[..4], [2, 0, 0, 0]);
        assert_eq!(data[4..], 1_000_000_000u64.to_le_bytes());
    }

    #[tokio::test]
    async fn test_post_response_decodes_to_transaction() {
        let provider = FixedProvider::new();
        let transfer = build_transfer_transaction(&provider, Some(PAYER), &params("0.5"))
            .await
            .unwrap();
        let expected = transfer.transaction.inner().clone();
        let response = transfer.into_post_response().unwrap();

        assert_eq!(response.kind, PostResponseType::Transaction);
        assert_eq!(
            response.message.as_deref(),
            Some(format!("Send 0.5 SOL to {DESTINATION}").as_str())
        );
        let bytes = Base64Bytes::from(response.transaction).decode().unwrap();
        let decoded: VersionedTransaction = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, expected);
    }

    #[tokio::test]
    async fn test_missing_account() {
        let provider = FixedProvider::new();
        for account in [None, Some(""), Some("   ")] {
            let err = build_transfer_transaction(&provider, account, &params("1"))
                .await
                .unwrap_err();
            assert!(matches!(err, TransferError::MissingAccount));
            assert_eq!(err.to_string(), "Invalid \"account\" provided");
        }
    }

    #[tokio::test]
    async fn test_invalid_account() {
        let provider = FixedProvider::new();
        let err = build_transfer_transaction(&provider, Some("not-a-key"), &params("1"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::InvalidAccount(_)));
        assert!(err.to_string().starts_with("Invalid \"account\" provided"));
    }

    #[tokio::test]
    async fn test_rejects_amount_below_rent_exemption() {
        let provider = FixedProvider::new();
        let err = build_transfer_transaction(&provider, Some(PAYER), &params("0.0001"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TransferError::BelowRentExemption {
                minimum_balance: 890_880,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            format!("Account may not be rent exempt: {DESTINATION}")
        );
    }

    #[tokio::test]
    async fn test_sub_lamport_amount_below_rent_exemption() {
        let provider = FixedProvider::new();
        let err = build_transfer_transaction(&provider, Some(PAYER), &params("0.0000000001"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::BelowRentExemption { .. }));
        assert!(err.to_string().contains("rent exempt"));
    }

    #[test]
    fn test_below_rent_exemption_is_exact() {
        let amount = |s: &str| s.parse::<Amount>().unwrap();
        assert!(below_rent_exemption(amount("0.000890879"), 890_880));
        assert!(below_rent_exemption(amount("0.0008908799999"), 890_880));
        assert!(!below_rent_exemption(amount("0.00089088"), 890_880));
        assert!(!below_rent_exemption(amount("1"), 890_880));
    }

    #[tokio::test]
    async fn test_accepts_amount_equal_to_rent_exemption() {
        let provider = FixedProvider::new();
        let transfer = build_transfer_transaction(&provider, Some(PAYER), &params("0.00089088"))
            .await
            .unwrap();
        assert_eq!(transfer.lamports, 890_880);
    }

    #[tokio::test]
    async fn test_rejects_sub_lamport_amount() {
        let provider = FixedProvider::new();
        let err = build_transfer_transaction(&provider, Some(PAYER), &params("1.0000000001"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::Amount(_)));
    }

    #[tokio::test]
    async fn test_rpc_failure_is_propagated() {
        let err = build_transfer_transaction(&DownProvider, Some(PAYER), &params("1"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::Chain(_)));
    }
}
