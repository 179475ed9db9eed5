use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_message::Hash;
use solblink::chain::ChainId;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::networks::SolanaCluster;

/// A recent blockhash together with the last block height at which a
/// transaction referencing it is still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockReference {
    /// Recent blockhash.
    pub blockhash: Hash,
    /// Last block height the blockhash is valid for.
    pub last_valid_block_height: u64,
}

/// Errors raised while talking to a Solana RPC node.
#[derive(Debug, thiserror::Error)]
pub enum SolanaChainProviderError {
    /// The RPC request failed or returned an error.
    #[error("RPC error: {0}")]
    Rpc(String),
}

/// Chain reads needed to build an unsigned transfer.
#[async_trait::async_trait]
pub trait SolanaChainProviderLike: Send + Sync {
    /// Returns the CAIP-2 chain identifier of the cluster.
    fn chain_id(&self) -> ChainId;

    /// Returns the minimum lamport balance for an account with `data_len`
    /// bytes of data to be rent exempt.
    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, SolanaChainProviderError>;

    /// Returns the most recent blockhash.
    async fn latest_block_reference(&self) -> Result<BlockReference, SolanaChainProviderError>;
}

#[async_trait::async_trait]
impl<T: SolanaChainProviderLike + ?Sized> SolanaChainProviderLike for Arc<T> {
    fn chain_id(&self) -> ChainId {
        (**self).chain_id()
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, SolanaChainProviderError> {
        (**self).minimum_balance_for_rent_exemption(data_len).await
    }

    async fn latest_block_reference(&self) -> Result<BlockReference, SolanaChainProviderError> {
        (**self).latest_block_reference().await
    }
}

/// Solana JSON-RPC provider.
///
/// Reads are performed at `finalized` commitment unless configured otherwise.
pub struct SolanaChainProvider {
    cluster: SolanaCluster,
    commitment: CommitmentConfig,
    rpc_client: Arc<RpcClient>,
}

impl Debug for SolanaChainProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaChainProvider")
            .field("cluster", &self.cluster)
            .field("commitment", &self.commitment.commitment)
            .field("rpc_url", &self.rpc_client.url())
            .finish()
    }
}

impl SolanaChainProvider {
    /// Creates a provider talking to `rpc_url`.
    pub fn new<U: Into<String>>(cluster: SolanaCluster, rpc_url: U) -> Self {
        Self::with_commitment(cluster, rpc_url, CommitmentConfig::finalized())
    }

    /// Creates a provider talking to `rpc_url` at the given commitment.
    pub fn with_commitment<U: Into<String>>(
        cluster: SolanaCluster,
        rpc_url: U,
        commitment: CommitmentConfig,
    ) -> Self {
        let rpc_url = rpc_url.into();
        #[cfg(feature = "telemetry")]
        tracing::info!(
            network = %cluster,
            rpc = %rpc_url,
            "Using Solana RPC endpoint"
        );
        let rpc_client = RpcClient::new_with_commitment(rpc_url, commitment);
        Self {
            cluster,
            commitment,
            rpc_client: Arc::new(rpc_client),
        }
    }

    /// Creates a provider talking to the public endpoint of `cluster`.
    #[must_use]
    pub fn for_cluster(cluster: SolanaCluster) -> Self {
        Self::new(cluster, cluster.default_rpc_url())
    }

    /// Returns the RPC endpoint URL.
    #[must_use]
    pub fn rpc_url(&self) -> String {
        self.rpc_client.url()
    }
}

#[async_trait::async_trait]
impl SolanaChainProviderLike for SolanaChainProvider {
    fn chain_id(&self) -> ChainId {
        self.cluster.chain_id()
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, SolanaChainProviderError> {
        self.rpc_client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(|e| SolanaChainProviderError::Rpc(format!("{e}")))
    }

    async fn latest_block_reference(&self) -> Result<BlockReference, SolanaChainProviderError> {
        let (blockhash, last_valid_block_height) = self
            .rpc_client
            .get_latest_blockhash_with_commitment(self.commitment)
            .await
            .map_err(|e| SolanaChainProviderError::Rpc(format!("{e}")))?;
        Ok(BlockReference {
            blockhash,
            last_valid_block_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BLOCKHASH: &str = "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N";

    async fn mount_version(server: &MockServer) {
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "getVersion"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {"solana-core": "2.2.0", "feature-set": 3294202862u32}
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_minimum_balance_for_rent_exemption() {
        let server = MockServer::start().await;
        mount_version(&server).await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "getMinimumBalanceForRentExemption",
                "params": [0]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": 890_880
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = SolanaChainProvider::new(SolanaCluster::Devnet, server.uri());
        let minimum = provider.minimum_balance_for_rent_exemption(0).await.unwrap();
        assert_eq!(minimum, 890_880);
    }

    #[tokio::test]
    async fn test_latest_block_reference() {
        let server = MockServer::start().await;
        mount_version(&server).await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "getLatestBlockhash"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "context": {"slot": 2792},
                    "value": {
                        "blockhash": BLOCKHASH,
                        "lastValidBlockHeight": 3090
                    }
                }
            })))
            .mount(&server)
            .await;

        let provider = SolanaChainProvider::new(SolanaCluster::Devnet, server.uri());
        let block = provider.latest_block_reference().await.unwrap();
        assert_eq!(block.blockhash.to_string(), BLOCKHASH);
        assert_eq!(block.last_valid_block_height, 3090);
    }

    #[tokio::test]
    async fn test_rpc_error_is_reported() {
        let server = MockServer::start().await;
        mount_version(&server).await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "getMinimumBalanceForRentExemption"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32603, "message": "Internal error"}
            })))
            .mount(&server)
            .await;

        let provider = SolanaChainProvider::new(SolanaCluster::Devnet, server.uri());
        let err = provider
            .minimum_balance_for_rent_exemption(0)
            .await
            .unwrap_err();
        assert!(matches!(err, SolanaChainProviderError::Rpc(_)));
    }

    #[tokio::test]
    async fn test_chain_id_follows_cluster() {
        let provider = SolanaChainProvider::for_cluster(SolanaCluster::Testnet);
        assert_eq!(
            provider.chain_id().to_string(),
            "solana:4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z"
        );
        assert_eq!(provider.rpc_url(), "https://api.testnet.solana.com");
    }
}
