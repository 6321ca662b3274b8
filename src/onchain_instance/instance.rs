use std::sync::Arc;

use anchor_client::Program;
use solana_sdk::pubkey::Pubkey;

use super::{
    error::ConnectError,
    idl::InterfaceDescription,
    pda,
    provider::ProgramProvider,
};

// Program ID of the deployed nft-voter addin
pub const NFT_VOTER_ID: Pubkey = solana_sdk::pubkey!("4MJn3vLQyVhwF77iQ2uF2iSLDE3rWT5mmNw58SDtz79Z");

/// nft-voter program client, bound to [`NFT_VOTER_ID`]
pub struct NftVoterClient<C> {
    program: Program<C>,
    idl: Arc<InterfaceDescription>,
    devnet: Option<bool>,
}

impl<C> NftVoterClient<C> {
    /// Bind a new client using the IDL bundled with this crate.
    ///
    /// The IDL could also be fetched from chain at the program's IDL account;
    /// the bundled copy is used so connecting never touches the network.
    ///
    /// `devnet` is carried through untouched for callers that switch
    /// behaviour on the target network.
    pub async fn connect<P>(provider: &P, devnet: Option<bool>) -> Result<Self, ConnectError>
        where P: ProgramProvider<C> + ?Sized
    {
        let idl = InterfaceDescription::embedded()?;
        Self::connect_with_idl(provider, idl, devnet).await
    }

    /// Bind a new client with an explicit IDL
    pub async fn connect_with_idl<P>(
        provider: &P,
        idl: Arc<InterfaceDescription>,
        devnet: Option<bool>
    ) -> Result<Self, ConnectError>
        where P: ProgramProvider<C> + ?Sized
    {
        if let Some(found) = idl.program_id()? {
            if found != NFT_VOTER_ID {
                return Err(ConnectError::ProgramIdMismatch { expected: NFT_VOTER_ID, found });
            }
        }

        let program = provider.build_program(NFT_VOTER_ID).await?;

        tracing::debug!(
            "Bound {} client to {} (devnet: {:?})",
            idl.name(),
            NFT_VOTER_ID,
            devnet
        );

        Ok(Self { program, idl, devnet })
    }

    /// Underlying anchor program handle
    pub fn program(&self) -> &Program<C> {
        &self.program
    }

    pub fn program_id(&self) -> Pubkey {
        NFT_VOTER_ID
    }

    pub fn devnet(&self) -> Option<bool> {
        self.devnet
    }

    pub fn idl(&self) -> &InterfaceDescription {
        &self.idl
    }

    pub fn registrar_address(&self, realm: &Pubkey, governing_token_mint: &Pubkey) -> Pubkey {
        pda::get_registrar_address(&NFT_VOTER_ID, realm, governing_token_mint).0
    }

    pub fn voter_weight_record_address(
        &self,
        realm: &Pubkey,
        governing_token_mint: &Pubkey,
        governing_token_owner: &Pubkey
    ) -> Pubkey {
        pda::get_voter_weight_record_address(
            &NFT_VOTER_ID,
            realm,
            governing_token_mint,
            governing_token_owner
        ).0
    }

    pub fn max_voter_weight_record_address(
        &self,
        realm: &Pubkey,
        governing_token_mint: &Pubkey
    ) -> Pubkey {
        pda::get_max_voter_weight_record_address(&NFT_VOTER_ID, realm, governing_token_mint).0
    }

    pub fn nft_vote_record_address(&self, proposal: &Pubkey, nft_mint: &Pubkey) -> Pubkey {
        pda::get_nft_vote_record_address(&NFT_VOTER_ID, proposal, nft_mint).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_client::{ Client, ClientError, Cluster };
    use async_trait::async_trait;
    use serde_json::json;
    use solana_sdk::{
        commitment_config::CommitmentConfig,
        signature::{ Keypair, Signer },
    };

    fn localnet_provider() -> (Client<Arc<Keypair>>, Pubkey) {
        let payer = Arc::new(Keypair::new());
        let payer_pubkey = payer.pubkey();
        let client = Client::new_with_options(Cluster::Localnet, payer, CommitmentConfig::processed());
        (client, payer_pubkey)
    }

    struct RejectingProvider;

    #[async_trait]
    impl ProgramProvider<Arc<Keypair>> for RejectingProvider {
        async fn build_program(&self, _program_id: Pubkey) -> Result<Program<Arc<Keypair>>, ClientError> {
            Err(ClientError::AccountNotFound)
        }
    }

    fn idl_for(address: &str) -> Arc<InterfaceDescription> {
        let json = json!({
            "address": address,
            "metadata": { "name": "nft_voter", "version": "0.0.0", "spec": "0.1.0" },
            "instructions": [],
        }).to_string();
        Arc::new(InterfaceDescription::from_json(&json).unwrap())
    }

    #[test]
    fn test_program_id_constant() {
        assert_eq!(NFT_VOTER_ID.to_string(), "4MJn3vLQyVhwF77iQ2uF2iSLDE3rWT5mmNw58SDtz79Z");
    }

    #[tokio::test]
    async fn test_connect_carries_devnet_flag() {
        let (provider, _) = localnet_provider();

        for flag in [Some(true), Some(false), None] {
            let client = NftVoterClient::connect(&provider, flag).await.unwrap();
            assert_eq!(client.devnet(), flag);
            assert_eq!(client.program_id(), NFT_VOTER_ID);
            assert_eq!(client.program().id(), NFT_VOTER_ID);
        }
    }

    #[tokio::test]
    async fn test_connect_uses_provider_payer() {
        let (provider, payer) = localnet_provider();

        let client = NftVoterClient::connect(&provider, None).await.unwrap();

        assert_eq!(client.program().payer(), payer);
        assert_eq!(client.idl().name(), "nft_voter");
    }

    #[tokio::test]
    async fn test_rejection_is_propagated() {
        let result = NftVoterClient::connect(&RejectingProvider, Some(true)).await;

        assert!(matches!(result, Err(ConnectError::Client(ClientError::AccountNotFound))));
    }

    #[tokio::test]
    async fn test_idl_for_other_program_is_rejected() {
        let (provider, _) = localnet_provider();
        let other = Pubkey::new_unique();

        let result = NftVoterClient::connect_with_idl(&provider, idl_for(&other.to_string()), None).await;

        match result {
            Err(ConnectError::ProgramIdMismatch { expected, found }) => {
                assert_eq!(expected, NFT_VOTER_ID);
                assert_eq!(found, other);
            }
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("client built for mismatched IDL"),
        }
    }

    #[tokio::test]
    async fn test_idl_with_invalid_address_is_rejected() {
        let (provider, _) = localnet_provider();

        let result = NftVoterClient::connect_with_idl(&provider, idl_for("xyz"), None).await;

        assert!(matches!(result, Err(ConnectError::InvalidProgramId(_))));
    }

    #[tokio::test]
    async fn test_injected_idl_is_kept() {
        let (provider, _) = localnet_provider();
        let idl = idl_for(&NFT_VOTER_ID.to_string());

        let client = NftVoterClient::connect_with_idl(&provider, idl.clone(), Some(false)).await.unwrap();

        assert!(client.idl().instructions.is_empty());
        assert_eq!(client.idl(), idl.as_ref());
    }

    #[tokio::test]
    async fn test_pda_helpers_use_program_id() {
        let (provider, _) = localnet_provider();
        let client = NftVoterClient::connect(&provider, None).await.unwrap();
        let realm = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let proposal = Pubkey::new_unique();

        assert_eq!(
            client.registrar_address(&realm, &mint),
            pda::get_registrar_address(&NFT_VOTER_ID, &realm, &mint).0
        );
        assert_eq!(
            client.voter_weight_record_address(&realm, &mint, &owner),
            pda::get_voter_weight_record_address(&NFT_VOTER_ID, &realm, &mint, &owner).0
        );
        assert_eq!(
            client.max_voter_weight_record_address(&realm, &mint),
            pda::get_max_voter_weight_record_address(&NFT_VOTER_ID, &realm, &mint).0
        );
        assert_eq!(
            client.nft_vote_record_address(&proposal, &mint),
            pda::get_nft_vote_record_address(&NFT_VOTER_ID, &proposal, &mint).0
        );
    }
}
