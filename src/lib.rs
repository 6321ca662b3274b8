//! # nft-voter client
//!
//! Binds the bundled nft-voter IDL and the fixed program address to an
//! `anchor-client` program handle.
//!
//! ```no_run
//! use std::sync::Arc;
//! use anchor_client::{ Client, Cluster };
//! use nft_voter_client::NftVoterClient;
//! use solana_sdk::signature::Keypair;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let provider = Client::new(Cluster::Devnet, Arc::new(Keypair::new()));
//! let client = NftVoterClient::connect(&provider, Some(true)).await?;
//! assert_eq!(client.program().id(), nft_voter_client::NFT_VOTER_ID);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod onchain_instance;

pub use onchain_instance::{
    error::ConnectError,
    idl::InterfaceDescription,
    instance::{ NftVoterClient, NFT_VOTER_ID },
    provider::ProgramProvider,
};
