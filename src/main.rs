//! # nft-voter client
//!
//! Connects to the nft-voter governance addin and reports what the bound
//! client addresses.
//!
//! ## Environment Setup
//! ```bash
//! export NFT_VOTER_CLUSTER=devnet
//! export NFT_VOTER_KEYPAIR=~/.config/solana/id.json
//! export NFT_VOTER_DEVNET=true
//! ```
//! A `.env` file in the working directory is read as well.
//!
//! ## Running
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

use anyhow::{ Context, Result };
use nft_voter_client::{ config::Config, NftVoterClient };
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt, EnvFilter };

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber
        ::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt
                ::layer()
                .with_target(false)
                .compact()
        )
        .init();

    tracing::info!("Package: {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration from environment")?;
    let provider = config.provider()?;

    let client = NftVoterClient::connect(&provider, config.devnet).await?;

    tracing::info!("Cluster: {}", config.cluster.url());
    tracing::info!("Program: {}", client.program_id());
    tracing::info!("Payer: {}", client.program().payer());
    tracing::info!("Devnet: {:?}", client.devnet());

    let idl = client.idl();
    tracing::info!("IDL: {} v{}", idl.name(), idl.metadata.version);
    for ix in &idl.instructions {
        let args: Vec<&str> = ix.args
            .iter()
            .map(|arg| arg.name.as_str())
            .collect();
        tracing::info!("  {}({}) - {} accounts", ix.name, args.join(", "), ix.accounts.len());
    }

    Ok(())
}
