//! Configuration module for environment variables and provider settings

use std::{ env, path::PathBuf, str::FromStr, sync::Arc };

use anchor_client::{ Client, Cluster };
use anyhow::{ anyhow, Result };
use solana_sdk::{
    commitment_config::{ CommitmentConfig, CommitmentLevel },
    signature::{ read_keypair_file, Keypair },
};

#[derive(Debug, Clone)]
pub struct Config {
    /// Target cluster, by name or RPC URL
    pub cluster: Cluster,

    /// Commitment used by the RPC client
    pub commitment: CommitmentConfig,

    /// Payer keypair file
    pub keypair_path: PathBuf,

    /// Devnet flag handed to `NftVoterClient::connect`
    pub devnet: Option<bool>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self> where F: Fn(&str) -> Option<String> {
        let cluster = lookup("NFT_VOTER_CLUSTER").unwrap_or_else(|| "devnet".to_string());
        let cluster = Cluster::from_str(&cluster).map_err(|e|
            anyhow!("Invalid NFT_VOTER_CLUSTER '{}': {}", cluster, e)
        )?;

        let commitment = lookup("NFT_VOTER_COMMITMENT").unwrap_or_else(|| "confirmed".to_string());
        let commitment = CommitmentLevel::from_str(&commitment).map_err(|e|
            anyhow!("Invalid NFT_VOTER_COMMITMENT '{}': {}", commitment, e)
        )?;

        let keypair_path = match lookup("NFT_VOTER_KEYPAIR") {
            Some(path) => PathBuf::from(path),
            None => {
                let home = lookup("HOME").ok_or_else(||
                    anyhow!("NFT_VOTER_KEYPAIR is not set and HOME is unknown")
                )?;
                PathBuf::from(home).join(".config/solana/id.json")
            }
        };

        let devnet = lookup("NFT_VOTER_DEVNET")
            .map(|value| parse_flag(&value))
            .transpose()?;

        Ok(Self {
            cluster,
            commitment: CommitmentConfig { commitment },
            keypair_path,
            devnet,
        })
    }

    /// Read the payer keypair from `keypair_path`
    pub fn load_payer(&self) -> Result<Keypair> {
        read_keypair_file(&self.keypair_path).map_err(|e|
            anyhow!("Failed to read keypair {}: {}", self.keypair_path.display(), e)
        )
    }

    /// Build the anchor client used as provider
    pub fn provider(&self) -> Result<Client<Arc<Keypair>>> {
        let payer = Arc::new(self.load_payer()?);
        Ok(Client::new_with_options(self.cluster.clone(), payer, self.commitment))
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(anyhow!("Invalid NFT_VOTER_DEVNET '{}': expected true or false", other)),
    }
}
