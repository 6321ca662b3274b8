//! Errors raised while binding a client to the nft-voter program.

use anchor_client::ClientError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Construction failure for [`NftVoterClient`](super::instance::NftVoterClient).
///
/// Every variant is surfaced to the caller as-is; nothing is retried.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("malformed interface description: {0}")]
    MalformedIdl(#[from] serde_json::Error),

    #[error("invalid interface description: {0}")]
    InvalidIdl(String),

    #[error("interface description has an invalid program address '{0}'")]
    InvalidProgramId(String),

    #[error("interface description addresses program {found}, expected {expected}")]
    ProgramIdMismatch { expected: Pubkey, found: Pubkey },

    /// Rejection from the program-invocation framework, carried unchanged.
    #[error(transparent)]
    Client(#[from] ClientError),
}
