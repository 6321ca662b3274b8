//! # Onchain Program Instance Module
//!
//! Client-side binding for the nft-voter governance addin deployed on Solana.
//!
//! ## Features
//! - Client construction bound to the fixed nft-voter program id
//! - Bundled IDL with instruction, account and error lookups
//! - PDA derivation for registrar and vote record accounts
//! - Integration with Anchor client through the `ProgramProvider` seam

pub mod error;
pub mod idl;
/// nft-voter client factory
pub mod instance;
pub mod pda;
pub mod provider;
