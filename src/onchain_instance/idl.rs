//! Interface description (IDL) of the nft-voter program.
//!
//! The IDL is bundled into the binary at build time and parsed on first use.
//! Only the parts a client needs to look things up are modelled; argument and
//! type layouts are kept as raw JSON.

use std::{ collections::HashSet, str::FromStr, sync::Arc };

use once_cell::sync::OnceCell;
use serde::{ Deserialize, Serialize };
use solana_sdk::pubkey::Pubkey;

use super::error::ConnectError;

/// The nft-voter IDL as generated by `anchor build`
pub const NFT_VOTER_IDL_JSON: &str = include_str!("../../idls/nft_voter.json");

static EMBEDDED_IDL: OnceCell<Arc<InterfaceDescription>> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDescription {
    /// Program address, absent in IDLs generated before Anchor 0.30
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub metadata: IdlMetadata,
    pub instructions: Vec<IdlInstruction>,
    #[serde(default)]
    pub accounts: Vec<IdlAccount>,
    #[serde(default)]
    pub errors: Vec<IdlErrorCode>,
    #[serde(default)]
    pub types: Vec<IdlTypeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlMetadata {
    pub name: String,
    pub version: String,
    pub spec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
    pub discriminator: Vec<u8>,
    pub accounts: Vec<IdlInstructionAccount>,
    pub args: Vec<IdlField>,
}

/// An account slot of an instruction. Composite slots carry nested `accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlInstructionAccount {
    pub name: String,
    #[serde(default)]
    pub writable: bool,
    #[serde(default)]
    pub signer: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<IdlInstructionAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlAccount {
    pub name: String,
    pub discriminator: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlErrorCode {
    pub code: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlTypeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

impl InterfaceDescription {
    /// Parse and validate an IDL document
    pub fn from_json(json: &str) -> Result<Self, ConnectError> {
        let idl: Self = serde_json::from_str(json)?;
        idl.validate()?;
        Ok(idl)
    }

    /// The bundled nft-voter IDL, parsed once and shared by every client.
    ///
    /// A parse failure is returned to the caller and not cached.
    pub fn embedded() -> Result<Arc<Self>, ConnectError> {
        EMBEDDED_IDL.get_or_try_init(|| -> Result<Arc<Self>, ConnectError> {
            let idl = Self::from_json(NFT_VOTER_IDL_JSON)?;
            tracing::debug!(
                "Loaded embedded IDL {} v{} ({} instructions)",
                idl.metadata.name,
                idl.metadata.version,
                idl.instructions.len()
            );
            Ok(Arc::new(idl))
        }).cloned()
    }

    fn validate(&self) -> Result<(), ConnectError> {
        if self.metadata.name.trim().is_empty() {
            return Err(ConnectError::InvalidIdl("program name is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for ix in &self.instructions {
            if ix.discriminator.is_empty() {
                return Err(
                    ConnectError::InvalidIdl(format!("instruction '{}' has no discriminator", ix.name))
                );
            }
            if !seen.insert(ix.name.as_str()) {
                return Err(ConnectError::InvalidIdl(format!("duplicate instruction '{}'", ix.name)));
            }
        }

        let mut seen = HashSet::new();
        for account in &self.accounts {
            if account.discriminator.is_empty() {
                return Err(
                    ConnectError::InvalidIdl(format!("account '{}' has no discriminator", account.name))
                );
            }
            if !seen.insert(account.name.as_str()) {
                return Err(ConnectError::InvalidIdl(format!("duplicate account '{}'", account.name)));
            }
        }

        let mut codes = HashSet::new();
        for error in &self.errors {
            if !codes.insert(error.code) {
                return Err(ConnectError::InvalidIdl(format!("duplicate error code {}", error.code)));
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Program address declared by the IDL, if any
    pub fn program_id(&self) -> Result<Option<Pubkey>, ConnectError> {
        self.address
            .as_deref()
            .map(|address| {
                Pubkey::from_str(address).map_err(|_| ConnectError::InvalidProgramId(address.to_string()))
            })
            .transpose()
    }

    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|ix| ix.name == name)
    }

    /// Find the instruction whose discriminator prefixes `data`
    pub fn instruction_by_discriminator(&self, data: &[u8]) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|ix| data.starts_with(&ix.discriminator))
    }

    pub fn account(&self, name: &str) -> Option<&IdlAccount> {
        self.accounts.iter().find(|account| account.name == name)
    }

    /// Find the account type whose discriminator prefixes raw account `data`
    pub fn account_by_discriminator(&self, data: &[u8]) -> Option<&IdlAccount> {
        self.accounts.iter().find(|account| data.starts_with(&account.discriminator))
    }

    /// Resolve a custom program error code (6000 and up for Anchor programs)
    pub fn error(&self, code: u32) -> Option<&IdlErrorCode> {
        self.errors.iter().find(|e| e.code == code)
    }
}
