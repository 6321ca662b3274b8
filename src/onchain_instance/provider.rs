//! The provider seam between the client factory and `anchor-client`.

use std::ops::Deref;

use anchor_client::{ Client, ClientError, Program };
use async_trait::async_trait;
use solana_sdk::{ pubkey::Pubkey, signer::Signer };

/// Anything that can hand out a program handle for a given program id.
///
/// `anchor_client::Client` is the production provider. The factory only
/// forwards to it and never inspects the cluster or payer.
#[async_trait]
pub trait ProgramProvider<C>: Send + Sync {
    async fn build_program(&self, program_id: Pubkey) -> Result<Program<C>, ClientError>;
}

#[async_trait]
impl<C, S> ProgramProvider<C> for Client<C>
    where C: Clone + Deref<Target = S> + Send + Sync, S: Signer + Send + Sync + 'static
{
    async fn build_program(&self, program_id: Pubkey) -> Result<Program<C>, ClientError> {
        self.program(program_id)
    }
}
