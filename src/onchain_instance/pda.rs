//! PDA derivation for nft-voter accounts.

use solana_sdk::pubkey::Pubkey;

pub const REGISTRAR_SEED: &[u8] = b"registrar";
pub const VOTER_WEIGHT_RECORD_SEED: &[u8] = b"voter-weight-record";
pub const MAX_VOTER_WEIGHT_RECORD_SEED: &[u8] = b"max-voter-weight-record";
pub const NFT_VOTE_RECORD_SEED: &[u8] = b"nft-vote-record";

/// Registrar of a realm's governing token mint
pub fn get_registrar_address(
    program_id: &Pubkey,
    realm: &Pubkey,
    governing_token_mint: &Pubkey
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[REGISTRAR_SEED, realm.as_ref(), governing_token_mint.as_ref()],
        program_id
    )
}

pub fn get_voter_weight_record_address(
    program_id: &Pubkey,
    realm: &Pubkey,
    governing_token_mint: &Pubkey,
    governing_token_owner: &Pubkey
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            VOTER_WEIGHT_RECORD_SEED,
            realm.as_ref(),
            governing_token_mint.as_ref(),
            governing_token_owner.as_ref(),
        ],
        program_id
    )
}

pub fn get_max_voter_weight_record_address(
    program_id: &Pubkey,
    realm: &Pubkey,
    governing_token_mint: &Pubkey
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MAX_VOTER_WEIGHT_RECORD_SEED, realm.as_ref(), governing_token_mint.as_ref()],
        program_id
    )
}

/// Record marking an NFT as already used to vote on `proposal`
pub fn get_nft_vote_record_address(
    program_id: &Pubkey,
    proposal: &Pubkey,
    nft_mint: &Pubkey
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[NFT_VOTE_RECORD_SEED, proposal.as_ref(), nft_mint.as_ref()],
        program_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onchain_instance::instance::NFT_VOTER_ID;

    #[test]
    fn test_addresses_are_off_curve_and_reproducible() {
        let realm = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let (registrar, bump) = get_registrar_address(&NFT_VOTER_ID, &realm, &mint);
        assert!(!registrar.is_on_curve());
        assert_eq!(
            Pubkey::create_program_address(
                &[REGISTRAR_SEED, realm.as_ref(), mint.as_ref(), &[bump]],
                &NFT_VOTER_ID
            ).unwrap(),
            registrar
        );
        assert_eq!(get_registrar_address(&NFT_VOTER_ID, &realm, &mint), (registrar, bump));
    }

    #[test]
    fn test_seeds_separate_account_kinds() {
        let realm = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let registrar = get_registrar_address(&NFT_VOTER_ID, &realm, &mint).0;
        let max_record = get_max_voter_weight_record_address(&NFT_VOTER_ID, &realm, &mint).0;
        let voter_record = get_voter_weight_record_address(&NFT_VOTER_ID, &realm, &mint, &owner).0;

        assert_ne!(registrar, max_record);
        assert_ne!(registrar, voter_record);
        assert_ne!(max_record, voter_record);
    }

    #[test]
    fn test_nft_vote_record_depends_on_proposal_and_mint() {
        let proposal = Pubkey::new_unique();
        let nft_a = Pubkey::new_unique();
        let nft_b = Pubkey::new_unique();

        let record_a = get_nft_vote_record_address(&NFT_VOTER_ID, &proposal, &nft_a).0;
        let record_b = get_nft_vote_record_address(&NFT_VOTER_ID, &proposal, &nft_b).0;
        let other_program = get_nft_vote_record_address(&Pubkey::new_unique(), &proposal, &nft_a).0;

        assert_ne!(record_a, record_b);
        assert_ne!(record_a, other_program);
    }
}
