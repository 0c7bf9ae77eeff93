//! Minting rights for an event's ticket mint.
//!
//! A ticket mint is its own mint authority. No key holds that authority; the
//! program signs for the mint PDA with seeds that only an `Event` record can
//! supply, so every unit of supply passes through `mint_ticket`.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::Mint;

use crate::{
    constants::{TICKET_DECIMALS, TOKEN_MINT_SEED},
    errors::EventError,
    state::Event,
};

/// Signer seeds for an event's ticket mint.
pub struct TicketMintSigner<'a> {
    organizer: Pubkey,
    name: &'a [u8],
    bump: [u8; 1],
}

impl<'a> TicketMintSigner<'a> {
    pub fn for_event(event: &'a Event) -> Self {
        Self {
            organizer: event.organizer,
            name: event.name.as_bytes(),
            bump: [event.mint_bump],
        }
    }

    pub fn seeds(&self) -> [&[u8]; 4] {
        [
            TOKEN_MINT_SEED,
            self.organizer.as_ref(),
            self.name,
            &self.bump,
        ]
    }
}

/// Checks that `mint` has the shape `create_event` gives every ticket mint.
pub fn check_ticket_mint(mint_key: &Pubkey, mint: &Mint) -> Result<()> {
    require!(mint.is_initialized, EventError::InvalidMintState);
    require!(mint.decimals == TICKET_DECIMALS, EventError::InvalidMintState);
    require!(
        mint.mint_authority == COption::Some(*mint_key),
        EventError::InvalidMintState
    );
    require!(mint.freeze_authority.is_none(), EventError::InvalidMintState);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::program_pack::Pack;
    use anchor_spl::token::spl_token;

    use crate::pda;

    fn ticket_mint(authority: COption<Pubkey>, freeze: COption<Pubkey>, decimals: u8) -> Mint {
        let state = spl_token::state::Mint {
            mint_authority: authority,
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: freeze,
        };
        let mut data = vec![0u8; spl_token::state::Mint::LEN];
        spl_token::state::Mint::pack(state, &mut data).unwrap();
        Mint::try_deserialize(&mut data.as_slice()).unwrap()
    }

    fn event() -> Event {
        let organizer = Pubkey::new_from_array([4; 32]);
        let address = pda::event_address(&organizer, "Solana Summer Fest").unwrap();
        let mint = pda::token_mint_address(&organizer, "Solana Summer Fest").unwrap();
        Event {
            name: "Solana Summer Fest".to_string(),
            date: "2025-07-01".to_string(),
            organizer,
            token_mint: mint.address,
            bump: address.bump,
            mint_bump: mint.bump,
        }
    }

    #[test]
    fn test_signer_seeds_rederive_the_mint() {
        let event = event();
        let signer = TicketMintSigner::for_event(&event);
        let address = Pubkey::create_program_address(&signer.seeds(), &crate::ID).unwrap();
        assert_eq!(address, event.token_mint);
    }

    #[test]
    fn test_self_authorized_mint_is_accepted() {
        let key = event().token_mint;
        let mint = ticket_mint(COption::Some(key), COption::None, 0);
        assert!(check_ticket_mint(&key, &mint).is_ok());
    }

    #[test]
    fn test_foreign_authority_is_rejected() {
        let key = event().token_mint;
        let outsider = Pubkey::new_from_array([1; 32]);
        let mint = ticket_mint(COption::Some(outsider), COption::None, 0);
        assert!(check_ticket_mint(&key, &mint).is_err());

        let fixed_supply = ticket_mint(COption::None, COption::None, 0);
        assert!(check_ticket_mint(&key, &fixed_supply).is_err());
    }

    #[test]
    fn test_freezable_or_divisible_mint_is_rejected() {
        let key = event().token_mint;
        let freezable = ticket_mint(COption::Some(key), COption::Some(key), 0);
        assert!(check_ticket_mint(&key, &freezable).is_err());

        let divisible = ticket_mint(COption::Some(key), COption::None, 6);
        assert!(check_ticket_mint(&key, &divisible).is_err());
    }
}
