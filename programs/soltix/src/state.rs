use anchor_lang::prelude::*;

use crate::{
    constants::DISCRIMINATOR_LENGTH,
    errors::EventError,
    pda::{self, SeedDomain},
};

/// One ticketed event, stored at the PDA of `("event", organizer, name)`.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Event {
    #[max_len(32)]
    pub name: String,
    #[max_len(20)]
    pub date: String,
    pub organizer: Pubkey,
    /// The mint at `("token_mint", organizer, name)`.
    pub token_mint: Pubkey,
    pub bump: u8,
    pub mint_bump: u8,
}

impl Event {
    pub const SPACE: usize = DISCRIMINATOR_LENGTH + Event::INIT_SPACE;

    /// Checks that a mint request is bound to this record.
    ///
    /// `event_name` must equal the stored name and, together with the stored
    /// organizer and bump, re-derive `event_key`. A caller cannot pair one
    /// event's account with another event's name. The mint must be the one
    /// recorded at creation.
    pub fn authorize_mint(
        &self,
        program_id: &Pubkey,
        event_key: &Pubkey,
        event_name: &str,
        mint_key: &Pubkey,
    ) -> Result<()> {
        require!(
            event_name.as_bytes() == self.name.as_bytes(),
            EventError::NameMismatch
        );
        let derived = pda::verify(
            SeedDomain::Event,
            &self.organizer,
            event_name,
            self.bump,
            program_id,
        )
        .map_err(|_| error!(EventError::NameMismatch))?;
        require_keys_eq!(derived, *event_key, EventError::NameMismatch);
        require_keys_eq!(*mint_key, self.token_mint, EventError::MintMismatch);

        Ok(())
    }
}
