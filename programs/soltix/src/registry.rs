//! Event registry entries and their one-way lifecycle.
//!
//! An `(organizer, name)` pair is `Unallocated` until `create_event` writes
//! its record and mint, and `Active` from then on. There is no way back.

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_DATE_LEN,
    errors::EventError,
    pda::{self, DerivedAddress, SeedDomain},
    state::Event,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Unallocated,
    Active,
}

impl Lifecycle {
    /// An address is free while the system program owns it and it holds no data.
    ///
    /// Lamports alone do not allocate an address; anyone can transfer to it.
    pub fn of(owner: &Pubkey, data_len: usize) -> Self {
        if *owner == anchor_lang::system_program::ID && data_len == 0 {
            Lifecycle::Unallocated
        } else {
            Lifecycle::Active
        }
    }
}

pub fn ensure_unallocated(owner: &Pubkey, data_len: usize) -> Result<()> {
    require!(
        Lifecycle::of(owner, data_len) == Lifecycle::Unallocated,
        EventError::AlreadyExists
    );
    Ok(())
}

/// The payer must cover `required` and either be emptied by it or keep a
/// rent-exempt balance afterwards. The runtime rejects anything in between.
pub fn ensure_can_fund(rent: &Rent, available: u64, required: u64) -> Result<()> {
    let floor = required.saturating_add(rent.minimum_balance(0));
    require!(
        available == required || available >= floor,
        EventError::InsufficientFunds
    );
    Ok(())
}

/// What `create_event` will write, and where.
#[derive(Debug)]
pub struct NewEvent {
    pub record: Event,
    pub event: DerivedAddress,
    pub token_mint: DerivedAddress,
}

/// Validates a create request and binds it to its derived addresses.
pub fn plan_create_event(
    program_id: &Pubkey,
    organizer: &Pubkey,
    organizer_signed: bool,
    name: &str,
    date: &str,
    supplied_event: &Pubkey,
    supplied_mint: &Pubkey,
) -> Result<NewEvent> {
    require!(organizer_signed, EventError::Unauthorized);
    require!(!name.is_empty(), EventError::NameEmpty);
    pda::check_seed(name)?;
    require!(date.len() <= MAX_DATE_LEN, EventError::DateTooLong);

    let event = pda::derive(SeedDomain::Event, organizer, name, program_id)?;
    let token_mint = pda::derive(SeedDomain::TokenMint, organizer, name, program_id)?;
    require_keys_eq!(*supplied_event, event.address, EventError::AddressMismatch);
    require_keys_eq!(*supplied_mint, token_mint.address, EventError::AddressMismatch);

    Ok(NewEvent {
        record: Event {
            name: name.to_string(),
            date: date.to_string(),
            organizer: *organizer,
            token_mint: token_mint.address,
            bump: event.bump,
            mint_bump: token_mint.bump,
        },
        event,
        token_mint,
    })
}
