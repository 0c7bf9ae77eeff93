//! Deterministic addresses for event records and their ticket mints.
//!
//! Both addresses are derived from the same `(organizer, name)` pair and are
//! kept apart by their domain tag. The bump is the derivation proof: only this
//! program can sign for an address that carries it.

use anchor_lang::prelude::*;

use crate::{
    constants::{EVENT_SEED, MAX_SEED_LEN, TOKEN_MINT_SEED},
    errors::EventError,
};

/// Domain tag separating the two kinds of derived accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedDomain {
    Event,
    TokenMint,
}

impl SeedDomain {
    pub const fn tag(self) -> &'static [u8] {
        match self {
            SeedDomain::Event => EVENT_SEED,
            SeedDomain::TokenMint => TOKEN_MINT_SEED,
        }
    }
}

/// A derived address together with its bump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

/// Rejects names the addressing scheme cannot take as a single seed.
pub fn check_seed(name: &str) -> Result<()> {
    require!(name.len() <= MAX_SEED_LEN, EventError::InvalidSeed);
    Ok(())
}

/// Finds the canonical address for `(domain, organizer, name)`.
pub fn derive(
    domain: SeedDomain,
    organizer: &Pubkey,
    name: &str,
    program_id: &Pubkey,
) -> Result<DerivedAddress> {
    check_seed(name)?;
    let (address, bump) = Pubkey::try_find_program_address(
        &[domain.tag(), organizer.as_ref(), name.as_bytes()],
        program_id,
    )
    .ok_or(EventError::InvalidSeed)?;

    Ok(DerivedAddress { address, bump })
}

pub fn event_address(organizer: &Pubkey, name: &str) -> Result<DerivedAddress> {
    derive(SeedDomain::Event, organizer, name, &crate::ID)
}

pub fn token_mint_address(organizer: &Pubkey, name: &str) -> Result<DerivedAddress> {
    derive(SeedDomain::TokenMint, organizer, name, &crate::ID)
}

/// Recomputes an address from a recorded bump without searching.
///
/// Fails with `InvalidSeed` if the bump does not yield an off-curve address.
pub fn verify(
    domain: SeedDomain,
    organizer: &Pubkey,
    name: &str,
    bump: u8,
    program_id: &Pubkey,
) -> Result<Pubkey> {
    check_seed(name)?;
    Pubkey::create_program_address(
        &[domain.tag(), organizer.as_ref(), name.as_bytes(), &[bump]],
        program_id,
    )
    .map_err(|_| error!(EventError::InvalidSeed))
}
