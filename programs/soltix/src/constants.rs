use anchor_lang::prelude::*;

/// The length of the discriminator for an Anchor account.
pub const DISCRIMINATOR_LENGTH: usize = 8;

/// Seed for the event record PDA.
#[constant]
pub const EVENT_SEED: &[u8] = b"event";

/// Seed for the event's ticket mint PDA.
#[constant]
pub const TOKEN_MINT_SEED: &[u8] = b"token_mint";

/// Longest single seed the address derivation accepts.
pub const MAX_SEED_LEN: usize = 32;

pub const MAX_DATE_LEN: usize = 20;

/// Tickets are indivisible.
pub const TICKET_DECIMALS: u8 = 0;

/// Units issued by a single `mint_ticket`.
pub const TICKETS_PER_MINT: u64 = 1;
