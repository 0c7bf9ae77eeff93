//! Anchor events emitted for off-chain indexers.

use anchor_lang::prelude::*;

/// Emitted once per `(organizer, name)` when its record and mint are created.
#[event]
pub struct EventCreated {
    /// Event record PDA.
    pub event: Pubkey,
    /// Ticket mint PDA.
    pub token_mint: Pubkey,
    pub organizer: Pubkey,
    pub name: String,
    pub date: String,
}

/// Emitted for every ticket issued.
#[event]
pub struct TicketMinted {
    pub event: Pubkey,
    pub token_mint: Pubkey,
    pub recipient: Pubkey,
    /// Mint supply after this ticket.
    pub supply: u64,
    /// Recipient balance after this ticket.
    pub balance: u64,
}
