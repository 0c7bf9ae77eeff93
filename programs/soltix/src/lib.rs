#![allow(unexpected_cfgs)]

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod registry;
pub mod state;
pub mod ticket_mint;
pub mod utils;

#[cfg(not(target_os = "solana"))]
pub mod client;

use anchor_lang::prelude::*;

pub use instructions::*;

declare_id!("96MN7K4ArcwdguXMUmVphVaapp5xFyLzpKTrD8dKohGF");

#[program]
pub mod soltix {
    use super::*;

    /// Creates a new event and its ticket mint.
    ///
    /// This instruction initializes an `Event` account at the PDA of
    /// `("event", organizer, name)` and an SPL mint at the PDA of
    /// `("token_mint", organizer, name)`. The mint has 0 decimals, no freeze
    /// authority, and is its own mint authority. An organizer can use each
    /// name once.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `name` - The name of the event, at most 32 bytes.
    /// * `date` - The date of the event, at most 20 bytes.
    ///
    /// Returns the event and mint addresses.
    pub fn create_event(ctx: Context<CreateEvent>, name: String, date: String) -> Result<CreatedEvent> {
        create_event_handler(ctx, name, date)
    }

    /// Mints one ticket for an event to a recipient.
    ///
    /// This instruction checks that `event_name` re-derives the supplied event
    /// account and that the mint is the event's, creates the recipient's
    /// associated token account if needed, and mints a single token to it.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_name` - The name the event was created with.
    pub fn mint_ticket(ctx: Context<MintTicket>, event_name: String) -> Result<()> {
        mint_ticket_handler(ctx, event_name)
    }
}
