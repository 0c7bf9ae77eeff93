use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::token::{initialize_mint2, spl_token, InitializeMint2, Token};

use crate::{
    constants::{EVENT_SEED, TICKET_DECIMALS, TOKEN_MINT_SEED},
    errors::EventError,
    events::EventCreated,
    registry,
    state::Event,
    utils::{create_pda_account, rent_due},
};

/// Contextual accounts required to create a new event.
#[derive(Accounts)]
pub struct CreateEvent<'info> {
    /// The event record, at the PDA of `("event", organizer, name)`.
    /// CHECK: The address is compared with the derivation and must be unallocated
    /// before the handler creates it.
    #[account(mut)]
    pub event: UncheckedAccount<'info>,

    /// The event's ticket mint, at the PDA of `("token_mint", organizer, name)`.
    /// CHECK: Same checks as `event`; initialized as an SPL mint by the handler.
    #[account(mut)]
    pub token_mint: UncheckedAccount<'info>,

    /// The organizer creating the event. Must sign, and pays rent for both accounts.
    #[account(mut, signer @ EventError::Unauthorized)]
    pub organizer: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Addresses of a newly created event, returned to the caller.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreatedEvent {
    pub event: Pubkey,
    pub token_mint: Pubkey,
}

/// Handles the logic for creating a new event.
///
/// Allocates the event record and its ticket mint in one transaction. The mint
/// has 0 decimals, no freeze authority, and is its own mint authority, so only
/// `mint_ticket` can ever raise its supply.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `name` - The event name. Used verbatim as an address seed.
/// * `date` - The event date. Stored as given.
///
/// Returns the event and mint addresses as instruction return data.
///
/// # Errors
///
/// `AlreadyExists` if the organizer already used this name, `Unauthorized` if
/// the organizer did not sign, `InvalidSeed` if the name is too long for a
/// seed, `InsufficientFunds` if the organizer cannot pay rent for both accounts.
pub fn create_event_handler(ctx: Context<CreateEvent>, name: String, date: String) -> Result<CreatedEvent> {
    let accounts = &ctx.accounts;
    let organizer = accounts.organizer.key();

    let new_event = registry::plan_create_event(
        ctx.program_id,
        &organizer,
        accounts.organizer.is_signer,
        &name,
        &date,
        &accounts.event.key(),
        &accounts.token_mint.key(),
    )?;

    registry::ensure_unallocated(accounts.event.owner, accounts.event.data_len())?;
    registry::ensure_unallocated(accounts.token_mint.owner, accounts.token_mint.data_len())?;

    let rent: &Rent = &accounts.rent;
    let mint_space = spl_token::state::Mint::LEN;
    let due = rent_due(rent, Event::SPACE, accounts.event.lamports())
        .checked_add(rent_due(rent, mint_space, accounts.token_mint.lamports()))
        .ok_or(EventError::InsufficientFunds)?;
    registry::ensure_can_fund(rent, accounts.organizer.lamports(), due)?;

    let payer = accounts.organizer.to_account_info();
    let system_program = accounts.system_program.to_account_info();

    let event_bump = [new_event.event.bump];
    let event_seeds: &[&[u8]] = &[EVENT_SEED, organizer.as_ref(), name.as_bytes(), &event_bump];
    create_pda_account(
        &payer,
        &accounts.event.to_account_info(),
        &system_program,
        rent,
        Event::SPACE,
        ctx.program_id,
        event_seeds,
    )?;

    let mint_bump = [new_event.token_mint.bump];
    let mint_seeds: &[&[u8]] = &[TOKEN_MINT_SEED, organizer.as_ref(), name.as_bytes(), &mint_bump];
    create_pda_account(
        &payer,
        &accounts.token_mint.to_account_info(),
        &system_program,
        rent,
        mint_space,
        &accounts.token_program.key(),
        mint_seeds,
    )?;

    // The mint is its own authority.
    let mint_key = accounts.token_mint.key();
    initialize_mint2(
        CpiContext::new(
            accounts.token_program.to_account_info(),
            InitializeMint2 {
                mint: accounts.token_mint.to_account_info(),
            },
        ),
        TICKET_DECIMALS,
        &mint_key,
        None,
    )?;

    {
        let mut data = accounts.event.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        new_event.record.try_serialize(&mut writer)?;
    }

    let created = CreatedEvent {
        event: new_event.event.address,
        token_mint: mint_key,
    };

    msg!("Event created: {} ({})", new_event.record.name, new_event.record.date);
    emit!(EventCreated {
        event: created.event,
        token_mint: created.token_mint,
        organizer,
        name: new_event.record.name,
        date: new_event.record.date,
    });

    Ok(created)
}
