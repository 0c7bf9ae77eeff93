use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::{
    associated_token::{create_idempotent, get_associated_token_address, AssociatedToken, Create},
    token::{mint_to, spl_token, Mint, MintTo, Token, TokenAccount},
};

use crate::{
    constants::TICKETS_PER_MINT,
    errors::EventError,
    events::TicketMinted,
    registry,
    state::Event,
    ticket_mint::TicketMintSigner,
    utils::rent_due,
};

/// Contextual accounts required to mint a ticket for an event.
#[derive(Accounts)]
pub struct MintTicket<'info> {
    /// The event the ticket is for. Owner and layout are checked on load; the
    /// binding to the event name is checked in the handler.
    pub event: Account<'info, Event>,

    /// The event's ticket mint.
    /// CHECK: Pinned to the mint recorded on the event; the token program
    /// validates the mint itself.
    #[account(mut, address = event.token_mint @ EventError::MintMismatch)]
    pub token_mint: UncheckedAccount<'info>,

    /// CHECK: Any wallet can receive a ticket.
    pub recipient: UncheckedAccount<'info>,

    /// The recipient's holding for this mint. Created if it does not exist.
    /// CHECK: Must be the associated token account of `(recipient, token_mint)`.
    #[account(mut)]
    pub recipient_token_account: UncheckedAccount<'info>,

    /// Funds the holding account when it has to be created.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Handles the logic for minting one ticket to a recipient.
///
/// The mint signs for itself through its PDA seeds, so no human authority is
/// involved. Repeated mints to the same recipient accumulate.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `event_name` - Must be the stored name of `event` and re-derive its address.
///
/// # Errors
///
/// `NameMismatch` if `event_name` does not derive the supplied event,
/// `MintMismatch` if the mint is not the event's, `InsufficientFunds` if the
/// payer cannot fund a new holding account.
pub fn mint_ticket_handler(ctx: Context<MintTicket>, event_name: String) -> Result<()> {
    let accounts = &ctx.accounts;
    let event = &accounts.event;
    let event_key = event.key();
    let mint_key = accounts.token_mint.key();
    let recipient = accounts.recipient.key();

    event.authorize_mint(ctx.program_id, &event_key, &event_name, &mint_key)?;

    require_keys_eq!(
        accounts.recipient_token_account.key(),
        get_associated_token_address(&recipient, &mint_key),
        EventError::HoldingMismatch
    );

    if accounts.recipient_token_account.data_is_empty() {
        let rent = Rent::get()?;
        let due = rent_due(
            &rent,
            spl_token::state::Account::LEN,
            accounts.recipient_token_account.lamports(),
        );
        registry::ensure_can_fund(&rent, accounts.payer.lamports(), due)?;

        create_idempotent(CpiContext::new(
            accounts.associated_token_program.to_account_info(),
            Create {
                payer: accounts.payer.to_account_info(),
                associated_token: accounts.recipient_token_account.to_account_info(),
                authority: accounts.recipient.to_account_info(),
                mint: accounts.token_mint.to_account_info(),
                system_program: accounts.system_program.to_account_info(),
                token_program: accounts.token_program.to_account_info(),
            },
        ))?;
    }

    let signer = TicketMintSigner::for_event(event);
    let mint_seeds = signer.seeds();
    let signer_seeds: &[&[&[u8]]] = &[&mint_seeds];

    mint_to(
        CpiContext::new_with_signer(
            accounts.token_program.to_account_info(),
            MintTo {
                mint: accounts.token_mint.to_account_info(),
                to: accounts.recipient_token_account.to_account_info(),
                authority: accounts.token_mint.to_account_info(),
            },
            signer_seeds,
        ),
        TICKETS_PER_MINT,
    )?;

    let supply = {
        let data = accounts.token_mint.try_borrow_data()?;
        Mint::try_deserialize(&mut &data[..])?.supply
    };
    let balance = {
        let data = accounts.recipient_token_account.try_borrow_data()?;
        TokenAccount::try_deserialize(&mut &data[..])?.amount
    };

    msg!(
        "Ticket minted for {}: supply {}, recipient balance {}",
        event.name,
        supply,
        balance
    );
    emit!(TicketMinted {
        event: event_key,
        token_mint: mint_key,
        recipient,
        supply,
        balance,
    });

    Ok(())
}
