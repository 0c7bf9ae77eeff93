//! Read-only queries over fetched account data.
//!
//! Every account is checked against its owning program and layout before it
//! is trusted. A ticket balance only means something once its mint has been
//! matched to a genuine event record; `verify_ticket` and `tickets_held_by` do
//! that cross-check, `has_valid_ticket` does not.

use std::collections::{BTreeMap, HashMap};

use anchor_lang::error::ErrorCode as AnchorErrorCode;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::get_associated_token_address,
    token::{self, Mint, TokenAccount},
};

use crate::{
    errors::EventError,
    pda::{self, SeedDomain},
    state::Event,
    ticket_mint::check_ticket_mint,
};

/// Raw account state as returned by an RPC node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRecord {
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
}

/// Storage interface the queries read from.
pub trait AccountSource {
    fn account(&self, address: &Pubkey) -> Option<AccountRecord>;

    /// All accounts owned by `program_id`, in no particular order.
    fn program_accounts(&self, program_id: &Pubkey) -> Vec<(Pubkey, AccountRecord)>;

    /// Token accounts whose token owner is `wallet`.
    fn token_accounts_by_owner(&self, wallet: &Pubkey) -> Vec<(Pubkey, TokenAccount)> {
        self.program_accounts(&token::ID)
            .into_iter()
            .filter_map(|(address, record)| {
                decode_token_account(&record)
                    .ok()
                    .filter(|holding| holding.owner == *wallet)
                    .map(|holding| (address, holding))
            })
            .collect()
    }
}

/// An in-memory account set, e.g. the result of one round of fetches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountSnapshot {
    accounts: BTreeMap<Pubkey, AccountRecord>,
}

impl AccountSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: Pubkey, record: AccountRecord) -> Option<AccountRecord> {
        self.accounts.insert(address, record)
    }
}

impl AccountSource for AccountSnapshot {
    fn account(&self, address: &Pubkey) -> Option<AccountRecord> {
        self.accounts.get(address).cloned()
    }

    fn program_accounts(&self, program_id: &Pubkey) -> Vec<(Pubkey, AccountRecord)> {
        self.accounts
            .iter()
            .filter(|(_, record)| record.owner == *program_id)
            .map(|(address, record)| (*address, record.clone()))
            .collect()
    }
}

pub fn decode_event(record: &AccountRecord) -> Result<Event> {
    require_keys_eq!(record.owner, crate::ID, AnchorErrorCode::AccountOwnedByWrongProgram);
    Event::try_deserialize(&mut record.data.as_slice())
}

pub fn decode_mint(record: &AccountRecord) -> Result<Mint> {
    require_keys_eq!(record.owner, token::ID, AnchorErrorCode::AccountOwnedByWrongProgram);
    Mint::try_deserialize(&mut record.data.as_slice())
}

pub fn decode_token_account(record: &AccountRecord) -> Result<TokenAccount> {
    require_keys_eq!(record.owner, token::ID, AnchorErrorCode::AccountOwnedByWrongProgram);
    TokenAccount::try_deserialize(&mut record.data.as_slice())
}

/// Every event record held by the program.
///
/// Accounts that fail the layout check are skipped. Each call reads the source
/// again, so the sequence can be restarted at will.
pub fn list_events<S: AccountSource + ?Sized>(source: &S) -> impl Iterator<Item = (Pubkey, Event)> {
    source
        .program_accounts(&crate::ID)
        .into_iter()
        .filter_map(|(address, record)| decode_event(&record).ok().map(|event| (address, event)))
}

pub fn get_event<S: AccountSource + ?Sized>(source: &S, address: &Pubkey) -> Result<Event> {
    let record = source.account(address).ok_or(EventError::NotFound)?;
    decode_event(&record)
}

pub fn events_by_organizer<S: AccountSource + ?Sized>(
    source: &S,
    organizer: &Pubkey,
) -> Vec<(Pubkey, Event)> {
    list_events(source)
        .filter(|(_, event)| event.organizer == *organizer)
        .collect()
}

/// Balance of the `(owner, mint)` associated token account, 0 when absent.
pub fn holding_balance<S: AccountSource + ?Sized>(source: &S, owner: &Pubkey, mint: &Pubkey) -> u64 {
    source
        .account(&get_associated_token_address(owner, mint))
        .and_then(|record| decode_token_account(&record).ok())
        .filter(|holding| holding.owner == *owner && holding.mint == *mint)
        .map_or(0, |holding| holding.amount)
}

pub fn ticket_supply<S: AccountSource + ?Sized>(source: &S, mint: &Pubkey) -> Result<u64> {
    let record = source.account(mint).ok_or(EventError::NotFound)?;
    Ok(decode_mint(&record)?.supply)
}

/// Whether `wallet` holds at least one unit of `mint` in any token account.
///
/// This says nothing about whether `mint` belongs to a real event.
pub fn has_valid_ticket<S: AccountSource + ?Sized>(source: &S, wallet: &Pubkey, mint: &Pubkey) -> bool {
    source
        .token_accounts_by_owner(wallet)
        .iter()
        .any(|(_, holding)| holding.mint == *mint && holding.amount > 0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Valid { balance: u64 },
    NotHeld,
}

/// Checks a wallet's tickets for the event at `event_address`.
///
/// The event's recorded mint must be the one derived from its organizer and
/// name, and must still be a self-authorized ticket mint, before any balance
/// is counted.
pub fn verify_ticket<S: AccountSource + ?Sized>(
    source: &S,
    wallet: &Pubkey,
    event_address: &Pubkey,
) -> Result<Verification> {
    let event = get_event(source, event_address)?;

    let derived_event = pda::verify(
        SeedDomain::Event,
        &event.organizer,
        &event.name,
        event.bump,
        &crate::ID,
    )?;
    require_keys_eq!(derived_event, *event_address, EventError::NameMismatch);

    let expected_mint = pda::token_mint_address(&event.organizer, &event.name)?;
    require_keys_eq!(event.token_mint, expected_mint.address, EventError::MintMismatch);

    let mint_record = source.account(&event.token_mint).ok_or(EventError::NotFound)?;
    check_ticket_mint(&event.token_mint, &decode_mint(&mint_record)?)?;

    let balance = source
        .token_accounts_by_owner(wallet)
        .iter()
        .filter(|(_, holding)| holding.mint == event.token_mint)
        .fold(0u64, |total, (_, holding)| total.saturating_add(holding.amount));

    Ok(if balance > 0 {
        Verification::Valid { balance }
    } else {
        Verification::NotHeld
    })
}

/// A wallet's tickets for one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeldTicket {
    pub event_address: Pubkey,
    pub event: Event,
    pub balance: u64,
}

/// All tickets `wallet` holds for events on record. Tokens of unknown mints
/// are ignored.
pub fn tickets_held_by<S: AccountSource + ?Sized>(source: &S, wallet: &Pubkey) -> Vec<HeldTicket> {
    let mut balances: HashMap<Pubkey, u64> = HashMap::new();
    for (_, holding) in source.token_accounts_by_owner(wallet) {
        let total = balances.entry(holding.mint).or_default();
        *total = total.saturating_add(holding.amount);
    }

    list_events(source)
        .filter_map(|(event_address, event)| {
            let balance = balances.get(&event.token_mint).copied().unwrap_or(0);
            (balance > 0).then_some(HeldTicket {
                event_address,
                event,
                balance,
            })
        })
        .collect()
}
