//! An in-memory ledger that applies `create_event` and `mint_ticket` the way
//! the program and the runtime do: same planning and authorization checks,
//! all-or-nothing commits, rent charged to the payer.

#![allow(dead_code)]

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, spl_token};

use soltix::{
    client::{self, AccountRecord, AccountSnapshot, AccountSource},
    errors::EventError,
    registry,
    state::Event,
    utils::rent_due,
};

pub fn wallet(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn err(code: EventError) -> anchor_lang::error::Error {
    code.into()
}

#[derive(Clone, Debug, Default)]
pub struct TestLedger {
    pub accounts: AccountSnapshot,
    pub rent: Rent,
}

impl TestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn airdrop(&mut self, address: &Pubkey, lamports: u64) {
        let mut record = self.system_account(address);
        record.lamports += lamports;
        self.accounts.insert(*address, record);
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.accounts.account(address).map_or(0, |record| record.lamports)
    }

    pub fn create_event(&mut self, organizer: &Pubkey, name: &str, date: &str) -> Result<(Pubkey, Pubkey)> {
        self.create_event_with_signature(organizer, true, name, date)
    }

    pub fn create_event_with_signature(
        &mut self,
        organizer: &Pubkey,
        signed: bool,
        name: &str,
        date: &str,
    ) -> Result<(Pubkey, Pubkey)> {
        let addresses = client::event_addresses(organizer, name)?;
        let planned = registry::plan_create_event(
            &soltix::ID,
            organizer,
            signed,
            name,
            date,
            &addresses.event.address,
            &addresses.token_mint.address,
        )?;
        let event_address = planned.event.address;
        let mint_address = planned.token_mint.address;

        let event_slot = self.system_account(&event_address);
        let mint_slot = self.system_account(&mint_address);
        registry::ensure_unallocated(&event_slot.owner, event_slot.data.len())?;
        registry::ensure_unallocated(&mint_slot.owner, mint_slot.data.len())?;

        let event_due = rent_due(&self.rent, Event::SPACE, event_slot.lamports);
        let mint_due = rent_due(&self.rent, spl_token::state::Mint::LEN, mint_slot.lamports);
        registry::ensure_can_fund(&self.rent, self.lamports(organizer), event_due + mint_due)?;

        let mut data = Vec::new();
        planned.record.try_serialize(&mut data)?;
        data.resize(Event::SPACE, 0);

        self.debit(organizer, event_due + mint_due);
        self.accounts.insert(
            event_address,
            AccountRecord {
                owner: soltix::ID,
                lamports: event_slot.lamports + event_due,
                data,
            },
        );
        self.accounts.insert(
            mint_address,
            AccountRecord {
                owner: token::ID,
                lamports: mint_slot.lamports + mint_due,
                data: pack_mint(&mint_address, 0),
            },
        );

        Ok((event_address, mint_address))
    }

    pub fn mint_ticket(
        &mut self,
        payer: &Pubkey,
        event_address: &Pubkey,
        mint_address: &Pubkey,
        event_name: &str,
        recipient: &Pubkey,
    ) -> Result<()> {
        // Account loading and constraints run before the handler.
        let event = client::get_event(&self.accounts, event_address)?;
        require_keys_eq!(*mint_address, event.token_mint, EventError::MintMismatch);

        event.authorize_mint(&soltix::ID, event_address, event_name, mint_address)?;

        let holding_address = get_associated_token_address(recipient, mint_address);
        let mut holding = match self.accounts.account(&holding_address) {
            Some(record) if !record.data.is_empty() => record,
            existing => {
                let prefunded = existing.map_or(0, |record| record.lamports);
                let due = rent_due(&self.rent, spl_token::state::Account::LEN, prefunded);
                registry::ensure_can_fund(&self.rent, self.lamports(payer), due)?;
                self.debit(payer, due);
                AccountRecord {
                    owner: token::ID,
                    lamports: prefunded + due,
                    data: pack_holding(recipient, mint_address, 0),
                }
            }
        };

        let mut mint_record = self
            .accounts
            .account(mint_address)
            .ok_or(EventError::NotFound)?;
        let supply = client::decode_mint(&mint_record)?.supply + 1;
        let amount = client::decode_token_account(&holding)?.amount + 1;

        mint_record.data = pack_mint(mint_address, supply);
        holding.data = pack_holding(recipient, mint_address, amount);
        self.accounts.insert(*mint_address, mint_record);
        self.accounts.insert(holding_address, holding);

        Ok(())
    }

    /// A token account outside the program, e.g. a look-alike mint's holding.
    pub fn insert_foreign_mint(&mut self, mint: &Pubkey, authority: &Pubkey, supply: u64) {
        let state = spl_token::state::Mint {
            mint_authority: COption::Some(*authority),
            supply,
            decimals: 0,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        let mut data = vec![0u8; spl_token::state::Mint::LEN];
        spl_token::state::Mint::pack(state, &mut data).unwrap();
        self.accounts.insert(
            *mint,
            AccountRecord {
                owner: token::ID,
                lamports: 1,
                data,
            },
        );
    }

    pub fn insert_holding(&mut self, address: &Pubkey, owner: &Pubkey, mint: &Pubkey, amount: u64) {
        self.accounts.insert(
            *address,
            AccountRecord {
                owner: token::ID,
                lamports: 1,
                data: pack_holding(owner, mint, amount),
            },
        );
    }

    fn system_account(&self, address: &Pubkey) -> AccountRecord {
        self.accounts.account(address).unwrap_or(AccountRecord {
            owner: anchor_lang::system_program::ID,
            lamports: 0,
            data: Vec::new(),
        })
    }

    fn debit(&mut self, address: &Pubkey, lamports: u64) {
        let mut record = self.system_account(address);
        record.lamports -= lamports;
        self.accounts.insert(*address, record);
    }
}

fn pack_mint(mint: &Pubkey, supply: u64) -> Vec<u8> {
    let state = spl_token::state::Mint {
        mint_authority: COption::Some(*mint),
        supply,
        decimals: 0,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(state, &mut data).unwrap();
    data
}

fn pack_holding(owner: &Pubkey, mint: &Pubkey, amount: u64) -> Vec<u8> {
    let state = spl_token::state::Account {
        mint: *mint,
        owner: *owner,
        amount,
        delegate: COption::None,
        state: spl_token::state::AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Account::LEN];
    spl_token::state::Account::pack(state, &mut data).unwrap();
    data
}
