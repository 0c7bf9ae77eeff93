use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, sysvar};
use anchor_lang::{system_program, InstructionData};
use anchor_spl::{associated_token, token};

use crate::pda::{self, DerivedAddress};

/// The two addresses every event owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventAddresses {
    pub event: DerivedAddress,
    pub token_mint: DerivedAddress,
}

pub fn event_addresses(organizer: &Pubkey, name: &str) -> Result<EventAddresses> {
    Ok(EventAddresses {
        event: pda::event_address(organizer, name)?,
        token_mint: pda::token_mint_address(organizer, name)?,
    })
}

/// Builds `create_event` for `organizer`, who must sign the transaction.
pub fn create_event_instruction(organizer: &Pubkey, name: &str, date: &str) -> Result<Instruction> {
    let addresses = event_addresses(organizer, name)?;

    Ok(Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::CreateEvent {
            event: addresses.event.address,
            token_mint: addresses.token_mint.address,
            organizer: *organizer,
            token_program: token::ID,
            system_program: system_program::ID,
            rent: sysvar::rent::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::CreateEvent {
            name: name.to_string(),
            date: date.to_string(),
        }
        .data(),
    })
}

/// Builds `mint_ticket` for the event `(organizer, name)`, paid by `payer`.
pub fn mint_ticket_instruction(
    payer: &Pubkey,
    organizer: &Pubkey,
    name: &str,
    recipient: &Pubkey,
) -> Result<Instruction> {
    let addresses = event_addresses(organizer, name)?;
    let mint = addresses.token_mint.address;

    Ok(Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::MintTicket {
            event: addresses.event.address,
            token_mint: mint,
            recipient: *recipient,
            recipient_token_account: associated_token::get_associated_token_address(recipient, &mint),
            payer: *payer,
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::MintTicket {
            event_name: name.to_string(),
        }
        .data(),
    })
}
