use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

/// Allocates `space` bytes at a PDA and hands it to `owner`.
///
/// An address that already holds lamports cannot go through `create_account`,
/// so it is topped up to the rent-exempt minimum and then allocated and
/// assigned in place. Callers check that the address is unallocated and that
/// the payer can cover `rent.minimum_balance(space)` beforehand.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let required = rent.minimum_balance(space);
    let current = target.lamports();
    let signer = &[signer_seeds];

    if current == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer,
            ),
            required,
            space as u64,
            owner,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer,
        ),
        owner,
    )
}

/// Lamports the payer still has to add so a pre-funded address reaches the
/// rent-exempt minimum.
pub fn rent_due(rent: &Rent, space: usize, current_lamports: u64) -> u64 {
    rent.minimum_balance(space).saturating_sub(current_lamports)
}
