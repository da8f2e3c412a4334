// libraries
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

// local
use crate::constants::STATE_SEED;
use crate::errors::ErrorCode;
use crate::pda;
use crate::states::GlobalState;

pub fn handle<'info>(
    program_id: &Pubkey,
    accounts: &[AccountInfo<'info>],
    initial_threshold: u64,
) -> Result<()> {
    let rent = Rent::get()?;
    process(program_id, accounts, initial_threshold, &rent)
}

/// Accounts:
/// 0. `[writable]` Global state (PDA: ["state"])
/// 1. `[signer, writable]` Payer
/// 2. `[]` System program
pub fn process<'info>(
    program_id: &Pubkey,
    accounts: &[AccountInfo<'info>],
    initial_threshold: u64,
    rent: &Rent,
) -> Result<()> {
    let (global_state, payer, system) = match accounts {
        [global_state, payer, system, ..] => (global_state, payer, system),
        _ => return Err(ProgramError::NotEnoughAccountKeys.into()),
    };

    msg!("INITIALIZING GLOBAL STATE");

    let bump = pda::verify_state(program_id, global_state.key)?;
    require!(global_state.is_writable, ErrorCode::StateNotWritable);
    if !payer.is_signer {
        return Err(ProgramError::MissingRequiredSignature.into());
    }
    if *system.key != system_program::ID {
        return Err(ProgramError::IncorrectProgramId.into());
    }

    let state = GlobalState::load(global_state, program_id)?;
    require!(!state.is_initialized, ErrorCode::AlreadyInitialized);

    if global_state.data_is_empty() {
        allocate_state(program_id, global_state, payer, system, bump, rent)?;
    }

    GlobalState::new(initial_threshold).store(global_state)?;

    msg!("threshold {} stored at {}", initial_threshold, global_state.key);
    Ok(())
}

// Same steps as an `init` constraint: create outright, or top up and take
// over an address somebody already sent lamports to.
fn allocate_state<'info>(
    program_id: &Pubkey,
    global_state: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system: &AccountInfo<'info>,
    bump: u8,
    rent: &Rent,
) -> Result<()> {
    let required = rent.minimum_balance(GlobalState::LEN);
    let current = global_state.lamports();
    let shortfall = required.saturating_sub(current);
    require!(payer.lamports() >= shortfall, ErrorCode::InsufficientFunds);

    let bump_seed = [bump];
    let state_signer_seeds: &[&[&[u8]]] = &[&[STATE_SEED, &bump_seed]];

    if current == 0 {
        let cpi_accounts = CreateAccount {
            from: payer.clone(),
            to: global_state.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system.clone(), cpi_accounts, state_signer_seeds);
        return system_program::create_account(cpi_ctx, required, GlobalState::LEN as u64, program_id);
    }

    if shortfall > 0 {
        let cpi_accounts = Transfer {
            from: payer.clone(),
            to: global_state.clone(),
        };
        let cpi_ctx = CpiContext::new(system.clone(), cpi_accounts);
        system_program::transfer(cpi_ctx, shortfall)?;
    }

    let cpi_accounts = Allocate {
        account_to_allocate: global_state.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(system.clone(), cpi_accounts, state_signer_seeds);
    system_program::allocate(cpi_ctx, GlobalState::LEN as u64)?;

    let cpi_accounts = Assign {
        account_to_assign: global_state.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(system.clone(), cpi_accounts, state_signer_seeds);
    system_program::assign(cpi_ctx, program_id)
}
