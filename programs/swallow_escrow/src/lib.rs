// libraries
use anchor_lang::prelude::*;
use anchor_lang::solana_program::entrypoint::ProgramResult;

//local imports
pub mod constants;
pub mod errors;
pub mod instruction;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod states;

// crates
use crate::instruction::ProgramInstruction;
use crate::instructions::{initialize, swallow};

#[cfg(feature = "dev")]
declare_id!("51vp1cRKX3M5iDkyYvkLdzzEyTHfsoGQqQWxsZaEn1H5");

#[cfg(not(feature = "dev"))]
declare_id!("5EKeDsDiQ7ziUmBuTwYSQV5nvToVHfiJ8TSQwTcXJ1uX");

#[cfg(not(feature = "no-entrypoint"))]
anchor_lang::solana_program::entrypoint!(process_instruction);

/**
 * Program entrypoint
 *
 * The first byte of the instruction data picks the handler:
 * 0 => initialize, 1 => swallow. Anything else fails closed.
 */
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    dispatch(program_id, accounts, instruction_data).map_err(|e| {
        e.log();
        e.into()
    })
}

fn dispatch(program_id: &Pubkey, accounts: &[AccountInfo], instruction_data: &[u8]) -> Result<()> {
    match ProgramInstruction::unpack(instruction_data)? {
        // Create the global state account holding the burn threshold.
        // Can only succeed once per program.
        ProgramInstruction::Initialize { initial_threshold } => {
            #[cfg(not(feature = "no-log-ix-name"))]
            msg!("Instruction: Initialize");
            initialize::handle(program_id, accounts, initial_threshold)
        }

        // Burn the custody balance held by the program authority.
        // Anyone may call it once the balance reaches the threshold.
        ProgramInstruction::Swallow => {
            #[cfg(not(feature = "no-log-ix-name"))]
            msg!("Instruction: Swallow");
            swallow::handle(program_id, accounts)
        }
    }
}
