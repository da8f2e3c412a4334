//! Instruction wire format and client-side builders.
//!
//! Every instruction starts with a one byte discriminator; integers are
//! little-endian.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::solana_program::{system_instruction, system_program};
use anchor_spl::token::spl_token;

use crate::constants::{INITIALIZE_IX, INITIALIZE_PAYLOAD_LEN, SWALLOW_IX, SWALLOW_PAYLOAD_LEN};
use crate::errors::ErrorCode;
use crate::pda::{program_authority_address, state_address};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramInstruction {
    /// Creates the global state record.
    ///
    /// Accounts expected:
    /// 0. `[writable]` Global state (PDA: ["state"])
    /// 1. `[signer, writable]` Payer for the rent-exemption deposit
    /// 2. `[]` System program
    Initialize { initial_threshold: u64 },

    /// Burns the custody balance once it reaches the threshold.
    ///
    /// Accounts expected:
    /// 0. `[]` Global state (PDA: ["state"])
    /// 1. `[]` Program authority (PDA: ["program_authority"])
    /// 2. `[writable]` Custody token account owned by the program authority
    /// 3. `[writable]` Token mint
    /// 4. `[]` Token program
    Swallow,
}

impl ProgramInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self> {
        let (&tag, rest) = input
            .split_first()
            .ok_or_else(|| error!(ErrorCode::MalformedPayload))?;

        match tag {
            INITIALIZE_IX => {
                require!(
                    input.len() == INITIALIZE_PAYLOAD_LEN,
                    ErrorCode::MalformedPayload
                );
                let threshold: [u8; 8] = rest
                    .try_into()
                    .map_err(|_| error!(ErrorCode::MalformedPayload))?;
                Ok(Self::Initialize {
                    initial_threshold: u64::from_le_bytes(threshold),
                })
            }
            SWALLOW_IX => {
                require!(
                    input.len() == SWALLOW_PAYLOAD_LEN,
                    ErrorCode::MalformedPayload
                );
                Ok(Self::Swallow)
            }
            _ => err!(ErrorCode::UnknownInstruction),
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::Initialize { initial_threshold } => {
                let mut buf = Vec::with_capacity(INITIALIZE_PAYLOAD_LEN);
                buf.push(INITIALIZE_IX);
                buf.extend_from_slice(&initial_threshold.to_le_bytes());
                buf
            }
            Self::Swallow => vec![SWALLOW_IX],
        }
    }
}

pub fn initialize(program_id: &Pubkey, payer: &Pubkey, initial_threshold: u64) -> Result<Instruction> {
    let (state, _) = state_address(program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(state, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: ProgramInstruction::Initialize { initial_threshold }.pack(),
    })
}

pub fn swallow(program_id: &Pubkey, token_account: &Pubkey, mint: &Pubkey) -> Result<Instruction> {
    let (state, _) = state_address(program_id)?;
    let (authority, _) = program_authority_address(program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(state, false),
            AccountMeta::new_readonly(authority, false),
            AccountMeta::new(*token_account, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(spl_token::ID, false),
        ],
        data: ProgramInstruction::Swallow.pack(),
    })
}

/// Creates a token account for `mint` whose owner is the program authority.
///
/// Both `payer` and `token_account` must sign the transaction. `lamports`
/// should be the rent-exemption minimum for a token account.
pub fn create_custody_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    token_account: &Pubkey,
    mint: &Pubkey,
    lamports: u64,
) -> Result<[Instruction; 2]> {
    let (authority, _) = program_authority_address(program_id)?;

    let create = system_instruction::create_account(
        payer,
        token_account,
        lamports,
        spl_token::state::Account::LEN as u64,
        &spl_token::ID,
    );
    let init = spl_token::instruction::initialize_account(&spl_token::ID, token_account, mint, &authority)?;

    Ok([create, init])
}
