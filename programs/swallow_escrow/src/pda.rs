//! Program-derived addresses.
//!
//! The program authority never signs with a private key. Whoever supplies it
//! is checked by recomputing the address from its seed and the program id,
//! so these functions are the only trust boundary for custody.

use anchor_lang::prelude::*;

use crate::constants::{MAX_SEED_LEN, PROGRAM_AUTHORITY_SEED, STATE_SEED};
use crate::errors::ErrorCode;

/// Derives the address and bump for a single seed under `program_id`.
pub fn derive(seed: &[u8], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    require!(
        !seed.is_empty() && seed.len() <= MAX_SEED_LEN,
        ErrorCode::InvalidSeed
    );
    Pubkey::try_find_program_address(&[seed], program_id)
        .ok_or_else(|| error!(ErrorCode::InvalidSeed))
}

pub fn state_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(STATE_SEED, program_id)
}

pub fn program_authority_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(PROGRAM_AUTHORITY_SEED, program_id)
}

/// Checks that `supplied` is the global state PDA and returns its bump.
pub fn verify_state(program_id: &Pubkey, supplied: &Pubkey) -> Result<u8> {
    let (expected, bump) = state_address(program_id)?;
    require_keys_eq!(*supplied, expected, ErrorCode::InvalidStateAddress);
    Ok(bump)
}

/// Checks that `supplied` is the program authority PDA and returns its bump.
pub fn verify_program_authority(program_id: &Pubkey, supplied: &Pubkey) -> Result<u8> {
    let (expected, bump) = program_authority_address(program_id)?;
    require_keys_eq!(*supplied, expected, ErrorCode::InvalidAuthorityDerivation);
    Ok(bump)
}
