//! Seam over the token ledger.
//!
//! The program never moves tokens itself; it decides what to burn and hands
//! that decision to a `TokenLedger`. On chain this is the SPL Token program,
//! reached through a CPI signed with the program authority seeds.

// libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn};

// local
use crate::constants::PROGRAM_AUTHORITY_SEED;
use crate::instructions::swallow::BurnPlan;

pub trait TokenLedger {
    /// Burns `plan.amount` from the custody account, authorized by the
    /// program authority derived with `plan.authority_bump`.
    fn burn(&self, plan: &BurnPlan) -> Result<()>;
}

pub struct SplTokenLedger<'a, 'info> {
    pub token_program: &'a AccountInfo<'info>,
    pub custody: &'a AccountInfo<'info>,
    pub mint: &'a AccountInfo<'info>,
    pub authority: &'a AccountInfo<'info>,
}

impl<'a, 'info> TokenLedger for SplTokenLedger<'a, 'info> {
    fn burn(&self, plan: &BurnPlan) -> Result<()> {
        let bump = [plan.authority_bump];
        let authority_signer_seeds: &[&[&[u8]]] = &[&[PROGRAM_AUTHORITY_SEED, &bump]];

        let cpi_accounts = Burn {
            mint: self.mint.clone(),
            from: self.custody.clone(),
            authority: self.authority.clone(),
        };
        let cpi_program = self.token_program.clone();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, authority_signer_seeds);
        token::burn(cpi_ctx, plan.amount)
    }
}
