//libraries
use anchor_lang::prelude::*;
use anchor_spl::token::{self, spl_token, Mint, TokenAccount};

//local imports
use crate::errors::ErrorCode;
use crate::ledger::{SplTokenLedger, TokenLedger};
use crate::pda;
use crate::states::GlobalState;

/// How much of the custody balance a successful swallow destroys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnPolicy {
    /// Burn everything in custody
    WholeBalance,
    /// Burn exactly `threshold`, leaving any excess in custody
    Threshold,
}

impl BurnPolicy {
    /// Policy compiled into this build (`burn-threshold` feature).
    pub const fn configured() -> Self {
        if cfg!(feature = "burn-threshold") {
            BurnPolicy::Threshold
        } else {
            BurnPolicy::WholeBalance
        }
    }

    pub fn amount(self, balance: u64, threshold: u64) -> u64 {
        match self {
            BurnPolicy::WholeBalance => balance,
            BurnPolicy::Threshold => threshold,
        }
    }
}

/// Outcome of validation; nothing has been mutated when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnPlan {
    pub amount: u64,
    pub authority_bump: u8,
    /// Mint supply once the burn lands
    pub supply_after: u64,
}

/// Gate that needs no token account: the program is initialized and
/// `authority` is the canonical program authority. Returns its bump.
pub fn authorize(program_id: &Pubkey, state: &GlobalState, authority: &Pubkey) -> Result<u8> {
    require!(state.is_initialized, ErrorCode::NotInitialized);
    pda::verify_program_authority(program_id, authority)
}

/// Custody checks that follow `authorize`, then the burn amount.
pub fn check_custody(
    state: &GlobalState,
    authority: &Pubkey,
    authority_bump: u8,
    custody: &spl_token::state::Account,
    mint: &Pubkey,
    supply: u64,
    policy: BurnPolicy,
) -> Result<BurnPlan> {
    require_keys_eq!(custody.owner, *authority, ErrorCode::InvalidAccountOwner);
    require_keys_eq!(custody.mint, *mint, ErrorCode::MintMismatch);
    require!(custody.amount >= state.threshold, ErrorCode::BelowThreshold);

    let amount = policy.amount(custody.amount, state.threshold);
    let supply_after = supply
        .checked_sub(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    Ok(BurnPlan {
        amount,
        authority_bump,
        supply_after,
    })
}

/// Checks every custody invariant in order and decides what to burn.
pub fn plan(
    program_id: &Pubkey,
    state: &GlobalState,
    authority: &Pubkey,
    custody: &spl_token::state::Account,
    mint: &Pubkey,
    supply: u64,
    policy: BurnPolicy,
) -> Result<BurnPlan> {
    let authority_bump = authorize(program_id, state, authority)?;
    check_custody(state, authority, authority_bump, custody, mint, supply, policy)
}

/// Accounts:
/// 0. `[]` Global state (PDA: ["state"])
/// 1. `[]` Program authority (PDA: ["program_authority"])
/// 2. `[writable]` Custody token account
/// 3. `[writable]` Mint
/// 4. `[]` Token program
pub struct SwallowAccounts<'a, 'info> {
    pub global_state: &'a AccountInfo<'info>,
    pub authority: &'a AccountInfo<'info>,
    pub custody: &'a AccountInfo<'info>,
    pub mint: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> SwallowAccounts<'a, 'info> {
    /// Trailing accounts are ignored.
    pub fn from_slice(accounts: &'a [AccountInfo<'info>]) -> Result<Self> {
        match accounts {
            [global_state, authority, custody, mint, token_program, ..] => Ok(Self {
                global_state,
                authority,
                custody,
                mint,
                token_program,
            }),
            _ => Err(ProgramError::NotEnoughAccountKeys.into()),
        }
    }

    pub fn ledger(&self) -> SplTokenLedger<'a, 'info> {
        SplTokenLedger {
            token_program: self.token_program,
            custody: self.custody,
            mint: self.mint,
            authority: self.authority,
        }
    }
}

pub fn handle<'info>(program_id: &Pubkey, accounts: &[AccountInfo<'info>]) -> Result<()> {
    let accounts = SwallowAccounts::from_slice(accounts)?;
    let ledger = accounts.ledger();
    process(program_id, &accounts, BurnPolicy::configured(), &ledger)?;
    Ok(())
}

pub fn process<L: TokenLedger>(
    program_id: &Pubkey,
    accounts: &SwallowAccounts,
    policy: BurnPolicy,
    ledger: &L,
) -> Result<BurnPlan> {
    if *accounts.token_program.key != token::ID {
        return Err(ProgramError::IncorrectProgramId.into());
    }

    pda::verify_state(program_id, accounts.global_state.key)?;
    let state = GlobalState::load(accounts.global_state, program_id)?;
    // before any token account is deserialized
    let authority_bump = authorize(program_id, &state, accounts.authority.key)?;

    let custody_account = Account::<TokenAccount>::try_from(accounts.custody)?;
    let mint_account = Account::<Mint>::try_from(accounts.mint)?;

    let plan = check_custody(
        &state,
        accounts.authority.key,
        authority_bump,
        &custody_account,
        accounts.mint.key,
        mint_account.supply,
        policy,
    )?;

    msg!(
        "SWALLOWING {} (balance {}, threshold {})",
        plan.amount,
        custody_account.amount,
        state.threshold
    );
    ledger.burn(&plan)?;
    msg!("remaining supply {}", plan.supply_after);

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::program_option::COption;
    use spl_token::state::AccountState;

    const THRESHOLD: u64 = 1_000_000;

    fn code(e: ErrorCode) -> ProgramError {
        ProgramError::Custom(e.into())
    }

    struct Fixture {
        program_id: Pubkey,
        authority: Pubkey,
        mint: Pubkey,
        state: GlobalState,
        custody: spl_token::state::Account,
    }

    impl Fixture {
        fn new(balance: u64) -> Self {
            let program_id = Pubkey::new_unique();
            let (authority, _) = pda::program_authority_address(&program_id).unwrap();
            let mint = Pubkey::new_unique();
            let custody = spl_token::state::Account {
                mint,
                owner: authority,
                amount: balance,
                delegate: COption::None,
                state: AccountState::Initialized,
                is_native: COption::None,
                delegated_amount: 0,
                close_authority: COption::None,
            };
            Self {
                program_id,
                authority,
                mint,
                state: GlobalState::new(THRESHOLD),
                custody,
            }
        }

        fn plan(&self, supply: u64, policy: BurnPolicy) -> Result<BurnPlan> {
            plan(
                &self.program_id,
                &self.state,
                &self.authority,
                &self.custody,
                &self.mint,
                supply,
                policy,
            )
        }

        fn plan_err(&self) -> ProgramError {
            self.plan(u64::MAX, BurnPolicy::WholeBalance)
                .unwrap_err()
                .into()
        }
    }

    #[test]
    fn burns_whole_balance_at_threshold() {
        let fixture = Fixture::new(THRESHOLD);
        let plan = fixture.plan(2_000_000, BurnPolicy::WholeBalance).unwrap();

        let (_, bump) = pda::program_authority_address(&fixture.program_id).unwrap();
        assert_eq!(
            plan,
            BurnPlan {
                amount: THRESHOLD,
                authority_bump: bump,
                supply_after: 1_000_000,
            }
        );
    }

    #[test]
    fn burns_whole_balance_above_threshold() {
        let fixture = Fixture::new(THRESHOLD + 250);
        let plan = fixture.plan(THRESHOLD * 3, BurnPolicy::WholeBalance).unwrap();
        assert_eq!(plan.amount, THRESHOLD + 250);
        assert_eq!(plan.supply_after, THRESHOLD * 2 - 250);
    }

    #[test]
    fn threshold_policy_leaves_excess() {
        let fixture = Fixture::new(THRESHOLD + 250);
        let plan = fixture.plan(THRESHOLD * 3, BurnPolicy::Threshold).unwrap();
        assert_eq!(plan.amount, THRESHOLD);
        assert_eq!(plan.supply_after, THRESHOLD * 2);
    }

    #[test]
    fn configured_policy_follows_feature() {
        let expected = if cfg!(feature = "burn-threshold") {
            BurnPolicy::Threshold
        } else {
            BurnPolicy::WholeBalance
        };
        assert_eq!(BurnPolicy::configured(), expected);
    }

    #[test]
    fn below_threshold() {
        let fixture = Fixture::new(500_000);
        assert_eq!(fixture.plan_err(), code(ErrorCode::BelowThreshold));

        let fixture = Fixture::new(THRESHOLD - 1);
        assert_eq!(fixture.plan_err(), code(ErrorCode::BelowThreshold));
    }

    #[test]
    fn zero_threshold_admits_empty_custody() {
        let mut fixture = Fixture::new(0);
        fixture.state = GlobalState::new(0);
        let plan = fixture.plan(10, BurnPolicy::WholeBalance).unwrap();
        assert_eq!(plan.amount, 0);
        assert_eq!(plan.supply_after, 10);
    }

    #[test]
    fn uninitialized_state() {
        let mut fixture = Fixture::new(THRESHOLD);
        fixture.state = GlobalState::default();
        assert_eq!(fixture.plan_err(), code(ErrorCode::NotInitialized));
    }

    #[test]
    fn spoofed_authority() {
        let mut fixture = Fixture::new(THRESHOLD);
        let spoof = Pubkey::new_unique();
        fixture.authority = spoof;
        // even a custody account that names the spoof as owner
        fixture.custody.owner = spoof;
        assert_eq!(
            fixture.plan_err(),
            code(ErrorCode::InvalidAuthorityDerivation)
        );
    }

    #[test]
    fn authorize_needs_only_state_and_authority() {
        let fixture = Fixture::new(0);
        let (_, bump) = pda::program_authority_address(&fixture.program_id).unwrap();
        assert_eq!(
            authorize(&fixture.program_id, &fixture.state, &fixture.authority).unwrap(),
            bump
        );

        let err: ProgramError = authorize(&fixture.program_id, &GlobalState::default(), &Pubkey::new_unique())
            .unwrap_err()
            .into();
        assert_eq!(err, code(ErrorCode::NotInitialized));
    }

    #[test]
    fn custody_not_owned_by_authority() {
        let mut fixture = Fixture::new(THRESHOLD);
        fixture.custody.owner = Pubkey::new_unique();
        assert_eq!(fixture.plan_err(), code(ErrorCode::InvalidAccountOwner));
    }

    #[test]
    fn custody_for_other_mint() {
        let mut fixture = Fixture::new(THRESHOLD);
        fixture.custody.mint = Pubkey::new_unique();
        assert_eq!(fixture.plan_err(), code(ErrorCode::MintMismatch));
    }

    #[test]
    fn checks_run_in_order() {
        let mut fixture = Fixture::new(1);
        fixture.custody.mint = Pubkey::new_unique();
        fixture.custody.owner = Pubkey::new_unique();
        assert_eq!(fixture.plan_err(), code(ErrorCode::InvalidAccountOwner));

        fixture.state = GlobalState::default();
        assert_eq!(fixture.plan_err(), code(ErrorCode::NotInitialized));
    }

    #[test]
    fn supply_smaller_than_burn_overflows() {
        let fixture = Fixture::new(THRESHOLD);
        let err: ProgramError = fixture
            .plan(THRESHOLD - 1, BurnPolicy::WholeBalance)
            .unwrap_err()
            .into();
        assert_eq!(err, code(ErrorCode::ArithmeticOverflow));
    }
}
