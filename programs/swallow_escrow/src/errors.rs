use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The global state has already been initialized.")]
    AlreadyInitialized,
    #[msg("The global state has not been initialized.")]
    NotInitialized,
    #[msg("Instruction payload has the wrong length.")]
    MalformedPayload,
    #[msg("Unknown instruction discriminator.")]
    UnknownInstruction,
    #[msg("Seed is empty, too long or has no valid bump.")]
    InvalidSeed,
    #[msg("Program authority does not match its derived address.")]
    InvalidAuthorityDerivation,
    #[msg("Token account is not owned by the program authority.")]
    InvalidAccountOwner,
    #[msg("Token account mint does not match the supplied mint.")]
    MintMismatch,
    #[msg("Custody balance is below the burn threshold.")]
    BelowThreshold,
    #[msg("An overflow occurs.")]
    ArithmeticOverflow,
    #[msg("Payer cannot cover the rent-exemption deposit.")]
    InsufficientFunds,
    #[msg("Global state account is not at its derived address.")]
    InvalidStateAddress,
    #[msg("Global state account has an unexpected layout.")]
    InvalidStateLayout,
    #[msg("Global state account must be writable.")]
    StateNotWritable,
}
