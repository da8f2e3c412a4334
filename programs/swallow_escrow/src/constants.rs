// seeds
pub const STATE_SEED: &[u8] = b"state";
pub const PROGRAM_AUTHORITY_SEED: &[u8] = b"program_authority";

/// Longest seed accepted by the runtime's address derivation
pub const MAX_SEED_LEN: usize = 32;

pub const ACCOUNT_DISCRIMINATOR_LEN: usize = 8;

// instruction discriminators
pub const INITIALIZE_IX: u8 = 0;
pub const SWALLOW_IX: u8 = 1;

/// discriminator + u64 threshold
pub const INITIALIZE_PAYLOAD_LEN: usize = 9;
pub const SWALLOW_PAYLOAD_LEN: usize = 1;
