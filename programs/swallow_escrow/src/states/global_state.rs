// libraries
use anchor_lang::prelude::*;

// local
use crate::constants::ACCOUNT_DISCRIMINATOR_LEN;
use crate::errors::ErrorCode;

/// Singleton record at the `"state"` PDA.
///
/// Layout (17 bytes):
/// - `[0..8)`  account discriminator
/// - `[8]`     is_initialized, 0 or 1
/// - `[9..17)` threshold, little-endian u64
///
/// Any change to this layout needs a new account type, so the discriminator
/// changes with it.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct GlobalState {
    /// Set once by initialize, never cleared
    pub is_initialized: bool,
    /// Minimum custody balance before a burn is allowed
    pub threshold: u64,
}

impl GlobalState {
    pub const IS_INITIALIZED_OFFSET: usize = ACCOUNT_DISCRIMINATOR_LEN;
    pub const THRESHOLD_OFFSET: usize = Self::IS_INITIALIZED_OFFSET + 1;
    pub const LEN: usize = Self::THRESHOLD_OFFSET + 8;

    pub fn new(threshold: u64) -> Self {
        Self {
            is_initialized: true,
            threshold,
        }
    }

    /// Decodes a record, rejecting anything that is not exactly `LEN` bytes.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        require!(data.len() == Self::LEN, ErrorCode::InvalidStateLayout);
        let mut buf: &[u8] = data;
        Self::try_deserialize(&mut buf).map_err(|_| error!(ErrorCode::InvalidStateLayout))
    }

    pub fn pack(&self, data: &mut [u8]) -> Result<()> {
        require!(data.len() == Self::LEN, ErrorCode::InvalidStateLayout);
        let mut buf: &mut [u8] = data;
        self.try_serialize(&mut buf)
    }

    /// Zeroed storage: allocated but never written
    pub fn is_blank(data: &[u8]) -> bool {
        data.len() == Self::LEN && data.iter().all(|b| *b == 0)
    }

    /// Loads the record from its account.
    ///
    /// An unallocated or blank account reads as the default, uninitialized
    /// record. An allocated account that is not ours, or has the wrong shape,
    /// is a layout error.
    pub fn load(info: &AccountInfo, program_id: &Pubkey) -> Result<Self> {
        if info.data_is_empty() {
            return Ok(Self::default());
        }
        require_keys_eq!(*info.owner, *program_id, ErrorCode::InvalidStateLayout);

        let data = info.try_borrow_data()?;
        if Self::is_blank(&data) {
            return Ok(Self::default());
        }
        Self::unpack(&data)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.pack(&mut data[..])
    }
}
