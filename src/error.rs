//! Error types for unhma

use thiserror::Error;

use crate::hma::ChassisKind;

/// Fatal decode error. No partial unit is ever returned alongside one of these.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Truncated input: needed {needed} bytes at offset {offset}, only {available} left")]
    TruncatedInput {
        offset: u64,
        needed: usize,
        available: usize,
    },

    #[error("Unknown chassis type: {0}")]
    UnknownChassis(u16),

    #[error("Unknown engine type: {0}")]
    UnknownEngine(u16),

    #[error("Unknown armor type: {0}")]
    UnknownArmor(u16),

    #[error("Unknown tech base: {0}")]
    UnknownTechBase(u16),

    #[error("{ammo} has {shots_per_lot} shots per lot, but the unit wants {requested} shots")]
    AmmoReconciliation {
        ammo: &'static str,
        shots_per_lot: u16,
        requested: u32,
    },

    #[error("Unsupported chassis for entity construction: {0}")]
    UnsupportedChassis(ChassisKind),
}

/// Result type alias for unhma operations
pub type Result<T> = std::result::Result<T, Error>;
