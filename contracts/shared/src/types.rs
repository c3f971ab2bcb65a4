/// Amounts use i128 to match the Soroban token interface.
pub type Amount = i128;

/// Certificate ids are allocated from 1 and never reused.
pub type TokenId = u64;
