use soroban_sdk::{symbol_short, Symbol};

/// A contribution was added to the ledger: `(investor, amount)`
pub const INVESTMENT_RECORDED: Symbol = symbol_short!("invested");

/// The held balance was paid out: `(administrator, amount)`
pub const FUNDS_WITHDRAWN: Symbol = symbol_short!("withdrawn");

/// A certificate was minted: `(investor, id, amount)`
pub const CERTIFICATE_MINTED: Symbol = symbol_short!("cert_mint");

/// A transfer delegate was recorded for a certificate: `(id, delegate)`
pub const DELEGATE_APPROVED: Symbol = symbol_short!("approved");
