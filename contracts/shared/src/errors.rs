use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInit = 1,
    NotInit = 2,
    Unauthorized = 3,

    // Ledger errors
    InvalidAmount = 4,
    InvalidAddress = 5,
    NoFunds = 6,

    // Certificate errors
    TokenNotFound = 7,
    TransferForbidden = 8,
}
