use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{Address, Env, String};

/// Strkey of the all-zero ed25519 account, the conventional null address.
const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Reject non-positive declared amounts before any state is touched
pub fn require_positive_amount(amount: Amount) -> Result<(), Error> {
    if amount > 0 {
        Ok(())
    } else {
        Err(Error::InvalidAmount)
    }
}

/// Reject the null address where a real investor address is expected
pub fn require_real_address(env: &Env, address: &Address) -> Result<(), Error> {
    if address.to_string() == String::from_str(env, ZERO_ADDRESS) {
        Err(Error::InvalidAddress)
    } else {
        Ok(())
    }
}
