use shared::access::AccessGuard;
use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the ledger contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Administrator guard, set once at initialization
    Guard,
    /// Token accepted as supplied value
    Token,
    /// Cumulative contribution keyed by investor address
    Contribution(Address),
    /// Number of distinct addresses with a positive contribution
    ContributorCount,
    /// Token balance held by the contract and not yet withdrawn
    HeldBalance,
}

/// Store the administrator guard
pub fn set_guard(env: &Env, guard: &AccessGuard) {
    env.storage().instance().set(&DataKey::Guard, guard);
}

/// Retrieve the administrator guard
pub fn get_guard(env: &Env) -> Result<AccessGuard, Error> {
    env.storage()
        .instance()
        .get::<DataKey, AccessGuard>(&DataKey::Guard)
        .ok_or(Error::NotInit)
}

/// Check if the contract has been initialized
pub fn has_guard(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Guard)
}

/// Store the accepted token address
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// Retrieve the accepted token address
pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Token)
        .ok_or(Error::NotInit)
}

/// Store an investor's cumulative contribution
pub fn set_contribution(env: &Env, investor: &Address, amount: Amount) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(investor.clone()), &amount);
}

/// Retrieve an investor's cumulative contribution, zero if none
pub fn get_contribution(env: &Env, investor: &Address) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::Contribution(investor.clone()))
        .unwrap_or(0)
}

/// Store the unique contributor counter
pub fn set_contributor_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ContributorCount, &count);
}

/// Retrieve the unique contributor counter, zero before any contribution
pub fn get_contributor_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::ContributorCount)
        .unwrap_or(0)
}

/// Store the held token balance
pub fn set_held_balance(env: &Env, balance: Amount) {
    env.storage().instance().set(&DataKey::HeldBalance, &balance);
}

/// Retrieve the held token balance, zero before any deposit
pub fn get_held_balance(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::HeldBalance)
        .unwrap_or(0)
}
