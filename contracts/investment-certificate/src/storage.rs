use shared::access::AccessGuard;
use shared::errors::Error;
use shared::types::{Amount, TokenId};
use soroban_sdk::{contracttype, Address, Env, String};

/// Storage keys for the certificate registry.
///
/// `Owner` entries are written only by `transfer::commit_ownership`; this
/// module exposes read accessors but no owner setter.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Administrator guard, set once at initialization
    Guard,
    /// Display name of the certificate collection
    Name,
    /// Display symbol of the certificate collection
    Symbol,
    /// Next certificate id to allocate, starts at 1 and never goes back
    NextId,
    /// Certificate owner, immutable after mint
    Owner(TokenId),
    /// Investment amount recorded at mint, immutable after mint
    Amount(TokenId),
    /// Sum of all recorded certificate amounts
    TotalInvestment,
    /// Approved transfer delegate; approvals never unlock a transfer
    Delegate(TokenId),
}

/// Store the administrator guard
pub fn set_guard(env: &Env, guard: &AccessGuard) {
    env.storage().instance().set(&DataKey::Guard, guard);
}

/// Check if the contract has been initialized
pub fn has_guard(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Guard)
}

/// Store the collection name
pub fn set_name(env: &Env, name: &String) {
    env.storage().instance().set(&DataKey::Name, name);
}

/// Retrieve the collection name
pub fn get_name(env: &Env) -> Result<String, Error> {
    env.storage()
        .instance()
        .get::<DataKey, String>(&DataKey::Name)
        .ok_or(Error::NotInit)
}

/// Store the collection symbol
pub fn set_symbol(env: &Env, symbol: &String) {
    env.storage().instance().set(&DataKey::Symbol, symbol);
}

/// Retrieve the collection symbol
pub fn get_symbol(env: &Env) -> Result<String, Error> {
    env.storage()
        .instance()
        .get::<DataKey, String>(&DataKey::Symbol)
        .ok_or(Error::NotInit)
}

/// Retrieve the next certificate id, defaults to 1
pub fn get_next_id(env: &Env) -> TokenId {
    env.storage()
        .instance()
        .get::<DataKey, TokenId>(&DataKey::NextId)
        .unwrap_or(1)
}

/// Store the next certificate id
pub fn set_next_id(env: &Env, id: TokenId) {
    env.storage().instance().set(&DataKey::NextId, &id);
}

/// Retrieve a certificate's owner
pub fn get_owner(env: &Env, id: TokenId) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, Address>(&DataKey::Owner(id))
        .ok_or(Error::TokenNotFound)
}

/// Check if a certificate has been minted
pub fn certificate_exists(env: &Env, id: TokenId) -> bool {
    env.storage().persistent().has(&DataKey::Owner(id))
}

/// Store a certificate's recorded amount
pub fn set_amount(env: &Env, id: TokenId, amount: Amount) {
    env.storage().persistent().set(&DataKey::Amount(id), &amount);
}

/// Retrieve a certificate's recorded amount
pub fn get_amount(env: &Env, id: TokenId) -> Result<Amount, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::Amount(id))
        .ok_or(Error::TokenNotFound)
}

/// Store the aggregate recorded amount
pub fn set_total_investment(env: &Env, total: Amount) {
    env.storage()
        .instance()
        .set(&DataKey::TotalInvestment, &total);
}

/// Retrieve the aggregate recorded amount, zero before any mint
pub fn get_total_investment(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::TotalInvestment)
        .unwrap_or(0)
}

/// Record a transfer delegate for a certificate
pub fn set_delegate(env: &Env, id: TokenId, delegate: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Delegate(id), delegate);
}

/// Retrieve the transfer delegate for a certificate, if any
pub fn get_delegate(env: &Env, id: TokenId) -> Option<Address> {
    env.storage()
        .persistent()
        .get::<DataKey, Address>(&DataKey::Delegate(id))
}
