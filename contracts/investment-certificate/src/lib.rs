#![no_std]

extern crate alloc;

use shared::access::AccessGuard;
use shared::errors::Error;
use shared::events::{CERTIFICATE_MINTED, DELEGATE_APPROVED};
use shared::types::{Amount, TokenId};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod storage;
mod transfer;

#[cfg(test)]
mod tests;

use storage::*;
use transfer::{commit_ownership, OwnershipOrigin};

/// Base path for certificate metadata; the decimal id is appended.
const BASE_URI: &str = "https://api.darvest.io/metadata/share/";

#[contract]
pub struct InvestmentCertificateContract;

#[contractimpl]
impl InvestmentCertificateContract {
    /// Initialize the registry with an administrator and display metadata
    ///
    /// # Arguments
    /// * `admin` - Platform administrator address
    /// * `name` - Display name of the certificate collection
    /// * `symbol` - Display symbol of the certificate collection
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if has_guard(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        set_guard(&env, &AccessGuard::new(admin));
        set_name(&env, &name);
        set_symbol(&env, &symbol);

        Ok(())
    }

    /// Get the collection display name
    pub fn name(env: Env) -> Result<String, Error> {
        get_name(&env)
    }

    /// Get the collection display symbol
    pub fn symbol(env: Env) -> Result<String, Error> {
        get_symbol(&env)
    }

    /// Mint a certificate for an investor, recording the amount permanently
    ///
    /// Minting is deliberately open to any caller; only fund withdrawal on
    /// the ledger side is administrator-gated. Returns the new id.
    pub fn mint_certificate(
        env: Env,
        investor: Address,
        amount: Amount,
    ) -> Result<TokenId, Error> {
        investor.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let id = get_next_id(&env);
        commit_ownership(&env, id, &investor, OwnershipOrigin::Mint)?;
        set_amount(&env, id, amount);

        let total = get_total_investment(&env)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        set_total_investment(&env, total);
        set_next_id(&env, id.checked_add(1).ok_or(Error::InvalidAmount)?);

        env.events()
            .publish((CERTIFICATE_MINTED,), (investor, id, amount));

        Ok(id)
    }

    /// Get the amount recorded for a certificate
    pub fn get_investment_amount(env: Env, id: TokenId) -> Result<Amount, Error> {
        get_amount(&env, id)
    }

    /// Get the number of certificates minted so far
    pub fn get_total_minted(env: Env) -> TokenId {
        get_next_id(&env) - 1
    }

    /// Get the sum of amounts over all minted certificates
    pub fn get_total_investment(env: Env) -> Amount {
        storage::get_total_investment(&env)
    }

    /// Get the owner a certificate was minted to
    pub fn owner_of(env: Env, id: TokenId) -> Result<Address, Error> {
        get_owner(&env, id)
    }

    /// Get the metadata URI for a certificate
    pub fn token_uri(env: Env, id: TokenId) -> Result<String, Error> {
        if !certificate_exists(&env, id) {
            return Err(Error::TokenNotFound);
        }

        let uri = alloc::format!("{}{}", BASE_URI, id);
        Ok(String::from_str(&env, &uri))
    }

    /// Record a transfer delegation for a certificate
    ///
    /// The delegation is bookkeeping only: transfers are rejected at the
    /// choke point no matter who attempts them.
    pub fn approve(
        env: Env,
        owner: Address,
        delegate: Address,
        id: TokenId,
    ) -> Result<(), Error> {
        owner.require_auth();

        if !certificate_exists(&env, id) {
            return Err(Error::TokenNotFound);
        }
        set_delegate(&env, id, &delegate);

        env.events().publish((DELEGATE_APPROVED,), (id, delegate));

        Ok(())
    }

    /// Attempt to transfer a certificate. Always rejected: certificates
    /// are bound to the investor they were minted to.
    pub fn transfer(env: Env, from: Address, to: Address, id: TokenId) -> Result<(), Error> {
        from.require_auth();

        if !certificate_exists(&env, id) {
            return Err(Error::TokenNotFound);
        }
        commit_ownership(&env, id, &to, OwnershipOrigin::Transfer)
    }

    /// Checked variant of `transfer`; rejected the same way
    pub fn safe_transfer(env: Env, from: Address, to: Address, id: TokenId) -> Result<(), Error> {
        Self::transfer(env, from, to, id)
    }
}
