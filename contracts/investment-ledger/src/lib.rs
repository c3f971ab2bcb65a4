#![no_std]

use shared::access::AccessGuard;
use shared::errors::Error;
use shared::events::{FUNDS_WITHDRAWN, INVESTMENT_RECORDED};
use shared::types::Amount;
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};

mod storage;
mod validation;


use storage::*;

#[contract]
pub struct InvestmentLedgerContract;

#[contractimpl]
impl InvestmentLedgerContract {
    /// Initialize the ledger with an administrator and the token it accepts
    ///
    /// # Arguments
    /// * `admin` - The only address allowed to withdraw held funds
    /// * `token` - Token address that supplied value is denominated in
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if has_guard(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        set_guard(&env, &AccessGuard::new(admin));
        set_token(&env, &token);

        Ok(())
    }

    /// Record a cumulative contribution for an investor
    ///
    /// `amount` is the declared contribution added to the investor's ledger
    /// entry; `supplied_value` is the token value actually moved into the
    /// contract. The two may legitimately differ and callers are
    /// responsible for keeping them consistent.
    pub fn record_investment(
        env: Env,
        investor: Address,
        amount: Amount,
        supplied_value: Amount,
    ) -> Result<(), Error> {
        investor.require_auth();

        validation::require_positive_amount(amount)?;
        if supplied_value < 0 {
            return Err(Error::InvalidAmount);
        }

        // First-time contributor detection
        let previous = get_contribution(&env, &investor);
        if previous == 0 {
            let count = get_contributor_count(&env);
            set_contributor_count(&env, count.checked_add(1).ok_or(Error::InvalidAmount)?);
        }

        let updated = previous.checked_add(amount).ok_or(Error::InvalidAmount)?;
        set_contribution(&env, &investor, updated);

        if supplied_value > 0 {
            let token = get_token(&env)?;
            TokenClient::new(&env, &token).transfer(
                &investor,
                &env.current_contract_address(),
                &supplied_value,
            );

            let held = get_held_balance(&env)
                .checked_add(supplied_value)
                .ok_or(Error::InvalidAmount)?;
            set_held_balance(&env, held);
        }

        env.events()
            .publish((INVESTMENT_RECORDED,), (investor, amount));

        Ok(())
    }

    /// Get the cumulative contribution recorded for an investor
    ///
    /// Returns zero for an address that never contributed. The null
    /// address is rejected.
    pub fn get_investment(env: Env, investor: Address) -> Result<Amount, Error> {
        validation::require_real_address(&env, &investor)?;
        Ok(get_contribution(&env, &investor))
    }

    /// Get the number of distinct addresses with a recorded contribution
    pub fn get_total_investors(env: Env) -> u32 {
        get_contributor_count(&env)
    }

    /// Get the token balance currently held by the ledger
    pub fn get_held_balance(env: Env) -> Amount {
        storage::get_held_balance(&env)
    }

    /// Withdraw the full held balance to the administrator
    ///
    /// Administrator-only. Fails with `NoFunds` when nothing is held.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let guard = get_guard(&env)?;
        guard.require_administrator(&caller)?;

        let balance = get_held_balance(&env);
        if balance == 0 {
            return Err(Error::NoFunds);
        }

        let token = get_token(&env)?;
        TokenClient::new(&env, &token).transfer(
            &env.current_contract_address(),
            &guard.administrator,
            &balance,
        );
        set_held_balance(&env, 0);

        env.events()
            .publish((FUNDS_WITHDRAWN,), (guard.administrator, balance));

        Ok(())
    }
}
