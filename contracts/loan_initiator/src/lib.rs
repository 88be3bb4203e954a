#![no_std]

mod events;
mod loan;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; the initiator is no_std so we must opt-in explicitly.

#[cfg(test)]
mod test;

use flashswap_interface::{fee, fetch_asset_pair, FlashSwapError};
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::InitiatorConfig;

/// Entry point for single-invocation loans against a two-asset reserve.
///
/// Borrowed funds are delivered to the bound repayment handler, which repays
/// principal + fee inside the reserve's callback.
#[contract]
pub struct LoanInitiator;

#[contractimpl]
impl LoanInitiator {
    /// Binds the initiator to `reserve` and to the repayment `handler` that
    /// receives and repays its loans. The reserve's token pair is read once
    /// and cached.
    pub fn initialize(env: Env, reserve: Address, handler: Address) -> Result<(), FlashSwapError> {
        if storage::has_config(&env) {
            return Err(FlashSwapError::AlreadyInitialized);
        }

        let (token_a, token_b) = fetch_asset_pair(&env, &reserve)?;
        storage::set_config(
            &env,
            &InitiatorConfig {
                reserve: reserve.clone(),
                handler: handler.clone(),
                token_a,
                token_b,
            },
        );
        storage::extend_instance_ttl(&env);

        events::InitiatorEvents::initialized(&env, &reserve, &handler);
        Ok(())
    }

    /// Borrows `amount` of `asset` and repays it, plus fee, in the same
    /// invocation. `fee_payer` must authorize the call and must have approved
    /// the handler for at least `quote_fee(amount)` of `asset`.
    pub fn initiate_loan(
        env: Env,
        fee_payer: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), FlashSwapError> {
        loan::execute_initiate_loan(&env, &fee_payer, &asset, amount)
    }

    /// Fee charged on a loan of `amount`: `amount * 3 / 997 + 1`.
    pub fn quote_fee(_env: Env, amount: i128) -> Result<i128, FlashSwapError> {
        fee::compute_fee(amount)
    }

    pub fn assets(env: Env) -> Result<(Address, Address), FlashSwapError> {
        storage::get_config(&env)
            .map(|c| (c.token_a, c.token_b))
            .ok_or(FlashSwapError::NotInitialized)
    }

    pub fn reserve(env: Env) -> Result<Address, FlashSwapError> {
        storage::get_config(&env)
            .map(|c| c.reserve)
            .ok_or(FlashSwapError::NotInitialized)
    }

    pub fn handler(env: Env) -> Result<Address, FlashSwapError> {
        storage::get_config(&env)
            .map(|c| c.handler)
            .ok_or(FlashSwapError::NotInitialized)
    }
}
