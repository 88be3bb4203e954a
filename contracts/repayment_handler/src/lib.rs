#![no_std]

mod events;
mod ledger;
mod settlement;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; the handler is no_std so we must opt-in explicitly.


use flashswap_interface::{fetch_asset_pair, FlashSwapError, LoanContext, Settlement};
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::HandlerConfig;

/// Receives borrowed funds from the reserve and repays them, plus fee, before
/// the reserve's callback returns.
#[contract]
pub struct RepaymentHandler;

#[contractimpl]
impl RepaymentHandler {
    /// Binds the handler to `reserve` and to the loan initiator it accepts
    /// callbacks for. The reserve's token pair is read once and cached.
    pub fn initialize(env: Env, reserve: Address, initiator: Address) -> Result<(), FlashSwapError> {
        if storage::has_config(&env) {
            return Err(FlashSwapError::AlreadyInitialized);
        }

        let (token_a, token_b) = fetch_asset_pair(&env, &reserve)?;
        storage::set_config(
            &env,
            &HandlerConfig {
                reserve: reserve.clone(),
                initiator: initiator.clone(),
                token_a,
                token_b,
            },
        );
        storage::extend_instance_ttl(&env);

        events::HandlerEvents::initialized(&env, &reserve, &initiator);
        Ok(())
    }

    /// Reserve callback. `caller` is the reserve's own address and
    /// `initiator` the party that requested the borrow.
    pub fn on_borrow(
        env: Env,
        caller: Address,
        initiator: Address,
        amount_a: i128,
        amount_b: i128,
        context: LoanContext,
    ) -> Result<(), FlashSwapError> {
        settlement::execute_on_borrow(&env, &caller, &initiator, amount_a, amount_b, &context)
    }

    /// Returns and clears the receipt of the last settled loan. Only the
    /// bound initiator may collect it.
    pub fn take_settlement(env: Env, caller: Address) -> Result<Option<Settlement>, FlashSwapError> {
        settlement::execute_take_settlement(&env, &caller)
    }

    pub fn reserve(env: Env) -> Result<Address, FlashSwapError> {
        storage::get_config(&env)
            .map(|c| c.reserve)
            .ok_or(FlashSwapError::NotInitialized)
    }

    pub fn initiator(env: Env) -> Result<Address, FlashSwapError> {
        storage::get_config(&env)
            .map(|c| c.initiator)
            .ok_or(FlashSwapError::NotInitialized)
    }
}
