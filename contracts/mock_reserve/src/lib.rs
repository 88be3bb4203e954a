#![no_std]

mod borrow;
mod errors;
mod events;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; the reserve is no_std so we must opt-in explicitly.


pub use errors::ReserveError;

use flashswap_interface::LoanContext;
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};
use storage::ReserveStorage;

/// Minimal two-token constant-product reserve.
///
/// Liquidity is provided by transferring tokens in and calling `sync`. The
/// only way out is `borrow`, which must be repaid inside its callback.
#[contract]
pub struct MockReserve;

#[contractimpl]
impl MockReserve {
    pub fn initialize(env: Env, token_a: Address, token_b: Address) -> Result<(), ReserveError> {
        if storage::has_reserve_state(&env) {
            return Err(ReserveError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(ReserveError::IdenticalTokens);
        }

        storage::set_reserve_state(
            &env,
            &ReserveStorage {
                token_a,
                token_b,
                reserve_a: 0,
                reserve_b: 0,
            },
        );
        Ok(())
    }

    pub fn token_a(env: Env) -> Result<Address, ReserveError> {
        storage::get_reserve_state(&env)
            .map(|s| s.token_a)
            .ok_or(ReserveError::NotInitialized)
    }

    pub fn token_b(env: Env) -> Result<Address, ReserveError> {
        storage::get_reserve_state(&env)
            .map(|s| s.token_b)
            .ok_or(ReserveError::NotInitialized)
    }

    pub fn get_reserves(env: Env) -> Result<(i128, i128), ReserveError> {
        storage::get_reserve_state(&env)
            .map(|s| (s.reserve_a, s.reserve_b))
            .ok_or(ReserveError::NotInitialized)
    }

    /// Sets reserves to the current token balances.
    pub fn sync(env: Env) -> Result<(), ReserveError> {
        let mut state = storage::get_reserve_state(&env).ok_or(ReserveError::NotInitialized)?;
        let contract = env.current_contract_address();

        state.reserve_a = TokenClient::new(&env, &state.token_a).balance(&contract);
        state.reserve_b = TokenClient::new(&env, &state.token_b).balance(&contract);
        storage::set_reserve_state(&env, &state);

        events::ReserveEvents::sync(&env, state.reserve_a, state.reserve_b);
        Ok(())
    }

    /// Sends the requested amounts to `to`, calls `to.on_borrow(...)` and
    /// reverts unless enough came back to keep the fee-adjusted product.
    pub fn borrow(
        env: Env,
        initiator: Address,
        amount_a_out: i128,
        amount_b_out: i128,
        to: Address,
        context: LoanContext,
    ) -> Result<(), ReserveError> {
        borrow::execute_borrow(&env, &initiator, amount_a_out, amount_b_out, &to, &context)
    }
}
