#![no_std]

mod errors;
pub mod fee;

#[cfg(test)]
extern crate std;


pub use errors::FlashSwapError;

use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Context attached to a borrow and handed back, untouched, to the callee.
///
/// Only the loan initiator ever builds one. The reserve forwards it as-is, so
/// the repayment handler can trust it once it has checked who is calling and
/// on whose behalf.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanContext {
    /// Token being borrowed. Always one of the reserve's two tokens.
    pub asset: Address,
    /// Party whose pre-approved allowance covers the fee.
    pub fee_payer: Address,
}

/// Receipt written by the repayment handler once a loan has been repaid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub asset: Address,
    pub fee_payer: Address,
    pub amount: i128,
    pub fee: i128,
}

/// Two-asset constant-product reserve the loans are drawn from.
#[contractclient(name = "ReserveClient")]
pub trait Reserve {
    fn token_a(env: Env) -> Address;
    fn token_b(env: Env) -> Address;

    /// Optimistically sends `amount_a_out` / `amount_b_out` to `to`, invokes
    /// `to.on_borrow(...)`, then verifies the constant-product invariant.
    /// `initiator` must authorize the call.
    fn borrow(
        env: Env,
        initiator: Address,
        amount_a_out: i128,
        amount_b_out: i128,
        to: Address,
        context: LoanContext,
    );
}

/// Borrow callback interface.
/// The reserve invokes `on_borrow` after transferring the borrowed tokens to
/// the callee. The callee MUST return principal + fee before it returns, or
/// the reserve reverts the whole invocation.
#[contractclient(name = "BorrowCalleeClient")]
pub trait BorrowCallee {
    fn on_borrow(
        env: Env,
        caller: Address,
        initiator: Address,
        amount_a: i128,
        amount_b: i128,
        context: LoanContext,
    );
}

/// Settlement receipts kept by the repayment handler, readable once by the
/// initiator that started the loan.
#[contractclient(name = "SettlementClient")]
pub trait Settlements {
    fn take_settlement(env: Env, caller: Address) -> Option<Settlement>;
}

/// Reads the reserve's two tokens and checks they differ.
pub fn fetch_asset_pair(env: &Env, reserve: &Address) -> Result<(Address, Address), FlashSwapError> {
    let client = ReserveClient::new(env, reserve);
    let token_a = client.token_a();
    let token_b = client.token_b();
    if token_a == token_b {
        return Err(FlashSwapError::IdenticalAssets);
    }
    Ok((token_a, token_b))
}
