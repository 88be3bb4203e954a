use soroban_sdk::{token::TokenClient, Address, Env};

use flashswap_interface::{BorrowCalleeClient, LoanContext};

use crate::{
    errors::ReserveError,
    events::ReserveEvents,
    storage::{get_reserve_state, set_reserve_state},
};

/// Input-side swap fee, in thousandths (0.3%).
const FEE_PER_MILLE: i128 = 3;
const PER_MILLE: i128 = 1_000;

/// Balance after the input-side fee: `balance * 1000 - amount_in * 3`.
fn adjusted_balance(balance: i128, amount_in: i128) -> Result<i128, ReserveError> {
    let scaled = balance.checked_mul(PER_MILLE).ok_or(ReserveError::Overflow)?;
    let fee = amount_in.checked_mul(FEE_PER_MILLE).ok_or(ReserveError::Overflow)?;
    scaled.checked_sub(fee).ok_or(ReserveError::Overflow)
}

/// Tokens that came back on top of what stayed in the reserve.
fn amount_in(balance: i128, reserve: i128, amount_out: i128) -> i128 {
    let kept = reserve - amount_out;
    if balance > kept {
        balance - kept
    } else {
        0
    }
}

/// Optimistic borrow with a callback, settled against the constant product.
///
/// # Flow
/// 1. **Pre-flight checks** — initiator auth, amount signs, reserves, `to`.
/// 2. **Transfer** — send `amount_a_out` / `amount_b_out` to `to`.
/// 3. **Callback** — `to.on_borrow(this, initiator, ...)`. The host refuses
///    any call back into this contract while the borrow is running.
/// 4. **Input** — whatever came back above `reserve - amount_out`.
/// 5. **k-invariant** — fee-adjusted balances must keep
///    `adj_a * adj_b >= reserve_a * reserve_b * 1000^2`.
/// 6. **Persist + emit**.
///
/// # Errors
/// | Error                      | Condition                                   |
/// |----------------------------|---------------------------------------------|
/// | `InsufficientOutputAmount` | Both amounts are zero, or either is negative |
/// | `NotInitialized`           | `initialize` never ran                      |
/// | `InsufficientLiquidity`    | An amount is not below its reserve          |
/// | `InvalidTo`                | `to` is one of the reserve's tokens         |
/// | `InsufficientInputAmount`  | Nothing came back during the callback       |
/// | `InvalidK`                 | Fee-adjusted product fell below the old one |
/// | `Overflow`                 | Arithmetic overflow on balances or k        |
pub fn execute_borrow(
    env: &Env,
    initiator: &Address,
    amount_a_out: i128,
    amount_b_out: i128,
    to: &Address,
    context: &LoanContext,
) -> Result<(), ReserveError> {
    // -----------------------------------------------------------------------
    // 1. Pre-flight checks (no state mutation)
    // -----------------------------------------------------------------------

    initiator.require_auth();

    if amount_a_out < 0 || amount_b_out < 0 {
        return Err(ReserveError::InsufficientOutputAmount);
    }
    if amount_a_out == 0 && amount_b_out == 0 {
        return Err(ReserveError::InsufficientOutputAmount);
    }

    let mut state = get_reserve_state(env).ok_or(ReserveError::NotInitialized)?;

    if amount_a_out >= state.reserve_a || amount_b_out >= state.reserve_b {
        return Err(ReserveError::InsufficientLiquidity);
    }
    if *to == state.token_a || *to == state.token_b {
        return Err(ReserveError::InvalidTo);
    }

    // -----------------------------------------------------------------------
    // 2. Optimistic transfer
    // -----------------------------------------------------------------------

    let contract = env.current_contract_address();
    let token_a = TokenClient::new(env, &state.token_a);
    let token_b = TokenClient::new(env, &state.token_b);

    if amount_a_out > 0 {
        token_a.transfer(&contract, to, &amount_a_out);
    }
    if amount_b_out > 0 {
        token_b.transfer(&contract, to, &amount_b_out);
    }

    // -----------------------------------------------------------------------
    // 3. Callback
    // -----------------------------------------------------------------------

    BorrowCalleeClient::new(env, to).on_borrow(
        &contract,
        initiator,
        &amount_a_out,
        &amount_b_out,
        context,
    );

    // -----------------------------------------------------------------------
    // 4. Input amounts
    // -----------------------------------------------------------------------

    let balance_a = token_a.balance(&contract);
    let balance_b = token_b.balance(&contract);

    let amount_a_in = amount_in(balance_a, state.reserve_a, amount_a_out);
    let amount_b_in = amount_in(balance_b, state.reserve_b, amount_b_out);
    if amount_a_in == 0 && amount_b_in == 0 {
        return Err(ReserveError::InsufficientInputAmount);
    }

    // -----------------------------------------------------------------------
    // 5. k-invariant with the input-side fee
    // -----------------------------------------------------------------------

    let adjusted_a = adjusted_balance(balance_a, amount_a_in)?;
    let adjusted_b = adjusted_balance(balance_b, amount_b_in)?;

    let post_k = adjusted_a.checked_mul(adjusted_b).ok_or(ReserveError::Overflow)?;
    let pre_k = state
        .reserve_a
        .checked_mul(state.reserve_b)
        .and_then(|k| k.checked_mul(PER_MILLE * PER_MILLE))
        .ok_or(ReserveError::Overflow)?;

    if post_k < pre_k {
        return Err(ReserveError::InvalidK);
    }

    // -----------------------------------------------------------------------
    // 6. Persist and emit
    // -----------------------------------------------------------------------

    state.reserve_a = balance_a;
    state.reserve_b = balance_b;
    set_reserve_state(env, &state);

    ReserveEvents::borrow(env, to, amount_a_out, amount_b_out, amount_a_in, amount_b_in);

    Ok(())
}
