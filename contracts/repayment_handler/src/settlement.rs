use soroban_sdk::{Address, Env};

use flashswap_interface::{fee, FlashSwapError, LoanContext, Settlement};

use crate::{
    events::HandlerEvents,
    ledger,
    storage::{self, HandlerConfig},
};

/// Maps the reserve's two output slots back to the principal of the asset
/// named in `context`.
///
/// Exactly one slot may be non-zero and it must be the slot of the borrowed
/// asset. Anything else means the reserve broke its side of the protocol.
pub fn resolve_principal(
    config: &HandlerConfig,
    asset: &Address,
    amount_a: i128,
    amount_b: i128,
) -> Result<i128, FlashSwapError> {
    if amount_a < 0 || amount_b < 0 {
        return Err(FlashSwapError::MalformedCallback);
    }

    let (principal, other) = if *asset == config.token_a {
        (amount_a, amount_b)
    } else if *asset == config.token_b {
        (amount_b, amount_a)
    } else {
        return Err(FlashSwapError::MalformedCallback);
    };

    if principal == 0 || other != 0 {
        return Err(FlashSwapError::MalformedCallback);
    }
    Ok(principal)
}

/// Repays a loan from inside the reserve's callback.
///
/// # Flow
/// 1. **Caller** — must be the bound reserve.
/// 2. **Initiator** — must be the bound loan initiator.
/// 3. **Principal** — resolved from the output slots and the context asset.
/// 4. **Fee** — `amount * 3 / 997 + 1`.
/// 5. **Pull** — `fee` from the fee payer's allowance into this contract.
/// 6. **Push** — `amount + fee` from this contract to the reserve.
/// 7. **Receipt** — record the settlement for the initiator and emit.
///
/// # Errors
/// | Error                       | Condition                                        |
/// |-----------------------------|--------------------------------------------------|
/// | `NotInitialized`            | `initialize` never ran                           |
/// | `UnauthorizedCaller`        | `caller` is not the bound reserve                |
/// | `UntrustedInitiator`        | `initiator` is not the bound loan initiator      |
/// | `SettlementPending`         | a receipt from this invocation is uncollected    |
/// | `MalformedCallback`         | output slots do not match the borrowed asset     |
/// | `InsufficientAuthorization` | fee payer's allowance is below the fee           |
/// | `InsufficientFunds`         | fee payer or this contract cannot cover a leg    |
/// | `Overflow`                  | fee or total does not fit in `i128`              |
///
/// A call that names the bound reserve as `caller` without the reserve being
/// the direct invoker passes the equality check and then aborts in
/// `require_auth` with a host auth error, not `UnauthorizedCaller`. Either way
/// the invocation reverts before anything moves.
pub fn execute_on_borrow(
    env: &Env,
    caller: &Address,
    initiator: &Address,
    amount_a: i128,
    amount_b: i128,
    context: &LoanContext,
) -> Result<(), FlashSwapError> {
    let config = storage::get_config(env).ok_or(FlashSwapError::NotInitialized)?;

    // -----------------------------------------------------------------------
    // 1. Authentication
    // -----------------------------------------------------------------------

    // Rejected before anything in the payload is looked at.
    if *caller != config.reserve {
        return Err(FlashSwapError::UnauthorizedCaller);
    }
    // A contract address is only authorized implicitly when it is the direct
    // invoker, so this binds the claimed caller to the real one.
    caller.require_auth();

    if *initiator != config.initiator {
        return Err(FlashSwapError::UntrustedInitiator);
    }

    // One callback per borrow: a second one would charge the fee payer twice.
    if storage::has_settlement(env) {
        return Err(FlashSwapError::SettlementPending);
    }

    storage::extend_instance_ttl(env);

    // -----------------------------------------------------------------------
    // 2. Amounts
    // -----------------------------------------------------------------------

    let amount = resolve_principal(&config, &context.asset, amount_a, amount_b)?;
    let (fee, total) = fee::repayment_total(amount)?;

    // -----------------------------------------------------------------------
    // 3. Settlement
    // -----------------------------------------------------------------------

    ledger::pull_from(env, &context.asset, &context.fee_payer, fee)?;
    ledger::push_to(env, &context.asset, &config.reserve, total)?;

    storage::set_settlement(
        env,
        &Settlement {
            asset: context.asset.clone(),
            fee_payer: context.fee_payer.clone(),
            amount,
            fee,
        },
    );

    HandlerEvents::repaid(env, &context.asset, &context.fee_payer, amount, fee);

    Ok(())
}

/// Hands the pending receipt to the initiator and clears it.
///
/// `UnauthorizedCaller` when `caller` is not the bound initiator; a host auth
/// error when it is, but the initiator is not the one invoking.
pub fn execute_take_settlement(
    env: &Env,
    caller: &Address,
) -> Result<Option<Settlement>, FlashSwapError> {
    let config = storage::get_config(env).ok_or(FlashSwapError::NotInitialized)?;
    if *caller != config.initiator {
        return Err(FlashSwapError::UnauthorizedCaller);
    }
    caller.require_auth();

    Ok(storage::take_settlement(env))
}
