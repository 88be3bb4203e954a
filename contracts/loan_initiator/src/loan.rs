use soroban_sdk::{Address, Env};

use flashswap_interface::{FlashSwapError, LoanContext, ReserveClient, SettlementClient};

use crate::{
    events::InitiatorEvents,
    storage::{self, InitiatorConfig},
};

/// Routes `amount` to the reserve output slot that holds `asset`.
///
/// Returns `(amount_a_out, amount_b_out)` with the other slot at zero.
pub fn route(
    config: &InitiatorConfig,
    asset: &Address,
    amount: i128,
) -> Result<(i128, i128), FlashSwapError> {
    let slots = if *asset == config.token_a {
        (amount, 0)
    } else if *asset == config.token_b {
        (0, amount)
    } else {
        return Err(FlashSwapError::InvalidAsset);
    };

    if amount <= 0 {
        return Err(FlashSwapError::InvalidAmount);
    }
    Ok(slots)
}

/// Borrows `amount` of `asset` from the bound reserve, with `fee_payer`
/// covering the fee.
///
/// # Flow
/// 1. **Validation** — asset in the pair, positive amount. Nothing is
///    touched when either fails.
/// 2. **Auth** — `fee_payer` must authorize.
/// 3. **Borrow** — `reserve.borrow(this, out_a, out_b, handler, context)`.
///    The reserve pays the handler and calls it back; the handler repays
///    before control comes back here.
/// 4. **Receipt** — the handler's settlement must match this loan.
///
/// # Errors
/// | Error            | Condition                                            |
/// |------------------|------------------------------------------------------|
/// | `NotInitialized` | `initialize` never ran                               |
/// | `InvalidAsset`   | `asset` is neither of the reserve's tokens           |
/// | `InvalidAmount`  | `amount <= 0`                                        |
/// | `LoanNotSettled` | the reserve returned without the handler repaying    |
///
/// Failures raised inside the callback (`InsufficientAuthorization`,
/// `InsufficientFunds`, ...) and the reserve's own invariant failure
/// propagate unchanged and void the whole invocation.
pub fn execute_initiate_loan(
    env: &Env,
    fee_payer: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), FlashSwapError> {
    let config = storage::get_config(env).ok_or(FlashSwapError::NotInitialized)?;
    let (amount_a_out, amount_b_out) = route(&config, asset, amount)?;

    fee_payer.require_auth();
    storage::extend_instance_ttl(env);

    let contract = env.current_contract_address();
    let context = LoanContext {
        asset: asset.clone(),
        fee_payer: fee_payer.clone(),
    };

    ReserveClient::new(env, &config.reserve).borrow(
        &contract,
        &amount_a_out,
        &amount_b_out,
        &config.handler,
        &context,
    );

    let settlement = SettlementClient::new(env, &config.handler)
        .take_settlement(&contract)
        .ok_or(FlashSwapError::LoanNotSettled)?;

    if settlement.asset != *asset || settlement.fee_payer != *fee_payer || settlement.amount != amount
    {
        return Err(FlashSwapError::LoanNotSettled);
    }

    InitiatorEvents::loan(env, asset, fee_payer, amount, settlement.fee);

    Ok(())
}
