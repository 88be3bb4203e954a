use soroban_sdk::{token::TokenClient, Address, Env};

use flashswap_interface::FlashSwapError;

/// Pulls `amount` of `asset` from `owner` into this contract using the
/// allowance `owner` granted beforehand.
///
/// # Errors
/// * `InsufficientAuthorization` - allowance for this contract is below `amount`.
/// * `InsufficientFunds`         - `owner` holds less than `amount`.
pub fn pull_from(
    env: &Env,
    asset: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), FlashSwapError> {
    let token = TokenClient::new(env, asset);
    let this = env.current_contract_address();

    if token.allowance(owner, &this) < amount {
        return Err(FlashSwapError::InsufficientAuthorization);
    }
    if token.balance(owner) < amount {
        return Err(FlashSwapError::InsufficientFunds);
    }

    token.transfer_from(&this, owner, &this, &amount);
    Ok(())
}

/// Pushes `amount` of `asset` from this contract to `recipient`.
///
/// # Errors
/// * `InsufficientFunds` - this contract holds less than `amount`.
pub fn push_to(
    env: &Env,
    asset: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), FlashSwapError> {
    let token = TokenClient::new(env, asset);
    let this = env.current_contract_address();

    if token.balance(&this) < amount {
        return Err(FlashSwapError::InsufficientFunds);
    }

    token.transfer(&this, recipient, &amount);
    Ok(())
}
