//! Fee schedule for a single borrow.
//!
//! The reserve charges 0.3% on the *input* side of a swap, so repaying
//! `amount` out of a `997/1000` effective input needs `amount * 3 / 997`
//! on top. Integer division rounds that down, hence the extra unit.

use crate::errors::FlashSwapError;

/// Fee numerator: 0.3% input-side fee.
pub const FEE_NUMERATOR: i128 = 3;
/// Fee denominator: `1000 - FEE_NUMERATOR`.
pub const FEE_DENOMINATOR: i128 = 997;

/// Computes the fee owed on a principal of `amount`.
///
/// Returns `amount * 3 / 997 + 1`. The result is never zero, even for
/// `amount` in `1..=332` where the quotient truncates to 0.
///
/// # Errors
/// * `InvalidAmount` - `amount <= 0`.
/// * `Overflow`      - `amount * 3` does not fit in `i128`.
pub fn compute_fee(amount: i128) -> Result<i128, FlashSwapError> {
    if amount <= 0 {
        return Err(FlashSwapError::InvalidAmount);
    }
    amount
        .checked_mul(FEE_NUMERATOR)
        .map(|v| v / FEE_DENOMINATOR)
        .and_then(|v| v.checked_add(1))
        .ok_or(FlashSwapError::Overflow)
}

/// Principal plus fee: what has to reach the reserve before the callback returns.
pub fn repayment_total(amount: i128) -> Result<(i128, i128), FlashSwapError> {
    let fee = compute_fee(amount)?;
    let total = amount.checked_add(fee).ok_or(FlashSwapError::Overflow)?;
    Ok((fee, total))
}
