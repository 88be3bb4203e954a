use soroban_sdk::{symbol_short, Address, Env};

pub struct ReserveEvents;

impl ReserveEvents {
    /// Emits a `borrow` event after the callback repaid enough to keep k.
    ///
    /// Topics: `("borrow", to)`
    /// Data:   `(amount_a_out, amount_b_out, amount_a_in, amount_b_in)`
    pub fn borrow(
        env: &Env,
        to: &Address,
        amount_a_out: i128,
        amount_b_out: i128,
        amount_a_in: i128,
        amount_b_in: i128,
    ) {
        env.events().publish(
            (symbol_short!("borrow"), to.clone()),
            (amount_a_out, amount_b_out, amount_a_in, amount_b_in),
        );
    }

    pub fn sync(env: &Env, reserve_a: i128, reserve_b: i128) {
        env.events().publish((symbol_short!("sync"),), (reserve_a, reserve_b));
    }
}
