use soroban_sdk::{symbol_short, Address, Env};

pub struct HandlerEvents;

impl HandlerEvents {
    pub fn initialized(env: &Env, reserve: &Address, initiator: &Address) {
        env.events()
            .publish((symbol_short!("init"),), (reserve.clone(), initiator.clone()));
    }

    /// Emits a `repaid` event once principal + fee have been sent back.
    ///
    /// Topics: `("repaid", asset)`
    /// Data:   `(fee_payer, amount, fee)`
    pub fn repaid(env: &Env, asset: &Address, fee_payer: &Address, amount: i128, fee: i128) {
        env.events().publish(
            (symbol_short!("repaid"), asset.clone()),
            (fee_payer.clone(), amount, fee),
        );
    }
}
