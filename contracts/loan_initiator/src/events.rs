use soroban_sdk::{symbol_short, Address, Env};

pub struct InitiatorEvents;

impl InitiatorEvents {
    pub fn initialized(env: &Env, reserve: &Address, handler: &Address) {
        env.events()
            .publish((symbol_short!("init"),), (reserve.clone(), handler.clone()));
    }

    /// Emits a `loan` event once the handler's receipt has been collected.
    ///
    /// Topics: `("loan", asset)`
    /// Data:   `(fee_payer, amount, fee)`
    pub fn loan(env: &Env, asset: &Address, fee_payer: &Address, amount: i128, fee: i128) {
        env.events().publish(
            (symbol_short!("loan"), asset.clone()),
            (fee_payer.clone(), amount, fee),
        );
    }
}
