use flashswap_interface::Settlement;
use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub struct HandlerConfig {
    pub reserve: Address,
    pub initiator: Address,
    pub token_a: Address,
    pub token_b: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Settlement,
}

pub fn get_config(env: &Env) -> Option<HandlerConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &HandlerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Settlement receipts only live until the initiator collects them, which
// happens before the outer invocation returns.

pub fn has_settlement(env: &Env) -> bool {
    env.storage().temporary().has(&DataKey::Settlement)
}

pub fn set_settlement(env: &Env, settlement: &Settlement) {
    env.storage().temporary().set(&DataKey::Settlement, settlement);
}

pub fn take_settlement(env: &Env) -> Option<Settlement> {
    let settlement = env.storage().temporary().get(&DataKey::Settlement);
    if settlement.is_some() {
        env.storage().temporary().remove(&DataKey::Settlement);
    }
    settlement
}
