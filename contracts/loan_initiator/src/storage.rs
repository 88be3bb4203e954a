use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

/// Reserve binding and the token pair read from it at `initialize`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct InitiatorConfig {
    pub reserve: Address,
    pub handler: Address,
    pub token_a: Address,
    pub token_b: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
}

pub fn get_config(env: &Env) -> Option<InitiatorConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &InitiatorConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
