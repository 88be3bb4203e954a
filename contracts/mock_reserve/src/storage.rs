use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ReserveState,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ReserveStorage {
    pub token_a: Address,
    pub token_b: Address,
    pub reserve_a: i128,
    pub reserve_b: i128,
}

pub fn get_reserve_state(env: &Env) -> Option<ReserveStorage> {
    env.storage().instance().get(&DataKey::ReserveState)
}

pub fn set_reserve_state(env: &Env, state: &ReserveStorage) {
    env.storage().instance().set(&DataKey::ReserveState, state);
}

pub fn has_reserve_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::ReserveState)
}
