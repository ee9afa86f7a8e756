use soroban_sdk::{contracttype, Address, Env};

use shared::constants::DATA_TTL_LEDGERS;
use shared::errors::ContractError;
use shared::types::Unit;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Unit(Address),
    UnitCount,
}

pub fn has_unit(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Unit(address.clone()))
}

pub fn get_unit(env: &Env, address: &Address) -> Option<Unit> {
    env.storage()
        .persistent()
        .get(&DataKey::Unit(address.clone()))
}

pub fn save_unit(env: &Env, unit: &Unit) {
    let key = DataKey::Unit(unit.address.clone());
    env.storage().persistent().set(&key, unit);
    env.storage()
        .persistent()
        .extend_ttl(&key, DATA_TTL_LEDGERS, DATA_TTL_LEDGERS);
}

pub fn get_unit_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::UnitCount)
        .unwrap_or(0u32)
}

pub fn increment_unit_count(env: &Env) -> Result<u32, ContractError> {
    let count = get_unit_count(env)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;
    env.storage().persistent().set(&DataKey::UnitCount, &count);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::UnitCount, DATA_TTL_LEDGERS, DATA_TTL_LEDGERS);
    Ok(count)
}
