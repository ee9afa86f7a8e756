use soroban_sdk::{contracttype, Address, Env};

use shared::constants::ADMIN_TTL_LEDGERS;
use shared::errors::ContractError;

/// Addresses of the contracts this coordinator drives
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoordinatorConfig {
    pub ledger: Address,
    pub registry: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    VotingContract,
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<CoordinatorConfig, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &CoordinatorConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(ADMIN_TTL_LEDGERS, ADMIN_TTL_LEDGERS);
}

pub fn get_voting_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::VotingContract)
}

pub fn set_voting_contract(env: &Env, voting: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::VotingContract, voting);
    env.storage()
        .instance()
        .extend_ttl(ADMIN_TTL_LEDGERS, ADMIN_TTL_LEDGERS);
}
