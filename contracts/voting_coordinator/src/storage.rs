use soroban_sdk::{contracttype, Address, Env};

use shared::constants::{ADMIN_TTL_LEDGERS, DATA_TTL_LEDGERS};
use shared::errors::ContractError;
use shared::types::Commit;
use shared::validation::checked_increment;

/// Addresses of the contracts the voting coordinator reads and writes
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingConfig {
    pub coordinator: Address,
    pub ledger: Address,
    pub registry: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    /// (voter, proposal_id)
    Commit(Address, u64),
    CommitCount(u64),
    RevealCount(u64),
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<VotingConfig, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &VotingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(ADMIN_TTL_LEDGERS, ADMIN_TTL_LEDGERS);
}

// ── Commits ──────────────────────────────────────────────────────────────────

pub fn get_commit(env: &Env, voter: &Address, proposal_id: u64) -> Option<Commit> {
    env.storage()
        .persistent()
        .get(&DataKey::Commit(voter.clone(), proposal_id))
}

pub fn save_commit(env: &Env, voter: &Address, proposal_id: u64, commit: &Commit) {
    let key = DataKey::Commit(voter.clone(), proposal_id);
    env.storage().persistent().set(&key, commit);
    env.storage()
        .persistent()
        .extend_ttl(&key, DATA_TTL_LEDGERS, DATA_TTL_LEDGERS);
}

// ── Counters ─────────────────────────────────────────────────────────────────

fn read_counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().persistent().get(key).unwrap_or(0u64)
}

fn bump_counter(env: &Env, key: &DataKey) -> Result<u64, ContractError> {
    let next = checked_increment(read_counter(env, key))?;
    env.storage().persistent().set(key, &next);
    env.storage()
        .persistent()
        .extend_ttl(key, DATA_TTL_LEDGERS, DATA_TTL_LEDGERS);
    Ok(next)
}

pub fn get_commit_count(env: &Env, proposal_id: u64) -> u64 {
    read_counter(env, &DataKey::CommitCount(proposal_id))
}

pub fn increment_commit_count(env: &Env, proposal_id: u64) -> Result<u64, ContractError> {
    bump_counter(env, &DataKey::CommitCount(proposal_id))
}

pub fn get_reveal_count(env: &Env, proposal_id: u64) -> u64 {
    read_counter(env, &DataKey::RevealCount(proposal_id))
}

pub fn increment_reveal_count(env: &Env, proposal_id: u64) -> Result<u64, ContractError> {
    bump_counter(env, &DataKey::RevealCount(proposal_id))
}
