use soroban_sdk::{contracttype, Env};

use shared::constants::DATA_TTL_LEDGERS;
use shared::types::Proposal;

// ── Storage keys ─────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ProposalCount,
    Proposal(u64),
}

// ── Proposal Count ───────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount, &count);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::ProposalCount, DATA_TTL_LEDGERS, DATA_TTL_LEDGERS);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, DATA_TTL_LEDGERS, DATA_TTL_LEDGERS);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}
