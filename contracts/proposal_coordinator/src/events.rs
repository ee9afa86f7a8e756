use soroban_sdk::{Address, Env, Symbol};

use shared::types::ProposalStatus;

pub fn proposal_raised(env: &Env, proposal_id: u64, proposer: &Address) {
    env.events().publish(
        (Symbol::new(env, "proposal_raised"), proposal_id),
        proposer.clone(),
    );
}

pub fn voting_started(env: &Env, proposal_id: u64, proposer: &Address) {
    env.events().publish(
        (Symbol::new(env, "voting_started"), proposal_id),
        proposer.clone(),
    );
}

pub fn voting_closed(env: &Env, proposal_id: u64, proposer: &Address) {
    env.events().publish(
        (Symbol::new(env, "voting_closed"), proposal_id),
        proposer.clone(),
    );
}

pub fn proposal_finalized(env: &Env, proposal_id: u64, status: ProposalStatus) {
    env.events().publish(
        (Symbol::new(env, "proposal_finalized"), proposal_id),
        status,
    );
}

pub fn voting_contract_bound(env: &Env, voting: &Address) {
    env.events()
        .publish((Symbol::new(env, "vote_bind"),), voting.clone());
}
