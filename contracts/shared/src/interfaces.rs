//! Cross-contract interfaces
//!
//! Each trait mirrors the subset of a contract's entry points that other
//! contracts call. `#[contractclient]` generates the `*Client` types; the
//! contracts themselves never implement these traits directly.

use crate::errors::ContractError;
use crate::types::{Proposal, ProposalStatus};
use soroban_sdk::{contractclient, Address, Env, String};

/// Reads used by the coordinators and by out-of-core collaborators
/// (facility booking, feedback, treasury).
#[contractclient(name = "UnitRegistryClient")]
pub trait UnitRegistryInterface {
    fn is_registered(env: Env, unit: Address) -> bool;

    fn has_voting_rights(env: Env, unit: Address) -> bool;
}

#[contractclient(name = "ProposalLedgerClient")]
pub trait ProposalLedgerInterface {
    fn create_proposal(
        env: Env,
        caller: Address,
        proposer: Address,
        title: String,
        description: String,
        suggested_budget: u64,
        proposed_solution: String,
    ) -> Result<u64, ContractError>;

    fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, ContractError>;

    fn set_status(
        env: Env,
        caller: Address,
        proposal_id: u64,
        status: ProposalStatus,
    ) -> Result<(), ContractError>;

    fn increment_votes(
        env: Env,
        caller: Address,
        proposal_id: u64,
        in_favor: bool,
    ) -> Result<(), ContractError>;

    fn count(env: Env) -> u64;
}

#[contractclient(name = "ProposalCoordinatorClient")]
pub trait ProposalCoordinatorInterface {
    fn update_status(
        env: Env,
        caller: Address,
        proposal_id: u64,
        status: ProposalStatus,
    ) -> Result<(), ContractError>;
}
