use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Symbol};

use shared::errors::ContractError;
use shared::types::{Proposal, ProposalStatus};
use shared::validation::{checked_increment, validate_proposal_text, validate_transition};

use crate::storage;

/// Single source of truth for proposal records.
///
/// Every mutating entry point takes the calling address, verifies its
/// signature and checks it against the allow-list before touching storage.
#[contract]
pub struct ProposalLedgerContract;

#[contractimpl]
impl ProposalLedgerContract {
    // ── Initialization ───────────────────────────────────────────────────────

    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        authorization::initialize_admin(&env, &admin)?;

        env.events().publish((symbol_short!("init"),), admin);
        Ok(())
    }

    // ── Access Control ───────────────────────────────────────────────────────

    /// Allow `caller` to create proposals and change their state. Admin only.
    pub fn add_authorized_caller(env: Env, caller: Address) -> Result<(), ContractError> {
        authorization::grant_caller(&env, &caller)?;
        env.events().publish((Symbol::new(&env, "caller_add"),), caller);
        Ok(())
    }

    /// Admin only.
    pub fn remove_authorized_caller(env: Env, caller: Address) -> Result<(), ContractError> {
        authorization::revoke_caller(&env, &caller)?;
        env.events().publish((symbol_short!("caller_rm"),), caller);
        Ok(())
    }

    pub fn is_authorized_caller(env: Env, caller: Address) -> bool {
        authorization::is_authorized_caller(&env, &caller)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Ok(authorization::get_admin(&env)?)
    }

    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let previous = authorization::transfer_admin(&env, &new_admin)?;
        env.events()
            .publish((symbol_short!("adm_xfer"),), (previous, new_admin));
        Ok(())
    }

    // ── Proposal Records ─────────────────────────────────────────────────────

    /// Store a new proposal in `Submitted` state and return its id.
    ///
    /// Ids are assigned sequentially from zero.
    pub fn create_proposal(
        env: Env,
        caller: Address,
        proposer: Address,
        title: String,
        description: String,
        suggested_budget: u64,
        proposed_solution: String,
    ) -> Result<u64, ContractError> {
        authorization::require_authorized_caller(&env, &caller)?;
        validate_proposal_text(&title, &description, &proposed_solution)?;

        let id = storage::get_proposal_count(&env);
        let next = id.checked_add(1).ok_or(ContractError::Overflow)?;

        let proposal = Proposal {
            id,
            proposer,
            title,
            description,
            suggested_budget,
            proposed_solution,
            status: ProposalStatus::Submitted,
            votes_for: 0,
            votes_against: 0,
            created_at: env.ledger().timestamp(),
        };

        storage::save_proposal(&env, &proposal);
        storage::set_proposal_count(&env, next);

        log!(&env, "proposal stored", id, caller);
        Ok(id)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, ContractError> {
        if proposal_id >= storage::get_proposal_count(&env) {
            return Err(ContractError::ProposalNotFound);
        }
        storage::get_proposal(&env, proposal_id).ok_or(ContractError::ProposalNotFound)
    }

    /// Move a proposal along its lifecycle. Backward or skipping moves fail
    /// with `InvalidTransition`.
    pub fn set_status(
        env: Env,
        caller: Address,
        proposal_id: u64,
        status: ProposalStatus,
    ) -> Result<(), ContractError> {
        authorization::require_authorized_caller(&env, &caller)?;

        let mut proposal = Self::get_proposal(env.clone(), proposal_id)?;
        let previous = proposal.status;
        validate_transition(previous, status)?;

        proposal.status = status;
        storage::save_proposal(&env, &proposal);

        env.events().publish(
            (Symbol::new(&env, "status_set"), proposal_id),
            (previous, status),
        );
        Ok(())
    }

    /// Count one revealed vote. Only valid while the proposal is open or
    /// closed for voting.
    pub fn increment_votes(
        env: Env,
        caller: Address,
        proposal_id: u64,
        in_favor: bool,
    ) -> Result<(), ContractError> {
        authorization::require_authorized_caller(&env, &caller)?;

        let mut proposal = Self::get_proposal(env.clone(), proposal_id)?;
        if !proposal.status.accepts_reveals() {
            return Err(ContractError::RevealWindowClosed);
        }

        if in_favor {
            proposal.votes_for = checked_increment(proposal.votes_for)?;
        } else {
            proposal.votes_against = checked_increment(proposal.votes_against)?;
        }
        storage::save_proposal(&env, &proposal);

        env.events().publish(
            (symbol_short!("tally"), proposal_id),
            (proposal.votes_for, proposal.votes_against),
        );
        Ok(())
    }

    pub fn count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }
}
