use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String};

use shared::errors::ContractError;
use shared::interfaces::{ProposalLedgerClient, UnitRegistryClient};
use shared::types::{Proposal, ProposalStatus};
use shared::validation::{validate_proposal_text, validate_transition};

use crate::events;
use crate::storage::{self, CoordinatorConfig};

#[contract]
pub struct ProposalCoordinatorContract;

// ============================================================================
// Helper Functions
// ============================================================================

fn ledger_client(env: &Env, config: &CoordinatorConfig) -> ProposalLedgerClient<'static> {
    ProposalLedgerClient::new(env, &config.ledger)
}

/// Read a proposal through the ledger, failing with `ProposalNotFound`
/// instead of letting the ledger call trap.
fn load_proposal(ledger: &ProposalLedgerClient, proposal_id: u64) -> Result<Proposal, ContractError> {
    if proposal_id >= ledger.count() {
        return Err(ContractError::ProposalNotFound);
    }
    Ok(ledger.get_proposal(&proposal_id))
}

/// Load a proposal and check that `caller` raised it.
fn load_for_proposer(
    env: &Env,
    caller: &Address,
    proposal_id: u64,
) -> Result<(ProposalLedgerClient<'static>, Proposal), ContractError> {
    caller.require_auth();

    let config = storage::get_config(env)?;
    let ledger = ledger_client(env, &config);
    let proposal = load_proposal(&ledger, proposal_id)?;

    if proposal.proposer != *caller {
        return Err(ContractError::NotProposer);
    }
    Ok((ledger, proposal))
}

#[contractimpl]
impl ProposalCoordinatorContract {
    // ── Initialization ───────────────────────────────────────────────────────

    pub fn initialize(
        env: Env,
        admin: Address,
        ledger: Address,
        registry: Address,
    ) -> Result<(), ContractError> {
        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        authorization::initialize_admin(&env, &admin)?;
        storage::set_config(&env, &CoordinatorConfig { ledger, registry });

        env.events().publish((symbol_short!("init"),), admin);
        Ok(())
    }

    /// Bind the contract trusted to push voting outcomes. Admin only; the
    /// admin may re-bind.
    pub fn set_voting_contract(env: Env, voting: Address) -> Result<(), ContractError> {
        authorization::require_admin(&env)?;
        storage::set_voting_contract(&env, &voting);

        events::voting_contract_bound(&env, &voting);
        Ok(())
    }

    pub fn get_voting_contract(env: Env) -> Result<Address, ContractError> {
        storage::get_voting_contract(&env).ok_or(ContractError::VotingContractNotSet)
    }

    pub fn get_config(env: Env) -> Result<CoordinatorConfig, ContractError> {
        storage::get_config(&env)
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

    // ── Lifecycle ────────────────────────────────────────────────────────────

    /// Raise a proposal on behalf of a registered unit.
    pub fn raise_proposal(
        env: Env,
        proposer: Address,
        title: String,
        description: String,
        suggested_budget: u64,
        proposed_solution: String,
    ) -> Result<u64, ContractError> {
        proposer.require_auth();

        let config = storage::get_config(&env)?;
        let registry = UnitRegistryClient::new(&env, &config.registry);
        if !registry.is_registered(&proposer) {
            return Err(ContractError::UnitNotRegistered);
        }
        validate_proposal_text(&title, &description, &proposed_solution)?;

        let id = ledger_client(&env, &config).create_proposal(
            &env.current_contract_address(),
            &proposer,
            &title,
            &description,
            &suggested_budget,
            &proposed_solution,
        );

        log!(&env, "proposal raised", id, proposer);
        events::proposal_raised(&env, id, &proposer);
        Ok(id)
    }

    /// Open voting. Proposer only; the proposal must still be `Submitted`.
    pub fn start_voting(env: Env, caller: Address, proposal_id: u64) -> Result<(), ContractError> {
        let (ledger, proposal) = load_for_proposer(&env, &caller, proposal_id)?;
        if proposal.status != ProposalStatus::Submitted {
            return Err(ContractError::ProposalNotSubmitted);
        }

        ledger.set_status(
            &env.current_contract_address(),
            &proposal_id,
            &ProposalStatus::VotingOpen,
        );

        events::voting_started(&env, proposal_id, &caller);
        Ok(())
    }

    /// Close voting. Proposer only; the proposal must be `VotingOpen`.
    pub fn close_voting(env: Env, caller: Address, proposal_id: u64) -> Result<(), ContractError> {
        let (ledger, proposal) = load_for_proposer(&env, &caller, proposal_id)?;
        if proposal.status != ProposalStatus::VotingOpen {
            return Err(ContractError::VotingNotOpen);
        }

        ledger.set_status(
            &env.current_contract_address(),
            &proposal_id,
            &ProposalStatus::VotingClosed,
        );

        events::voting_closed(&env, proposal_id, &caller);
        Ok(())
    }

    /// Push the `Accepted`/`Rejected` outcome decided by the voting contract.
    /// Only the bound voting contract may call this.
    pub fn update_status(
        env: Env,
        caller: Address,
        proposal_id: u64,
        status: ProposalStatus,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let voting = storage::get_voting_contract(&env).ok_or(ContractError::VotingContractNotSet)?;
        if caller != voting {
            return Err(ContractError::NotVotingContract);
        }

        let config = storage::get_config(&env)?;
        let ledger = ledger_client(&env, &config);
        let proposal = load_proposal(&ledger, proposal_id)?;
        // Opening and closing stay with the proposer.
        if !status.is_terminal() {
            return Err(ContractError::InvalidTransition);
        }
        validate_transition(proposal.status, status)?;

        ledger.set_status(&env.current_contract_address(), &proposal_id, &status);

        if status.is_terminal() {
            log!(&env, "proposal finalized", proposal_id, status);
            events::proposal_finalized(&env, proposal_id, status);
        }
        Ok(())
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, ContractError> {
        let config = storage::get_config(&env)?;
        load_proposal(&ledger_client(&env, &config), proposal_id)
    }
}
