use soroban_sdk::{
    contract, contractimpl, log, symbol_short, Address, Bytes, BytesN, Env, Symbol,
};

use shared::errors::ContractError;
use shared::interfaces::{ProposalCoordinatorClient, ProposalLedgerClient, UnitRegistryClient};
use shared::types::{Commit, CommitStatus, Proposal, ProposalStatus, Tally, VoteChoice};

use crate::commitment;
use crate::storage::{self, VotingConfig};

#[contract]
pub struct VotingCoordinatorContract;

fn load_proposal(env: &Env, config: &VotingConfig, proposal_id: u64) -> Result<Proposal, ContractError> {
    let ledger = ProposalLedgerClient::new(env, &config.ledger);
    if proposal_id >= ledger.count() {
        return Err(ContractError::ProposalNotFound);
    }
    Ok(ledger.get_proposal(&proposal_id))
}

#[contractimpl]
impl VotingCoordinatorContract {
    // ── Initialization ───────────────────────────────────────────────────────

    pub fn initialize(
        env: Env,
        admin: Address,
        coordinator: Address,
        ledger: Address,
        registry: Address,
    ) -> Result<(), ContractError> {
        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        authorization::initialize_admin(&env, &admin)?;
        storage::set_config(
            &env,
            &VotingConfig {
                coordinator,
                ledger,
                registry,
            },
        );

        env.events().publish((symbol_short!("init"),), admin);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<VotingConfig, ContractError> {
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

    // ── Commit Phase ─────────────────────────────────────────────────────────

    /// Record a sealed vote. One commitment per voter per proposal; a second
    /// commit is rejected rather than overwriting the first.
    pub fn commit_vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        commit_hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        voter.require_auth();

        let config = storage::get_config(&env)?;
        let registry = UnitRegistryClient::new(&env, &config.registry);
        if !registry.is_registered(&voter) {
            return Err(ContractError::UnitNotRegistered);
        }
        if !registry.has_voting_rights(&voter) {
            return Err(ContractError::NoVotingRights);
        }

        let proposal = load_proposal(&env, &config, proposal_id)?;
        if proposal.status != ProposalStatus::VotingOpen {
            return Err(ContractError::VotingNotOpen);
        }
        if storage::get_commit(&env, &voter, proposal_id).is_some() {
            return Err(ContractError::AlreadyCommitted);
        }

        let commit = Commit {
            choice: None,
            secret_hash: commit_hash,
            status: CommitStatus::Committed,
        };
        storage::save_commit(&env, &voter, proposal_id, &commit);
        storage::increment_commit_count(&env, proposal_id)?;

        env.events().publish(
            (Symbol::new(&env, "vote_committed"), proposal_id),
            voter,
        );
        Ok(())
    }

    // ── Reveal Phase ─────────────────────────────────────────────────────────

    /// Open a commitment and count the vote.
    ///
    /// Accepted while the proposal is `VotingOpen` or `VotingClosed`. A
    /// choice/secret pair that does not hash to the stored commitment fails
    /// with `HashMismatch` and changes nothing.
    pub fn reveal_vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        choice: VoteChoice,
        secret: Bytes,
    ) -> Result<(), ContractError> {
        voter.require_auth();

        let config = storage::get_config(&env)?;
        let mut commit =
            storage::get_commit(&env, &voter, proposal_id).ok_or(ContractError::NotCommitted)?;
        match commit.status {
            CommitStatus::Committed => {}
            CommitStatus::Revealed => return Err(ContractError::AlreadyRevealed),
            CommitStatus::None => return Err(ContractError::NotCommitted),
        }

        let proposal = load_proposal(&env, &config, proposal_id)?;
        if !proposal.status.accepts_reveals() {
            return Err(ContractError::RevealWindowClosed);
        }
        if !commitment::matches(&env, &commit.secret_hash, choice, &secret) {
            return Err(ContractError::HashMismatch);
        }

        // Effects before the ledger call.
        commit.status = CommitStatus::Revealed;
        commit.choice = Some(choice);
        storage::save_commit(&env, &voter, proposal_id, &commit);
        storage::increment_reveal_count(&env, proposal_id)?;

        ProposalLedgerClient::new(&env, &config.ledger).increment_votes(
            &env.current_contract_address(),
            &proposal_id,
            &(choice == VoteChoice::For),
        );

        log!(&env, "vote revealed", proposal_id, voter);
        env.events().publish(
            (Symbol::new(&env, "vote_revealed"), proposal_id),
            (voter, choice),
        );
        Ok(())
    }

    // ── Finalization ─────────────────────────────────────────────────────────

    /// Decide a closed proposal and push the result to the coordinator.
    ///
    /// Callable by the proposer or the voting admin. Strict majority of
    /// revealed votes accepts; a tie rejects.
    pub fn finalize_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<ProposalStatus, ContractError> {
        caller.require_auth();

        let config = storage::get_config(&env)?;
        let proposal = load_proposal(&env, &config, proposal_id)?;
        if proposal.proposer != caller && !authorization::is_admin(&env, &caller) {
            return Err(ContractError::NotProposerOrAdmin);
        }
        if proposal.status != ProposalStatus::VotingClosed {
            return Err(ContractError::VotingNotClosed);
        }

        let outcome = if proposal.votes_for > proposal.votes_against {
            ProposalStatus::Accepted
        } else {
            ProposalStatus::Rejected
        };

        ProposalCoordinatorClient::new(&env, &config.coordinator).update_status(
            &env.current_contract_address(),
            &proposal_id,
            &outcome,
        );

        log!(&env, "proposal tallied", proposal_id, proposal.votes_for, proposal.votes_against);
        Ok(outcome)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// A voter's commitment; `CommitStatus::None` with a zeroed hash if the
    /// voter never committed.
    pub fn get_user_commit(env: Env, voter: Address, proposal_id: u64) -> Commit {
        storage::get_commit(&env, &voter, proposal_id).unwrap_or_else(|| Commit {
            choice: None,
            secret_hash: BytesN::from_array(&env, &[0u8; 32]),
            status: CommitStatus::None,
        })
    }

    pub fn compute_commitment(env: Env, choice: VoteChoice, secret: Bytes) -> BytesN<32> {
        commitment::compute(&env, choice, &secret)
    }

    pub fn get_tally(env: Env, proposal_id: u64) -> Result<Tally, ContractError> {
        let config = storage::get_config(&env)?;
        let proposal = load_proposal(&env, &config, proposal_id)?;

        Ok(Tally {
            votes_for: proposal.votes_for,
            votes_against: proposal.votes_against,
            commits: storage::get_commit_count(&env, proposal_id),
            reveals: storage::get_reveal_count(&env, proposal_id),
        })
    }
}
