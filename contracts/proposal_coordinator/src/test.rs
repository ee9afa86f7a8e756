#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use proposal_ledger::{ProposalLedgerContract, ProposalLedgerContractClient};
use shared::errors::ContractError;
use shared::types::ProposalStatus;
use unit_registry::{UnitRegistryContract, UnitRegistryContractClient};

use crate::{ProposalCoordinatorContract, ProposalCoordinatorContractClient};

struct Fixture<'a> {
    env: Env,
    coordinator: ProposalCoordinatorContractClient<'a>,
    ledger: ProposalLedgerContractClient<'a>,
    registry: UnitRegistryContractClient<'a>,
    proposer: Address,
    neighbour: Address,
    voting: Address,
}

fn setup<'a>() -> Fixture<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let registry_id = env.register(UnitRegistryContract, ());
    let ledger_id = env.register(ProposalLedgerContract, ());
    let coordinator_id = env.register(ProposalCoordinatorContract, ());

    let registry = UnitRegistryContractClient::new(&env, &registry_id);
    let ledger = ProposalLedgerContractClient::new(&env, &ledger_id);
    let coordinator = ProposalCoordinatorContractClient::new(&env, &coordinator_id);

    registry.initialize(&admin);
    ledger.initialize(&admin);
    coordinator.initialize(&admin, &ledger_id, &registry_id);
    ledger.add_authorized_caller(&coordinator_id);

    // Stands in for the voting contract; auths are mocked.
    let voting = Address::generate(&env);
    coordinator.set_voting_contract(&voting);

    let proposer = Address::generate(&env);
    let neighbour = Address::generate(&env);
    registry.register(&proposer);
    registry.register(&neighbour);

    Fixture {
        env,
        coordinator,
        ledger,
        registry,
        proposer,
        neighbour,
        voting,
    }
}

fn text(env: &Env, s: &str) -> String {
    String::from_str(env, s)
}

fn raise_garden(f: &Fixture) -> u64 {
    f.coordinator.raise_proposal(
        &f.proposer,
        &text(&f.env, "Community Garden"),
        &text(&f.env, "To establish a community garden for all residents."),
        &1000,
        &text(&f.env, "Identify a location, gather volunteers, and plant the garden."),
    )
}

// ── Raising ──────────────────────────────────────────────────────────────────

#[test]
fn test_registered_unit_raises_proposal() {
    let f = setup();

    let id = raise_garden(&f);
    assert_eq!(id, 0);

    let proposal = f.ledger.get_proposal(&id);
    assert_eq!(proposal.proposer, f.proposer);
    assert_eq!(proposal.suggested_budget, 1000);
    assert_eq!(proposal.status, ProposalStatus::Submitted);
    assert_eq!(f.coordinator.get_proposal(&id), proposal);
}

#[test]
fn test_unregistered_unit_cannot_raise() {
    let f = setup();
    let stranger = Address::generate(&f.env);

    let result = f.coordinator.try_raise_proposal(
        &stranger,
        &text(&f.env, "Rooftop Solar"),
        &text(&f.env, "Install panels"),
        &5000,
        &text(&f.env, "Get three quotes"),
    );
    assert_eq!(result, Err(Ok(ContractError::UnitNotRegistered)));
    assert_eq!(f.ledger.count(), 0);
}

#[test]
fn test_raise_with_empty_solution_rejected() {
    let f = setup();

    let result = f.coordinator.try_raise_proposal(
        &f.proposer,
        &text(&f.env, "Gym"),
        &text(&f.env, "New gym facility"),
        &1000,
        &text(&f.env, ""),
    );
    assert_eq!(result, Err(Ok(ContractError::EmptyText)));
}

#[test]
fn test_raise_requires_coordinator_on_allow_list() {
    let f = setup();
    f.ledger
        .remove_authorized_caller(&f.coordinator.address);

    let result = f.coordinator.try_raise_proposal(
        &f.proposer,
        &text(&f.env, "Gym"),
        &text(&f.env, "New gym facility"),
        &1000,
        &text(&f.env, "Buy equipment"),
    );
    assert_eq!(result, Err(Ok(ContractError::NotAuthorizedCaller)));
    assert_eq!(f.ledger.count(), 0);
}

// ── Opening and Closing ──────────────────────────────────────────────────────

#[test]
fn test_proposer_starts_and_closes_voting() {
    let f = setup();
    let id = raise_garden(&f);

    f.coordinator.start_voting(&f.proposer, &id);
    assert_eq!(f.ledger.get_proposal(&id).status, ProposalStatus::VotingOpen);

    f.coordinator.close_voting(&f.proposer, &id);
    assert_eq!(f.ledger.get_proposal(&id).status, ProposalStatus::VotingClosed);
}

#[test]
fn test_only_proposer_can_start_voting() {
    let f = setup();
    let id = raise_garden(&f);

    assert_eq!(
        f.coordinator.try_start_voting(&f.neighbour, &id),
        Err(Ok(ContractError::NotProposer))
    );
    assert_eq!(f.ledger.get_proposal(&id).status, ProposalStatus::Submitted);
}

#[test]
fn test_only_proposer_can_close_voting() {
    let f = setup();
    let id = raise_garden(&f);
    f.coordinator.start_voting(&f.proposer, &id);

    assert_eq!(
        f.coordinator.try_close_voting(&f.neighbour, &id),
        Err(Ok(ContractError::NotProposer))
    );
    assert_eq!(f.ledger.get_proposal(&id).status, ProposalStatus::VotingOpen);
}

#[test]
fn test_start_voting_twice_fails() {
    let f = setup();
    let id = raise_garden(&f);
    f.coordinator.start_voting(&f.proposer, &id);

    assert_eq!(
        f.coordinator.try_start_voting(&f.proposer, &id),
        Err(Ok(ContractError::ProposalNotSubmitted))
    );
}

#[test]
fn test_close_before_open_fails() {
    let f = setup();
    let id = raise_garden(&f);

    assert_eq!(
        f.coordinator.try_close_voting(&f.proposer, &id),
        Err(Ok(ContractError::VotingNotOpen))
    );
}

#[test]
fn test_lifecycle_calls_on_unknown_proposal_fail() {
    let f = setup();

    assert_eq!(
        f.coordinator.try_start_voting(&f.proposer, &3),
        Err(Ok(ContractError::ProposalNotFound))
    );
    assert_eq!(
        f.coordinator.try_get_proposal(&3),
        Err(Ok(ContractError::ProposalNotFound))
    );
}

// ── Outcome Updates ──────────────────────────────────────────────────────────

#[test]
fn test_voting_contract_pushes_outcome() {
    let f = setup();
    let id = raise_garden(&f);
    f.coordinator.start_voting(&f.proposer, &id);
    f.coordinator.close_voting(&f.proposer, &id);

    f.coordinator
        .update_status(&f.voting, &id, &ProposalStatus::Accepted);
    assert_eq!(f.ledger.get_proposal(&id).status, ProposalStatus::Accepted);
}

#[test]
fn test_update_status_rejects_other_callers() {
    let f = setup();
    let id = raise_garden(&f);
    f.coordinator.start_voting(&f.proposer, &id);
    f.coordinator.close_voting(&f.proposer, &id);

    assert_eq!(
        f.coordinator
            .try_update_status(&f.proposer, &id, &ProposalStatus::Accepted),
        Err(Ok(ContractError::NotVotingContract))
    );
    assert_eq!(f.ledger.get_proposal(&id).status, ProposalStatus::VotingClosed);
}

#[test]
fn test_update_status_unknown_proposal() {
    let f = setup();

    assert_eq!(
        f.coordinator
            .try_update_status(&f.voting, &9999, &ProposalStatus::VotingOpen),
        Err(Ok(ContractError::ProposalNotFound))
    );
}

#[test]
fn test_update_status_cannot_skip_closed() {
    let f = setup();
    let id = raise_garden(&f);
    f.coordinator.start_voting(&f.proposer, &id);

    assert_eq!(
        f.coordinator
            .try_update_status(&f.voting, &id, &ProposalStatus::Rejected),
        Err(Ok(ContractError::InvalidTransition))
    );
}

#[test]
fn test_update_status_cannot_open_or_close_voting() {
    let f = setup();
    let id = raise_garden(&f);

    assert_eq!(
        f.coordinator
            .try_update_status(&f.voting, &id, &ProposalStatus::VotingOpen),
        Err(Ok(ContractError::InvalidTransition))
    );
    assert_eq!(f.ledger.get_proposal(&id).status, ProposalStatus::Submitted);

    f.coordinator.start_voting(&f.proposer, &id);
    assert_eq!(
        f.coordinator
            .try_update_status(&f.voting, &id, &ProposalStatus::VotingClosed),
        Err(Ok(ContractError::InvalidTransition))
    );
    assert_eq!(f.ledger.get_proposal(&id).status, ProposalStatus::VotingOpen);
}

#[test]
fn test_update_status_without_binding_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let coordinator_id = env.register(ProposalCoordinatorContract, ());
    let coordinator = ProposalCoordinatorContractClient::new(&env, &coordinator_id);
    coordinator.initialize(&admin, &Address::generate(&env), &Address::generate(&env));

    assert_eq!(
        coordinator.try_get_voting_contract(),
        Err(Ok(ContractError::VotingContractNotSet))
    );
    assert_eq!(
        coordinator.try_update_status(&admin, &0, &ProposalStatus::Accepted),
        Err(Ok(ContractError::VotingContractNotSet))
    );
}

// ── Configuration ────────────────────────────────────────────────────────────

#[test]
fn test_initialize_twice_fails() {
    let f = setup();
    let other = Address::generate(&f.env);

    assert_eq!(
        f.coordinator
            .try_initialize(&other, &f.ledger.address, &f.registry.address),
        Err(Ok(ContractError::AlreadyInitialized))
    );
    let config = f.coordinator.get_config();
    assert_eq!(config.ledger, f.ledger.address);
    assert_eq!(config.registry, f.registry.address);
}

#[test]
fn test_admin_can_rebind_voting_contract() {
    let f = setup();
    let replacement = Address::generate(&f.env);

    f.coordinator.set_voting_contract(&replacement);
    assert_eq!(f.coordinator.get_voting_contract(), replacement);
}
