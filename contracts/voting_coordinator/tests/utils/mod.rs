#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Bytes, BytesN, Env, String,
};

use proposal_coordinator::{ProposalCoordinatorContract, ProposalCoordinatorContractClient};
use proposal_ledger::{ProposalLedgerContract, ProposalLedgerContractClient};
use shared::types::VoteChoice;
use unit_registry::{UnitRegistryContract, UnitRegistryContractClient};
use voting_coordinator::{VotingCoordinatorContract, VotingCoordinatorContractClient};

/// The four governance contracts deployed and wired the way the deploy
/// script does it.
pub struct TestEnvironment {
    pub env: Env,
    pub admin: Address,
    pub registry: UnitRegistryContractClient<'static>,
    pub ledger: ProposalLedgerContractClient<'static>,
    pub coordinator: ProposalCoordinatorContractClient<'static>,
    pub voting: VotingCoordinatorContractClient<'static>,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(1_700_000_000);

        let admin = Address::generate(&env);

        let registry_id = env.register(UnitRegistryContract, ());
        let ledger_id = env.register(ProposalLedgerContract, ());
        let coordinator_id = env.register(ProposalCoordinatorContract, ());
        let voting_id = env.register(VotingCoordinatorContract, ());

        let registry = UnitRegistryContractClient::new(&env, &registry_id);
        let ledger = ProposalLedgerContractClient::new(&env, &ledger_id);
        let coordinator = ProposalCoordinatorContractClient::new(&env, &coordinator_id);
        let voting = VotingCoordinatorContractClient::new(&env, &voting_id);

        registry.initialize(&admin);
        ledger.initialize(&admin);
        coordinator.initialize(&admin, &ledger_id, &registry_id);
        voting.initialize(&admin, &coordinator_id, &ledger_id, &registry_id);

        ledger.add_authorized_caller(&coordinator_id);
        ledger.add_authorized_caller(&voting_id);
        coordinator.set_voting_contract(&voting_id);

        Self {
            env,
            admin,
            registry,
            ledger,
            coordinator,
            voting,
        }
    }

    /// A fresh address registered as a unit with voting rights.
    pub fn register_unit(&self) -> Address {
        let unit = Address::generate(&self.env);
        self.registry.register(&unit);
        unit
    }

    pub fn raise(&self, proposer: &Address, title: &str, budget: u64) -> u64 {
        self.coordinator.raise_proposal(
            proposer,
            &self.text(title),
            &self.text("Proposal for the residents"),
            &budget,
            &self.text("Gather quotes and start work"),
        )
    }

    pub fn text(&self, s: &str) -> String {
        String::from_str(&self.env, s)
    }

    pub fn secret(&self, s: &str) -> Bytes {
        Bytes::from_slice(&self.env, s.as_bytes())
    }

    pub fn commitment(&self, choice: VoteChoice, s: &str) -> BytesN<32> {
        self.voting.compute_commitment(&choice, &self.secret(s))
    }

    pub fn commit(&self, voter: &Address, proposal_id: u64, choice: VoteChoice, s: &str) {
        self.voting
            .commit_vote(voter, &proposal_id, &self.commitment(choice, s));
    }

    pub fn reveal(&self, voter: &Address, proposal_id: u64, choice: VoteChoice, s: &str) {
        self.voting
            .reveal_vote(voter, &proposal_id, &choice, &self.secret(s));
    }

    pub fn advance_time(&self, seconds: u64) {
        let current = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(current + seconds);
    }
}
