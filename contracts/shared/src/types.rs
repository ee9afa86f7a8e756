//! Data types that cross contract boundaries
//!
//! Enum discriminants are part of the stored and on-wire format; do not
//! renumber them.

use soroban_sdk::{contracttype, Address, BytesN, String};

// ===== Proposal Lifecycle =====

/// Governance proposal status
///
/// Strictly forward-moving: `Submitted -> VotingOpen -> VotingClosed`, then
/// one of the terminal states.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Submitted = 0,
    VotingOpen = 1,
    VotingClosed = 2,
    Accepted = 3,
    Rejected = 4,
}

impl ProposalStatus {
    /// The lifecycle transition table
    pub fn can_transition_to(&self, next: ProposalStatus) -> bool {
        matches!(
            (self, next),
            (ProposalStatus::Submitted, ProposalStatus::VotingOpen)
                | (ProposalStatus::VotingOpen, ProposalStatus::VotingClosed)
                | (ProposalStatus::VotingClosed, ProposalStatus::Accepted)
                | (ProposalStatus::VotingClosed, ProposalStatus::Rejected)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProposalStatus::Accepted | ProposalStatus::Rejected)
    }

    /// Reveals (and therefore tally updates) are accepted in these phases
    pub fn accepts_reveals(&self) -> bool {
        matches!(self, ProposalStatus::VotingOpen | ProposalStatus::VotingClosed)
    }
}

/// A proposal record as held by the proposal ledger
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential id, never reused
    pub id: u64,
    pub proposer: Address,
    pub title: String,
    pub description: String,
    pub suggested_budget: u64,
    pub proposed_solution: String,
    pub status: ProposalStatus,
    pub votes_for: u64,
    pub votes_against: u64,
    /// Ledger timestamp at creation
    pub created_at: u64,
}

// ===== Units =====

/// A community unit known to the registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unit {
    pub address: Address,
    pub registered: bool,
    pub voting_rights: bool,
    pub registered_at: u64,
}

// ===== Commit-Reveal Voting =====

/// Ballot choice. Kept without discriminants so it can be stored as
/// `Option<VoteChoice>`; the hashed tag bytes are `constants::CHOICE_TAG_*`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteChoice {
    For,
    Against,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommitStatus {
    None = 0,
    Committed = 1,
    Revealed = 2,
}

/// A voter's commitment on one proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    /// Populated on reveal
    pub choice: Option<VoteChoice>,
    pub secret_hash: BytesN<32>,
    pub status: CommitStatus,
}

/// Running vote counts for a proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tally {
    pub votes_for: u64,
    pub votes_against: u64,
    /// Commitments ever made (revealed or not)
    pub commits: u64,
    pub reveals: u64,
}
