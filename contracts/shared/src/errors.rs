//! Common error types for the governance contracts
//!
//! Every contract returns the same error enum so that a failure raised deep in
//! a cross-contract call keeps its code when it reaches the original caller.

use authorization::AuthError;
use soroban_sdk::contracterror;

/// Unified error type for the governance contracts
///
/// Error ranges follow the failure taxonomy:
/// - 1-19: Authorization errors (caller lacks the required role)
/// - 20-39: State errors (operation invalid for the current phase)
/// - 40-59: Validation errors (malformed or unknown input)
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // ===== Authorization Errors (1-19) =====
    /// Caller is not the administrator
    Unauthorized = 1,

    /// Caller is not a registered unit
    UnitNotRegistered = 2,

    /// Unit is registered but its voting rights are revoked
    NoVotingRights = 3,

    /// Only the proposer may drive this proposal's lifecycle
    NotProposer = 4,

    /// Caller is not on the ledger's allow-list
    NotAuthorizedCaller = 5,

    /// Caller is not the bound voting contract
    NotVotingContract = 6,

    /// Only the proposer or the administrator may finalize
    NotProposerOrAdmin = 7,

    // ===== State Errors (20-39) =====
    NotInitialized = 20,

    AlreadyInitialized = 21,

    AlreadyRegistered = 22,

    /// Requested status change is not a forward edge of the lifecycle
    InvalidTransition = 23,

    ProposalNotSubmitted = 24,

    VotingNotOpen = 25,

    VotingNotClosed = 26,

    /// Voter already holds a commitment for this proposal
    AlreadyCommitted = 27,

    NotCommitted = 28,

    AlreadyRevealed = 29,

    /// Proposal is neither open nor closed for voting
    RevealWindowClosed = 30,

    VotingContractNotSet = 31,

    // ===== Validation Errors (40-59) =====
    ProposalNotFound = 40,

    /// Revealed choice and secret do not hash to the stored commitment
    HashMismatch = 41,

    EmptyText = 42,

    TextTooLong = 43,

    Overflow = 44,
}

/// Failure classes surfaced to callers
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    State,
    Validation,
}

impl ContractError {
    /// Classify the error by its code range
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            0..=19 => ErrorKind::Authorization,
            20..=39 => ErrorKind::State,
            _ => ErrorKind::Validation,
        }
    }

    /// Get a human-readable description of the error
    pub fn message(&self) -> &'static str {
        match self {
            // Authorization
            ContractError::Unauthorized => "caller is not the administrator",
            ContractError::UnitNotRegistered => "unit not registered",
            ContractError::NoVotingRights => "unit does not have voting rights",
            ContractError::NotProposer => "only the proposer",
            ContractError::NotAuthorizedCaller => "caller not authorized",
            ContractError::NotVotingContract => "only the voting contract",
            ContractError::NotProposerOrAdmin => "only the proposer or administrator",

            // State
            ContractError::NotInitialized => "contract not initialized",
            ContractError::AlreadyInitialized => "contract already initialized",
            ContractError::AlreadyRegistered => "unit already registered",
            ContractError::InvalidTransition => "invalid status transition",
            ContractError::ProposalNotSubmitted => "proposal is not in submitted state",
            ContractError::VotingNotOpen => "voting is not open",
            ContractError::VotingNotClosed => "voting is not closed",
            ContractError::AlreadyCommitted => "vote already committed",
            ContractError::NotCommitted => "no committed vote",
            ContractError::AlreadyRevealed => "vote already revealed",
            ContractError::RevealWindowClosed => "reveal window is closed",
            ContractError::VotingContractNotSet => "voting contract not set",

            // Validation
            ContractError::ProposalNotFound => "invalid proposal id",
            ContractError::HashMismatch => "hash mismatch",
            ContractError::EmptyText => "required text is empty",
            ContractError::TextTooLong => "text exceeds maximum length",
            ContractError::Overflow => "arithmetic overflow",
        }
    }
}

/// Convert authorization errors to contract errors
impl From<AuthError> for ContractError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotInitialized => ContractError::NotInitialized,
            AuthError::AlreadyInitialized => ContractError::AlreadyInitialized,
            AuthError::NotAuthorizedCaller => ContractError::NotAuthorizedCaller,
        }
    }
}
