#![no_std]
//! # Shared Condo Governance Library
//!
//! Types, errors, constants and validation helpers shared by the unit
//! registry, proposal ledger, proposal coordinator and voting coordinator
//! contracts, plus the client interfaces they use to call each other.
//!
//! ## Modules
//!
//! - `errors` - The unified error type and its taxonomy
//! - `types` - Proposal, unit and vote types that cross contract boundaries
//! - `constants` - Storage lifetimes and input limits
//! - `validation` - Input checks and the proposal status transition table
//! - `interfaces` - Cross-contract clients
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::types::{Proposal, ProposalStatus};
//! use shared::interfaces::ProposalLedgerClient;
//! ```

pub mod constants;
pub mod errors;
pub mod interfaces;
pub mod types;
pub mod validation;

pub use errors::{ContractError, ErrorKind};
pub use interfaces::{ProposalCoordinatorClient, ProposalLedgerClient, UnitRegistryClient};
pub use types::{Commit, CommitStatus, Proposal, ProposalStatus, Tally, Unit, VoteChoice};
pub use validation::{validate_proposal_text, validate_transition};
