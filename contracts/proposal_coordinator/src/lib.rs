#![no_std]
//! Proposal lifecycle coordinator.
//!
//! Registered units raise proposals here; the proposer opens and closes
//! voting; the bound voting contract pushes the final outcome. All proposal
//! state lives in the proposal ledger, which must list this contract as an
//! authorized caller.

mod contract;
mod events;
mod storage;

pub use contract::{ProposalCoordinatorContract, ProposalCoordinatorContractClient};
pub use storage::CoordinatorConfig;

#[cfg(test)]
mod test;
