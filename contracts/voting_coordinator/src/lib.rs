#![no_std]
//! Commit-reveal voting over proposals held in the proposal ledger.
//!
//! A registered unit with voting rights first commits
//! `keccak256(tag || secret)` while voting is open, then reveals the choice
//! and secret while the proposal is open or closed. Each reveal immediately
//! updates the ledger tallies. After the proposer closes voting, the outcome
//! is pushed to the proposal coordinator with `finalize_proposal`.

mod commitment;
mod storage;
mod voting;

pub use storage::VotingConfig;
pub use voting::{VotingCoordinatorContract, VotingCoordinatorContractClient};
