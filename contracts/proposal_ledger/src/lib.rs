#![no_std]

mod ledger;
mod storage;

pub use ledger::{ProposalLedgerContract, ProposalLedgerContractClient};
