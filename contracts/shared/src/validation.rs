//! Validation helpers for the governance contracts

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_SOLUTION_LEN, MAX_TITLE_LEN};
use crate::errors::ContractError;
use crate::types::ProposalStatus;
use soroban_sdk::String;

// ===== Text Validation =====

/// Validate that a required text field is present and within `max` bytes
pub fn validate_text(text: &String, max: u32) -> Result<(), ContractError> {
    if text.len() == 0 {
        return Err(ContractError::EmptyText);
    }
    if text.len() > max {
        return Err(ContractError::TextTooLong);
    }
    Ok(())
}

/// Validate the free-text fields of a new proposal
pub fn validate_proposal_text(
    title: &String,
    description: &String,
    solution: &String,
) -> Result<(), ContractError> {
    validate_text(title, MAX_TITLE_LEN)?;
    validate_text(description, MAX_DESCRIPTION_LEN)?;
    validate_text(solution, MAX_SOLUTION_LEN)
}

// ===== Lifecycle Validation =====

pub fn validate_transition(
    current: ProposalStatus,
    next: ProposalStatus,
) -> Result<(), ContractError> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        Err(ContractError::InvalidTransition)
    }
}

/// Add one vote to a running counter
pub fn checked_increment(count: u64) -> Result<u64, ContractError> {
    count.checked_add(1).ok_or(ContractError::Overflow)
}
