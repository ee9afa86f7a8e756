//! Constants shared across the governance contracts

// ===== Storage Lifetimes (ledgers) =====

/// Proposal, commit and unit records (~10 years at ~5s per ledger)
pub const DATA_TTL_LEDGERS: u32 = 63_072_000;

/// Admin and configuration entries
pub const ADMIN_TTL_LEDGERS: u32 = 63_072_000;

// ===== Proposal Text Limits (bytes) =====

pub const MAX_TITLE_LEN: u32 = 128;

pub const MAX_DESCRIPTION_LEN: u32 = 2_048;

pub const MAX_SOLUTION_LEN: u32 = 2_048;

// ===== Commitments =====

/// Tag byte prefixed to the secret when hashing a `For` vote
pub const CHOICE_TAG_FOR: u8 = 1;

/// Tag byte prefixed to the secret when hashing an `Against` vote
pub const CHOICE_TAG_AGAINST: u8 = 2;
