use soroban_sdk::{Bytes, BytesN, Env};

use shared::constants::{CHOICE_TAG_AGAINST, CHOICE_TAG_FOR};
use shared::types::VoteChoice;

fn choice_tag(choice: VoteChoice) -> u8 {
    match choice {
        VoteChoice::For => CHOICE_TAG_FOR,
        VoteChoice::Against => CHOICE_TAG_AGAINST,
    }
}

/// `keccak256(tag || secret)` where `tag` is a single byte identifying the
/// choice. Clients must hash off-chain with the same layout.
pub fn compute(env: &Env, choice: VoteChoice, secret: &Bytes) -> BytesN<32> {
    let mut payload = Bytes::new(env);
    payload.push_back(choice_tag(choice));
    payload.append(secret);
    env.crypto().keccak256(&payload).to_bytes()
}

pub fn matches(env: &Env, stored: &BytesN<32>, choice: VoteChoice, secret: &Bytes) -> bool {
    compute(env, choice, secret) == *stored
}
