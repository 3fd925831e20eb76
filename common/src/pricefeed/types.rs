use soroban_sdk::{contracterror, contracttype};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
}

/// One observation in the aggregator's round-indexed history.
/// `answered_in_round` echoes the round id that was asked for, including
/// rounds with no recorded data (those carry zero value and timestamps).
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Round {
    pub round_id: u64,
    pub value: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}
