use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InsufficientContribution = 3,
    NotOwner = 4,
    TransferFailed = 5,
    IndexOutOfRange = 6,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FundMeDataKey {
    Contribution(Address), // Cumulative amount funded by one contributor
}
