use soroban_sdk::{contractclient, Address, Env};

use super::types::FundMeError;

#[contractclient(name = "FundMeClient")]
pub trait FundMeTrait {
    fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        token: Address,
    ) -> Result<(), FundMeError>;
    fn version() -> u32;
    fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), FundMeError>;
    fn withdraw(env: Env, caller: Address) -> Result<(), FundMeError>;
    fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), FundMeError>;
    fn owner(env: Env) -> Result<Address, FundMeError>;
    fn minimum() -> i128;
    fn contribution_of(env: Env, contributor: Address) -> i128;
    fn contributor_at(env: Env, index: u32) -> Result<Address, FundMeError>;
    fn price_feed_version(env: Env) -> Result<u64, FundMeError>;
}
