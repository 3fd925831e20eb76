use soroban_sdk::{contractclient, Env};

use super::types::{OracleError, Round};

#[contractclient(name = "AggregatorClient")]
pub trait AggregatorTrait {
    fn initialize(env: Env, decimals: u32, initial_value: i128) -> Result<(), OracleError>;
    fn decimals(env: Env) -> u32;
    fn version() -> u64;
    fn latest_value(env: Env) -> i128;
    fn latest_round(env: Env) -> u64;
    fn latest_timestamp(env: Env) -> u64;
    fn value_at(env: Env, round_id: u64) -> i128;
    fn timestamp_at(env: Env, round_id: u64) -> u64;
    fn get_round_data(env: Env, round_id: u64) -> Round;
    fn latest_round_data(env: Env) -> Round;
    fn update_value(env: Env, new_value: i128) -> Result<(), OracleError>;
    fn update_round_data(env: Env, round_id: u64, value: i128, updated_at: u64, started_at: u64);
}
