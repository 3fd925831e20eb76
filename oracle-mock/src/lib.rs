#![no_std]

mod events;

use common::pricefeed::{
    interface::AggregatorTrait,
    types::{OracleError, Round},
};
use events::OracleEvent;
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Env, Symbol};

const DECIMALS: Symbol = symbol_short!("DECIMALS");
const LATEST: Symbol = symbol_short!("LATEST");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Round(u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundEntry {
    pub value: i128,
    pub started_at: u64,
    pub updated_at: u64,
}

#[contract]
pub struct MockOracleContract;

#[contractimpl]
impl AggregatorTrait for MockOracleContract {
    // Seeds the series at round 1. Round 0 is never populated, so lookups
    // against an empty history read back as zeros.
    fn initialize(env: Env, decimals: u32, initial_value: i128) -> Result<(), OracleError> {
        if env.storage().instance().has(&DECIMALS) {
            return Err(OracleError::AlreadyInitialized);
        }

        let now: u64 = env.ledger().timestamp();
        env.storage().instance().set(&DECIMALS, &decimals);
        env.storage().instance().set(&LATEST, &1u64);
        store_round(&env, 1, initial_value, now, now);

        OracleEvent::Initialized(decimals, initial_value).publish(&env);
        Ok(())
    }

    fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&DECIMALS).unwrap_or(0)
    }

    // Interface version of the aggregator this mock stands in for.
    fn version() -> u64 {
        0
    }

    fn latest_value(env: Env) -> i128 {
        let round_id: u64 = latest_round_id(&env);
        read_round(&env, round_id).value
    }

    fn latest_round(env: Env) -> u64 {
        latest_round_id(&env)
    }

    fn latest_timestamp(env: Env) -> u64 {
        let round_id: u64 = latest_round_id(&env);
        read_round(&env, round_id).updated_at
    }

    fn value_at(env: Env, round_id: u64) -> i128 {
        read_round(&env, round_id).value
    }

    fn timestamp_at(env: Env, round_id: u64) -> u64 {
        read_round(&env, round_id).updated_at
    }

    // Missing rounds are not an error: the returned tuple carries zeros and
    // still echoes the requested round id in `answered_in_round`.
    fn get_round_data(env: Env, round_id: u64) -> Round {
        let entry: RoundEntry = read_round(&env, round_id);
        Round {
            round_id,
            value: entry.value,
            started_at: entry.started_at,
            updated_at: entry.updated_at,
            answered_in_round: round_id,
        }
    }

    fn latest_round_data(env: Env) -> Round {
        let round_id: u64 = latest_round_id(&env);
        Self::get_round_data(env, round_id)
    }

    // Steady-state tick: always advances the round counter by exactly 1.
    fn update_value(env: Env, new_value: i128) -> Result<(), OracleError> {
        if !env.storage().instance().has::<Symbol>(&LATEST) {
            return Err(OracleError::NotInitialized);
        }

        let round_id: u64 = latest_round_id(&env) + 1;
        let now: u64 = env.ledger().timestamp();
        store_round(&env, round_id, new_value, now, now);
        env.storage().instance().set(&LATEST, &round_id);

        OracleEvent::ValueUpdated(round_id, new_value).publish(&env);
        Ok(())
    }

    // Fixture injection: writes an arbitrary round and repoints the latest
    // round at it, even backwards. This bypasses the forward-only numbering
    // `update_value` maintains; callers relying on monotonic rounds must not
    // mix the two.
    fn update_round_data(env: Env, round_id: u64, value: i128, updated_at: u64, started_at: u64) {
        store_round(&env, round_id, value, started_at, updated_at);
        env.storage().instance().set(&LATEST, &round_id);

        OracleEvent::RoundOverridden(round_id, value).publish(&env);
    }
}

fn latest_round_id(env: &Env) -> u64 {
    env.storage().instance().get(&LATEST).unwrap_or(0)
}

fn read_round(env: &Env, round_id: u64) -> RoundEntry {
    env.storage()
        .persistent()
        .get(&DataKey::Round(round_id))
        .unwrap_or(RoundEntry {
            value: 0,
            started_at: 0,
            updated_at: 0,
        })
}

fn store_round(env: &Env, round_id: u64, value: i128, started_at: u64, updated_at: u64) {
    env.storage().persistent().set(
        &DataKey::Round(round_id),
        &RoundEntry {
            value,
            started_at,
            updated_at,
        },
    );
}
