#![no_std]

mod events;
mod price;
mod storage;

use common::fundme::{
    interface::FundMeTrait,
    types::{FundMeDataKey as DataKey, FundMeError as Error},
};
use common::pricefeed::interface::AggregatorClient;
use events::FundMeEvent;
use price::convert_to_usd;
use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, Symbol, Vec};
use storage::{get_data, get_persistent, has_data, store_data, store_persistent};

pub const OWNER: Symbol = symbol_short!("OWNER");
pub const PRICE_FEED: Symbol = symbol_short!("FEED_CA");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
pub const FUNDERS: Symbol = symbol_short!("FUNDERS");

/// 5 USD at the payment token's 7-decimal scale.
pub const MINIMUM_USD: i128 = 5_0000000;

#[contract]
pub struct FundMeContract;

#[contractimpl]
impl FundMeTrait for FundMeContract {
    fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        token: Address,
    ) -> Result<(), Error> {
        owner.require_auth();
        if has_data::<Symbol>(&env, &OWNER) {
            return Err(Error::AlreadyInitialized);
        }

        store_data(&env, &OWNER, &owner);
        store_data(&env, &PRICE_FEED, &price_feed);
        store_data(&env, &PAYMENT_TOKEN, &token);
        store_data(&env, &FUNDERS, &Vec::<Address>::new(&env));

        FundMeEvent::Initialized(owner, price_feed, token).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn minimum() -> i128 {
        MINIMUM_USD
    }

    // Whether the same token amount clears the minimum depends solely on the
    // feed state at call time; the acceptance boundary moves with the price.
    fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), Error> {
        contributor.require_auth();

        let feed: Address = get_data(&env, &PRICE_FEED).ok_or(Error::NotInitialized)?;
        let (value, decimals) = price::latest_price(&env, &feed);
        if convert_to_usd(amount, value, decimals) < MINIMUM_USD {
            return Err(Error::InsufficientContribution);
        }

        let token_addr: Address = get_data(&env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)?;
        token::Client::new(&env, &token_addr).transfer(
            &contributor,
            &env.current_contract_address(),
            &amount,
        );

        let total: i128 =
            get_persistent(&env, &DataKey::Contribution(contributor.clone())).unwrap_or(0);
        store_persistent(
            &env,
            &DataKey::Contribution(contributor.clone()),
            &(total + amount),
        );

        // Appended unconditionally: a repeat contributor shows up once per
        // contribution until the next withdrawal clears the list.
        let mut funders: Vec<Address> = get_data(&env, &FUNDERS).unwrap_or_else(|| Vec::new(&env));
        funders.push_back(contributor.clone());
        store_data(&env, &FUNDERS, &funders);

        FundMeEvent::Funded(contributor, amount).publish(&env);
        Ok(())
    }

    // Simple variant: reads the funder list back from storage on every pass.
    fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        let owner: Address = require_owner(&env, &caller)?;

        let mut index: u32 = 0;
        loop {
            let funders: Vec<Address> = get_data(&env, &FUNDERS).unwrap_or_else(|| Vec::new(&env));
            if index >= funders.len() {
                break;
            }
            clear_contribution(&env, &funders.get(index).unwrap());
            index += 1;
        }

        let amount: i128 = held_balance(&env)?;
        sweep(&env, &owner, amount)
    }

    // Same transition as `withdraw`, with the funder list and the balance
    // read once up front instead of per iteration.
    fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), Error> {
        let owner: Address = require_owner(&env, &caller)?;

        let funders: Vec<Address> = get_data(&env, &FUNDERS).unwrap_or_else(|| Vec::new(&env));
        let amount: i128 = held_balance(&env)?;
        for funder in funders.iter() {
            clear_contribution(&env, &funder);
        }

        sweep(&env, &owner, amount)
    }

    fn owner(env: Env) -> Result<Address, Error> {
        get_data(&env, &OWNER).ok_or(Error::NotInitialized)
    }

    fn contribution_of(env: Env, contributor: Address) -> i128 {
        get_persistent(&env, &DataKey::Contribution(contributor)).unwrap_or(0)
    }

    fn contributor_at(env: Env, index: u32) -> Result<Address, Error> {
        let funders: Vec<Address> = get_data(&env, &FUNDERS).unwrap_or_else(|| Vec::new(&env));
        funders.get(index).ok_or(Error::IndexOutOfRange)
    }

    fn price_feed_version(env: Env) -> Result<u64, Error> {
        let feed: Address = get_data(&env, &PRICE_FEED).ok_or(Error::NotInitialized)?;
        Ok(AggregatorClient::new(&env, &feed).version())
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();

    let owner: Address = get_data(env, &OWNER).ok_or(Error::NotInitialized)?;
    if *caller != owner {
        return Err(Error::NotOwner);
    }
    Ok(owner)
}

fn clear_contribution(env: &Env, funder: &Address) {
    store_persistent(env, &DataKey::Contribution(funder.clone()), &0_i128);
}

fn held_balance(env: &Env) -> Result<i128, Error> {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)?;
    Ok(token::Client::new(env, &token_addr).balance(&env.current_contract_address()))
}

// Clears the funder list and pays the full held balance out to the owner.
// A returned error aborts the invocation, so a failed payout leaves every
// reset made before it unapplied.
fn sweep(env: &Env, owner: &Address, amount: i128) -> Result<(), Error> {
    store_data(env, &FUNDERS, &Vec::<Address>::new(env));

    if amount > 0 {
        let token_addr: Address = get_data(env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)?;
        let token_client: token::Client<'_> = token::Client::new(env, &token_addr);
        if token_client
            .try_transfer(&env.current_contract_address(), owner, &amount)
            .is_err()
        {
            return Err(Error::TransferFailed);
        }
    }

    FundMeEvent::Withdrawn(owner.clone(), amount).publish(env);
    Ok(())
}
