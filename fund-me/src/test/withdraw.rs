#![cfg(test)]

use super::{create_fund_me_contract, FundMeTest};
use common::fundme::types::FundMeError as Error;
use network_config::{Network, NetworkConfig};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env,
};

#[test]
fn test_withdraw_requires_owner() {
    let test: FundMeTest = FundMeTest::setup();
    test.fund_me_client.contribute(&test.alice, &1_0000000);

    assert_eq!(
        test.fund_me_client.try_withdraw(&test.bob),
        Err(Ok(Error::NotOwner))
    );
    assert_eq!(
        test.fund_me_client.try_cheaper_withdraw(&test.bob),
        Err(Ok(Error::NotOwner))
    );

    // Nothing changed
    assert_eq!(test.fund_me_client.contribution_of(&test.alice), 1_0000000);
    assert_eq!(
        test.token_client.balance(&test.fund_me_client.address),
        1_0000000
    );
}

#[test]
fn test_withdraw_sweeps_everything_to_owner() {
    let test: FundMeTest = FundMeTest::setup();
    test.fund_me_client.contribute(&test.alice, &1_0000000);
    test.fund_me_client.contribute(&test.bob, &2_0000000);
    let owner_before: i128 = test.token_client.balance(&test.owner);

    test.fund_me_client.withdraw(&test.owner);

    assert_eq!(test.token_client.balance(&test.fund_me_client.address), 0);
    assert_eq!(
        test.token_client.balance(&test.owner),
        owner_before + 3_0000000
    );
    assert_eq!(test.fund_me_client.contribution_of(&test.alice), 0);
    assert_eq!(test.fund_me_client.contribution_of(&test.bob), 0);
    assert_eq!(
        test.fund_me_client.try_contributor_at(&0),
        Err(Ok(Error::IndexOutOfRange))
    );
}

#[test]
fn test_cheaper_withdraw_is_equivalent() {
    let simple: FundMeTest = FundMeTest::setup();
    let cheaper: FundMeTest = FundMeTest::setup();

    for test in [&simple, &cheaper] {
        test.fund_me_client.contribute(&test.alice, &1_0000000);
        test.fund_me_client.contribute(&test.bob, &2_0000000);
        test.fund_me_client.contribute(&test.alice, &5_0000000);
    }

    let simple_before: i128 = simple.token_client.balance(&simple.owner);
    let cheaper_before: i128 = cheaper.token_client.balance(&cheaper.owner);

    simple.fund_me_client.withdraw(&simple.owner);
    cheaper.fund_me_client.cheaper_withdraw(&cheaper.owner);

    let simple_payout: i128 = simple.token_client.balance(&simple.owner) - simple_before;
    let cheaper_payout: i128 = cheaper.token_client.balance(&cheaper.owner) - cheaper_before;
    assert_eq!(simple_payout, cheaper_payout);

    for test in [&simple, &cheaper] {
        assert_eq!(test.token_client.balance(&test.fund_me_client.address), 0);
        assert_eq!(test.fund_me_client.contribution_of(&test.alice), 0);
        assert_eq!(test.fund_me_client.contribution_of(&test.bob), 0);
        assert_eq!(
            test.fund_me_client.try_contributor_at(&0),
            Err(Ok(Error::IndexOutOfRange))
        );
    }
}

#[test]
fn test_withdraw_handles_repeat_contributors() {
    let test: FundMeTest = FundMeTest::setup();
    test.fund_me_client.contribute(&test.alice, &1_0000000);
    test.fund_me_client.contribute(&test.alice, &1_0000000);

    test.fund_me_client.cheaper_withdraw(&test.owner);

    assert_eq!(test.fund_me_client.contribution_of(&test.alice), 0);
    assert_eq!(test.token_client.balance(&test.fund_me_client.address), 0);
}

#[test]
fn test_withdraw_with_no_contributions() {
    let test: FundMeTest = FundMeTest::setup();
    let owner_before: i128 = test.token_client.balance(&test.owner);

    test.fund_me_client.withdraw(&test.owner);

    assert_eq!(test.token_client.balance(&test.owner), owner_before);
    assert_eq!(
        test.fund_me_client.try_contributor_at(&0),
        Err(Ok(Error::IndexOutOfRange))
    );
}

#[test]
fn test_failed_payout_rolls_back() {
    let env: Env = Env::default();
    env.mock_all_auths();

    let fund_me_client = create_fund_me_contract(&env);
    let mut config: NetworkConfig = NetworkConfig::new(&env);
    let feed: Address = config.price_feed(Network::Local);

    let owner: Address = Address::generate(&env);
    let alice: Address = Address::generate(&env);

    let token_id: Address = env.register(HaltableToken, ());
    let token_client: HaltableTokenClient<'_> = HaltableTokenClient::new(&env, &token_id);
    token_client.mint(&alice, &10_0000000);

    fund_me_client.initialize(&owner, &feed, &token_id);
    fund_me_client.contribute(&alice, &1_0000000);

    // Once the token stops moving funds, both variants surface
    // TransferFailed and neither reset is observable afterwards.
    token_client.set_halted(&true);
    assert_eq!(
        fund_me_client.try_withdraw(&owner),
        Err(Ok(Error::TransferFailed))
    );
    assert_eq!(
        fund_me_client.try_cheaper_withdraw(&owner),
        Err(Ok(Error::TransferFailed))
    );

    assert_eq!(fund_me_client.contribution_of(&alice), 1_0000000);
    assert_eq!(fund_me_client.contributor_at(&0), alice);
    assert_eq!(token_client.balance(&fund_me_client.address), 1_0000000);
    assert_eq!(token_client.balance(&owner), 0);

    // The payout goes through once transfers resume.
    token_client.set_halted(&false);
    fund_me_client.withdraw(&owner);
    assert_eq!(fund_me_client.contribution_of(&alice), 0);
    assert_eq!(token_client.balance(&fund_me_client.address), 0);
    assert_eq!(token_client.balance(&owner), 1_0000000);
}

#[test]
fn test_funding_resumes_after_withdraw() {
    let test: FundMeTest = FundMeTest::setup();
    test.fund_me_client.contribute(&test.alice, &1_0000000);
    test.fund_me_client.withdraw(&test.owner);

    test.fund_me_client.contribute(&test.bob, &2_0000000);

    assert_eq!(test.fund_me_client.contributor_at(&0), test.bob);
    assert_eq!(test.fund_me_client.contribution_of(&test.bob), 2_0000000);
    assert_eq!(
        test.token_client.balance(&test.fund_me_client.address),
        2_0000000
    );
}

// Minimal token whose transfers can be switched off, to drive the payout
// failure path.

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    Halted = 1,
}

#[contracttype]
#[derive(Clone)]
pub enum TokenKey {
    Balance(Address),
    Halted,
}

#[contract]
pub struct HaltableToken;

#[contractimpl]
impl HaltableToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance: i128 = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&TokenKey::Balance(to), &(balance + amount));
    }

    pub fn set_halted(env: Env, halted: bool) {
        env.storage().instance().set(&TokenKey::Halted, &halted);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&TokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        let halted: bool = env
            .storage()
            .instance()
            .get(&TokenKey::Halted)
            .unwrap_or(false);
        if halted {
            panic_with_error!(&env, TokenError::Halted);
        }

        let from_balance: i128 = Self::balance(env.clone(), from.clone());
        let to_balance: i128 = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&TokenKey::Balance(from), &(from_balance - amount));
        env.storage()
            .instance()
            .set(&TokenKey::Balance(to), &(to_balance + amount));
    }
}
