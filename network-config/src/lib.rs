//! Network-keyed selection of the price feed the fund-me contract binds to.
//!
//! Deploy and test tooling asks this crate which aggregator address to use
//! for a given network. Real networks map to a known contract address; the
//! local network gets a freshly registered mock aggregator, seeded once and
//! reused for the life of the process.

use common::pricefeed::interface::AggregatorClient;
use oracle_mock::MockOracleContract;
use soroban_sdk::{Address, Env, String};

pub const MOCK_DECIMALS: u32 = 8;
pub const MOCK_INITIAL_VALUE: i128 = 2_000_0000_0000; // 2000 at 8 decimals

/// Aggregator contract bound on Stellar testnet deployments.
pub const TESTNET_PRICE_FEED: &str = "CAVLP5DH2GJPZMVO7IJY4CVOD5MWEFTJFVPD2YY2FQXOQHRGHK4D6HLP";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Local,
    Testnet,
}

pub struct NetworkConfig {
    env: Env,
    mock_feed: Option<Address>,
}

impl NetworkConfig {
    pub fn new(env: &Env) -> Self {
        NetworkConfig {
            env: env.clone(),
            mock_feed: None,
        }
    }

    /// Price feed address for the given network. On `Local` the mock
    /// aggregator is registered and seeded on first access; every later
    /// lookup returns that same instance.
    pub fn price_feed(&mut self, network: Network) -> Address {
        match network {
            Network::Testnet => {
                Address::from_string(&String::from_str(&self.env, TESTNET_PRICE_FEED))
            }
            Network::Local => self.local_feed(),
        }
    }

    fn local_feed(&mut self) -> Address {
        if let Some(feed) = &self.mock_feed {
            return feed.clone();
        }

        let feed: Address = self.env.register(MockOracleContract, ());
        AggregatorClient::new(&self.env, &feed).initialize(&MOCK_DECIMALS, &MOCK_INITIAL_VALUE);
        self.mock_feed = Some(feed.clone());
        feed
    }
}
