use common::pricefeed::interface::AggregatorClient;
use soroban_sdk::{Address, Env};

/// Latest value and decimal scale reported by the bound aggregator.
pub fn latest_price(env: &Env, feed: &Address) -> (i128, u32) {
    let client: AggregatorClient<'_> = AggregatorClient::new(env, feed);
    let round = client.latest_round_data();
    (round.value, client.decimals())
}

/// USD value of `amount`, at the token's own decimal scale. Truncating
/// integer division, so identical inputs always convert identically.
pub fn convert_to_usd(amount: i128, price: i128, decimals: u32) -> i128 {
    (amount * price) / 10_i128.pow(decimals)
}
