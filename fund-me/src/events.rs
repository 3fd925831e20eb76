use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum FundMeEvent {
    Initialized(Address, Address, Address),
    Funded(Address, i128),
    Withdrawn(Address, i128),
}

impl FundMeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FundMeEvent::Initialized(..) => stringify!(Initialized),
            FundMeEvent::Funded(..) => stringify!(Funded),
            FundMeEvent::Withdrawn(..) => stringify!(Withdrawn),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            FundMeEvent::Initialized(owner, price_feed, token) => {
                v.push_back(owner.into_val(env));
                v.push_back(price_feed.into_val(env));
                v.push_back(token.into_val(env));
            }
            FundMeEvent::Funded(contributor, amount) => {
                v.push_back(contributor.into_val(env));
                v.push_back(amount.into_val(env));
            }
            FundMeEvent::Withdrawn(owner, amount) => {
                v.push_back(owner.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
