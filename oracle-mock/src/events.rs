use soroban_sdk::{Env, IntoVal, Val, Vec};

pub enum OracleEvent {
    Initialized(u32, i128),
    ValueUpdated(u64, i128),
    RoundOverridden(u64, i128),
}

impl OracleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OracleEvent::Initialized(..) => stringify!(Initialized),
            OracleEvent::ValueUpdated(..) => stringify!(ValueUpdated),
            OracleEvent::RoundOverridden(..) => stringify!(RoundOverridden),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            OracleEvent::Initialized(decimals, initial_value) => {
                v.push_back(decimals.into_val(env));
                v.push_back(initial_value.into_val(env));
            }
            OracleEvent::ValueUpdated(round_id, value) => {
                v.push_back(round_id.into_val(env));
                v.push_back(value.into_val(env));
            }
            OracleEvent::RoundOverridden(round_id, value) => {
                v.push_back(round_id.into_val(env));
                v.push_back(value.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
