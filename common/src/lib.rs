#![no_std]

pub mod fundme {
    pub mod interface;
    pub mod types;
}

pub mod pricefeed {
    pub mod interface;
    pub mod types;
}
