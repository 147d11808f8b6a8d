#![allow(ambiguous_glob_reexports)]

pub mod create_land_map;
pub mod create_seed_pool;
pub mod initialize;
pub mod update_config;
pub mod submit_random_words;
pub mod batch_mint;
pub mod delegate_mint;
pub mod create_campaign;
pub mod update_campaign;
pub mod whitelist_claim;

pub use create_land_map::*;
pub use create_seed_pool::*;
pub use initialize::*;
pub use update_config::*;
pub use submit_random_words::*;
pub use batch_mint::*;
pub use delegate_mint::*;
pub use create_campaign::*;
pub use update_campaign::*;
pub use whitelist_claim::*;
