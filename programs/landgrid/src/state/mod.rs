pub mod land_config;
pub mod land_map;
pub mod seed_pool;
pub mod campaign;
pub mod claim_receipt;

pub use land_config::*;
pub use land_map::*;
pub use seed_pool::*;
pub use campaign::*;
pub use claim_receipt::*;
