mod builder;
mod types;

mod contract;
mod mint;
pub(crate) mod nep171;

pub use contract::*;
pub use mint::*;

pub(crate) const STANDARD: &str = "collectible";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const MINT: &str = "MINT_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
