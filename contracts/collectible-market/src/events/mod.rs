mod builder;
mod types;

mod market;

pub use market::*;

pub(crate) const STANDARD: &str = "collectible";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const MARKET: &str = "MARKET_UPDATE";
