//! Rarity tier table for the collectible protocol.
//! Zero NEAR SDK dependency — usable on-chain and off-chain.

mod error;
mod table;

pub use error::RarityConfigError;
pub use table::{RarityTable, RarityTier, Resolved, uri_index};
