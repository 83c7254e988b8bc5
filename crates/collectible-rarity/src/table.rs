use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::error::RarityConfigError;

/// Size of the reduced random domain. Raw random values are reduced modulo
/// this before any tier lookup, so tier boundaries are percentages.
pub const RARITY_DOMAIN: u8 = 100;

/// One tier of a collection's rarity table, covering the half-open range
/// `[range_low, range_high)` over the reduced domain.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RarityTier {
    pub name: String,
    pub range_low: u8,
    pub range_high: u8,
}

/// Result of resolving one random draw: the reduced value and the index of
/// the tier whose range contains it. The same reduced value also selects the
/// URI inside the tier pool (see [`uri_index`]), so one draw decides both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub reduced: u8,
    pub tier: usize,
}

/// Ordered tier boundaries for one collection. Construction rejects any table
/// that does not partition `[0, 100)` exactly, so `resolve` is total.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RarityTable {
    tiers: Vec<RarityTier>,
}

impl RarityTable {
    /// Validates that `tiers` form an exhaustive, non-overlapping, ordered
    /// partition of `[0, 100)`.
    pub fn new(tiers: Vec<RarityTier>) -> Result<Self, RarityConfigError> {
        if tiers.is_empty() {
            return Err(RarityConfigError::Empty);
        }
        let mut expected_low = 0u8;
        for (index, tier) in tiers.iter().enumerate() {
            if tier.range_high <= tier.range_low {
                return Err(RarityConfigError::EmptyRange { tier: index });
            }
            if tier.range_high > RARITY_DOMAIN {
                return Err(RarityConfigError::RangeExceedsDomain {
                    tier: index,
                    got: tier.range_high,
                });
            }
            if index == 0 {
                if tier.range_low != 0 {
                    return Err(RarityConfigError::DoesNotStartAtZero {
                        got: tier.range_low,
                    });
                }
            } else if tier.range_low != expected_low {
                return Err(RarityConfigError::GapOrOverlap {
                    tier: index,
                    expected: expected_low,
                    got: tier.range_low,
                });
            }
            expected_low = tier.range_high;
        }
        if expected_low != RARITY_DOMAIN {
            return Err(RarityConfigError::DoesNotEndAtHundred { got: expected_low });
        }
        Ok(Self { tiers })
    }

    /// Maps any random value to its tier. Total and deterministic: the value
    /// is reduced modulo 100 and the partition invariant guarantees exactly
    /// one containing tier.
    pub fn resolve(&self, random_value: u128) -> Resolved {
        let reduced = (random_value % u128::from(RARITY_DOMAIN)) as u8;
        let tier = self
            .tiers
            .iter()
            .position(|t| reduced >= t.range_low && reduced < t.range_high)
            .unwrap_or(self.tiers.len() - 1);
        Resolved { reduced, tier }
    }

    pub fn tiers(&self) -> &[RarityTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// Selects a URI slot inside a tier pool from the already-reduced draw.
/// Pool sizes may differ per tier without a second random draw.
/// `pool_len` must be non-zero; collection construction enforces that.
pub fn uri_index(reduced: u8, pool_len: usize) -> usize {
    usize::from(reduced) % pool_len
}
