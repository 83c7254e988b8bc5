/// Rejected tier table configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RarityConfigError {
    Empty,
    EmptyRange { tier: usize },
    DoesNotStartAtZero { got: u8 },
    GapOrOverlap { tier: usize, expected: u8, got: u8 },
    DoesNotEndAtHundred { got: u8 },
    RangeExceedsDomain { tier: usize, got: u8 },
}

impl std::fmt::Display for RarityConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tier table must contain at least one tier"),
            Self::EmptyRange { tier } => write!(f, "tier {tier} has an empty range"),
            Self::DoesNotStartAtZero { got } => {
                write!(f, "first tier must start at 0, got {got}")
            }
            Self::GapOrOverlap {
                tier,
                expected,
                got,
            } => write!(
                f,
                "tier {tier} must start at {expected} to continue the partition, got {got}"
            ),
            Self::DoesNotEndAtHundred { got } => {
                write!(f, "last tier must end at 100, got {got}")
            }
            Self::RangeExceedsDomain { tier, got } => {
                write!(f, "tier {tier} ends at {got}, beyond the [0,100) domain")
            }
        }
    }
}

impl std::error::Error for RarityConfigError {}
