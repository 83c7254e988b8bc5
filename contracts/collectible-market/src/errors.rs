use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum MarketError {
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MarketError {
    pub fn not_owner() -> Self {
        Self::Unauthorized("Not owner".into())
    }
    pub fn not_listed() -> Self {
        Self::NotFound("Nft not listed".into())
    }
    pub fn already_listed() -> Self {
        Self::InvalidState("Nft already listed".into())
    }
    pub fn price_must_be_positive() -> Self {
        Self::InvalidInput("Price must be above 0".into())
    }
    pub fn price_not_met(deposit: u128, price: u128) -> Self {
        Self::InsufficientDeposit(format!(
            "Price not met: attached {} for a listing at {}",
            deposit, price
        ))
    }
    pub fn no_proceeds() -> Self {
        Self::NotFound("No proceeds".into())
    }
}
