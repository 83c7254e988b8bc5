use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum CollectibleError {
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for CollectibleError {
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

impl CollectibleError {
    pub fn free_quota_exhausted() -> Self {
        Self::InvalidState("No more Free Nfts".into())
    }
    pub fn insufficient_mint_fee(deposit: u128, fee: u128) -> Self {
        Self::InsufficientDeposit(format!(
            "Attached deposit {} is less than the mint fee {}",
            deposit, fee
        ))
    }
    pub fn unknown_request(request_id: u64) -> Self {
        Self::NotFound(format!(
            "Unknown or already fulfilled randomness request: {}",
            request_id
        ))
    }
    pub fn only_oracle() -> Self {
        Self::Unauthorized("Only the randomness oracle can fulfill requests".into())
    }
    pub fn token_not_found() -> Self {
        Self::NotFound("Token not found".into())
    }
    pub fn not_owner() -> Self {
        Self::Unauthorized("Not owner".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
