use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct RedeemVoucherRequest {
    pub nick: String,
    pub kod: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedeemVoucherResponse {
    pub success: bool,
    pub message: String,
}

/// Result of a redemption attempt. `NotFound` and `AlreadyClaimed` are
/// expected business outcomes, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedeemOutcome {
    Success,
    NotFound,
    AlreadyClaimed,
}
