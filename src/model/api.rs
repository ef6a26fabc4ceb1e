use serde::{Deserialize, Serialize};

/// Standard error body returned by every failing endpoint.
///
/// `error_code` is a stable machine-readable identifier that clients branch
/// on; `message` is a human-readable description and not part of the
/// contract.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorDto {
    pub error_code: u16,
    pub message: String,
}

/// Body of the token-rotation response.
///
/// Sent with a 401 status when an expired access token was exchanged via a
/// valid refresh cookie. The fresh access token rides in the body; the fresh
/// refresh token is set as an HttpOnly cookie on the same response.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TokenRotationDto {
    pub error_code: u16,
    pub message: String,
    pub access_token: String,
}
