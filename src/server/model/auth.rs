/// A freshly minted access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Parameters for the registration operation.
#[derive(Debug, Clone)]
pub struct RegistrationParams {
    pub username: String,
    pub email: String,
    pub password: String,
}
