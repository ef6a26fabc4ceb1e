//! Domain models for user data operations.

/// Registered account.
///
/// `password` is always a bcrypt hash; plaintext never crosses the data
/// layer. Inactive users are pending email verification and are subject to
/// delayed deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Login name, unique across the service.
    pub username: String,
    /// Email address, unique across the service.
    pub email: String,
    /// Bcrypt hash of the user's password.
    pub password: String,
    /// Whether the account has completed email verification.
    pub is_active: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password: entity.password,
            is_active: entity.is_active,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Login name for the new account.
    pub username: String,
    /// Email address for the new account.
    pub email: String,
    /// Bcrypt hash of the chosen password.
    pub password: String,
    /// Initial activation state; registration always passes false.
    pub is_active: bool,
}

/// Which unique column a prospective user collides on.
///
/// When both columns collide, the username violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniquenessViolation {
    Username,
    Email,
}
