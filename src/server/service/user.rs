//! Account lookups for authenticated callers.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{api::ApiError, AppError},
    model::user::User,
};

/// Service providing user account business logic.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches one account by id.
    ///
    /// # Arguments
    /// - `user_id` - The account's row id
    ///
    /// # Returns
    /// - `Ok(User)` - The account
    /// - `Err(AppError::ApiErr)` - No such user
    pub async fn get_user(&self, user_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::UserNotExists.into())
    }
}
