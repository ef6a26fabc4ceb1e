//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts: creation,
//! lookup, activation, credential verification, password changes, and deletion.
//! Passwords only ever cross this boundary as bcrypt hashes; verification happens
//! here so plaintext never reaches the persistence code above it.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
};

use crate::server::{
    model::user::{CreateUserParams, UniquenessViolation, User},
    util::id::new_id,
};

/// Outcome of an activation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivateOutcome {
    /// The user was inactive and is now active; carries the user's id.
    Activated(String),
    /// The user exists but was already active.
    AlreadyActive,
    /// No user with that username.
    NotFound,
}

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from parameter model.
    ///
    /// The row id is generated here. The caller is expected to have run
    /// `check_uniqueness` first; a lost race still surfaces as a unique
    /// constraint violation from the database.
    ///
    /// # Arguments
    /// - `param` - User creation parameters with a pre-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::Entity::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(new_id()),
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            is_active: ActiveValue::Set(param.is_active),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Arguments
    /// - `id` - The user's row id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by username.
    ///
    /// # Arguments
    /// - `username` - The user's login name
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Deletes a user row.
    ///
    /// Used by the compensating path of registration and by the delayed
    /// deletion job. Owned teams cascade.
    ///
    /// # Arguments
    /// - `id` - The user's row id
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted, or no matching row existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Activates a user by username.
    ///
    /// Activation is one-way and happens at most once: a second attempt
    /// reports `AlreadyActive` so the caller can reject replayed
    /// registration tokens.
    ///
    /// # Arguments
    /// - `username` - Login name carried by the registration token
    ///
    /// # Returns
    /// - `Ok(ActivateOutcome)` - See `ActivateOutcome`
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn activate(&self, username: &str) -> Result<ActivateOutcome, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        let Some(entity) = entity else {
            return Ok(ActivateOutcome::NotFound);
        };
        if entity.is_active {
            return Ok(ActivateOutcome::AlreadyActive);
        }

        let user_id = entity.id.clone();
        let mut active: entity::user::ActiveModel = entity.into();
        active.is_active = ActiveValue::Set(true);
        entity::prelude::User::update(active).exec(self.db).await?;

        Ok(ActivateOutcome::Activated(user_id))
    }

    /// Checks whether a username/email pair is free, in a single query.
    ///
    /// When both columns collide the username violation is reported; within
    /// one row, a matching email takes precedence over a matching username.
    /// The check is advisory: a concurrent insert can still win the race,
    /// which then fails on the unique constraint.
    ///
    /// # Arguments
    /// - `username` - Candidate login name
    /// - `email` - Candidate email address
    ///
    /// # Returns
    /// - `Ok(None)` - Both values are free
    /// - `Ok(Some(UniquenessViolation))` - Which column collides
    /// - `Err(DbErr)` - Database error during query
    pub async fn check_uniqueness(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UniquenessViolation>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(
                entity::user::Column::Username
                    .eq(username)
                    .or(entity::user::Column::Email.eq(email)),
            )
            .all(self.db)
            .await?;

        let violations: Vec<UniquenessViolation> = entities
            .iter()
            .map(|user| {
                if user.email == email {
                    UniquenessViolation::Email
                } else {
                    UniquenessViolation::Username
                }
            })
            .collect();

        if violations.contains(&UniquenessViolation::Username) {
            Ok(Some(UniquenessViolation::Username))
        } else if violations.contains(&UniquenessViolation::Email) {
            Ok(Some(UniquenessViolation::Email))
        } else {
            Ok(None)
        }
    }

    /// Verifies a username/password pair against active users.
    ///
    /// Inactive accounts and unknown usernames are indistinguishable from a
    /// wrong password. A malformed stored hash also reports no match rather
    /// than erroring, so login can never leak hash state.
    ///
    /// # Arguments
    /// - `username` - Login name
    /// - `password` - Plaintext password to verify
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Credentials valid for an active user
    /// - `Ok(None)` - Unknown user, inactive user, or wrong password
    /// - `Err(DbErr)` - Database error during query
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        let Some(entity) = entity else {
            return Ok(None);
        };

        match bcrypt::verify(password, &entity.password) {
            Ok(true) => Ok(Some(entity.id)),
            Ok(false) | Err(_) => Ok(None),
        }
    }

    /// Replaces a user's password hash.
    ///
    /// # Arguments
    /// - `id` - The user's row id
    /// - `password` - New bcrypt hash
    ///
    /// # Returns
    /// - `Ok(true)` - Password replaced
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn change_password(&self, id: &str, password: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Password,
                sea_orm::sea_query::Expr::value(password),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Reads a user's activation flag.
    ///
    /// # Arguments
    /// - `id` - The user's row id
    ///
    /// # Returns
    /// - `Ok(Some(bool))` - The user's current activation state
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_active(&self, id: &str) -> Result<Option<bool>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(|user| user.is_active))
    }
}
