//! Account lifecycle: registration, email verification, login, password
//! change.
//!
//! Registration is deliberately ordered so that nothing durable exists until
//! the verification email is on its way: uniqueness check, token mint, email
//! send, then the inactive user row, then the delayed cleanup job. A
//! scheduling failure deletes the just-created row again, so no unverified
//! user can linger without a cleanup job pending.

use bcrypt::DEFAULT_COST;
use sea_orm::DatabaseConnection;
use tracing::info;

use entity::enums::Language;

use crate::server::{
    config::AuthSettings,
    data::user::{ActivateOutcome, UserRepository},
    error::{api::ApiError, AppError},
    mailer::{change_password_email, registration_email, Mailer, MailerError},
    model::{
        auth::{RegistrationParams, TokenPair},
        user::{CreateUserParams, UniquenessViolation},
    },
    scheduler::deletion::DeletionTasks,
    token::{TokenCodec, TokenKind},
};

/// Service providing the account lifecycle business logic.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenCodec,
    settings: &'a AuthSettings,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token codec for minting and verification
    /// - `settings` - Auth limits and token lifetimes
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenCodec, settings: &'a AuthSettings) -> Self {
        Self {
            db,
            tokens,
            settings,
        }
    }

    /// Registers a new account pending email verification.
    ///
    /// # Arguments
    /// - `mailer` - Transport for the verification email
    /// - `scheduler` - Scheduler for the delayed cleanup job
    /// - `lang` - Language for the email copy
    /// - `param` - Username, email, and plaintext password
    ///
    /// # Returns
    /// - `Ok(())` - Inactive user created, email sent, cleanup scheduled
    /// - `Err(AppError::ApiErr)` - Username/email taken, or the address
    ///   does not exist
    /// - `Err(AppError)` - Infrastructure failure; no user row remains
    pub async fn register(
        &self,
        mailer: &dyn Mailer,
        scheduler: &dyn DeletionTasks,
        lang: Language,
        param: RegistrationParams,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        match user_repo
            .check_uniqueness(&param.username, &param.email)
            .await?
        {
            Some(UniquenessViolation::Username) => {
                return Err(ApiError::UsernameNotUnique.into());
            }
            Some(UniquenessViolation::Email) => return Err(ApiError::EmailNotUnique.into()),
            None => {}
        }

        let token = self.tokens.create(
            TokenKind::Registration,
            &param.username,
            self.settings.registration_token_ttl,
        )?;

        let (subject, body) = registration_email(lang, &token);
        match mailer.send(&param.email, &subject, &body).await {
            Ok(()) => {}
            Err(MailerError::NonExistentEmail) => return Err(ApiError::EmailNonExistent.into()),
            Err(e) => return Err(e.into()),
        }

        let hash = bcrypt::hash(&param.password, DEFAULT_COST)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let user = user_repo
            .create(CreateUserParams {
                username: param.username,
                email: param.email,
                password: hash,
                is_active: false,
            })
            .await?;

        if let Err(e) = scheduler
            .schedule_user_deletion(&user.id, self.settings.del_inactive_user_after)
            .await
        {
            // Without a pending cleanup job the inactive row would leak.
            user_repo.delete(&user.id).await?;
            return Err(e.into());
        }

        info!("Registered user {} pending verification", user.id);

        Ok(())
    }

    /// Activates an account from its registration token and logs it in.
    ///
    /// # Arguments
    /// - `token` - Registration token from the verification link
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Account activated, fresh access/refresh pair
    /// - `Err(AppError::ApiErr)` - Token invalid, user already active, or
    ///   the pending user row is gone (cleanup fired first)
    pub async fn verify_email(&self, token: &str) -> Result<TokenPair, AppError> {
        let claims = self
            .tokens
            .verify(token, TokenKind::Registration)
            .map_err(|_| ApiError::RegistrationTokenInvalid)?;

        let user_repo = UserRepository::new(self.db);
        match user_repo.activate(&claims.sub).await? {
            ActivateOutcome::Activated(user_id) => self.issue_pair(&user_id),
            ActivateOutcome::AlreadyActive => Err(ApiError::UserIsActive.into()),
            ActivateOutcome::NotFound => Err(ApiError::UserNotExists.into()),
        }
    }

    /// Logs a user in with username and password.
    ///
    /// # Arguments
    /// - `username` - Account username
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Credentials valid, fresh access/refresh pair
    /// - `Err(AppError::ApiErr)` - Wrong pair or inactive account, without
    ///   distinguishing which
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = user_repo.verify_credentials(username, password).await? else {
            return Err(ApiError::InvalidCredentials.into());
        };

        self.issue_pair(&user_id)
    }

    /// Emails the caller a change-password confirmation token.
    ///
    /// # Arguments
    /// - `mailer` - Transport for the confirmation email
    /// - `lang` - Language for the email copy
    /// - `user_id` - The authenticated caller
    ///
    /// # Returns
    /// - `Ok(())` - Token sent to the account's email address
    /// - `Err(AppError::ApiErr)` - Unknown user or non-existent address
    pub async fn request_password_change(
        &self,
        mailer: &dyn Mailer,
        lang: Language,
        user_id: &str,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(ApiError::UserNotExists.into());
        };

        let token = self.tokens.create(
            TokenKind::ChangePassword,
            user_id,
            self.settings.change_password_token_ttl,
        )?;

        let (subject, body) = change_password_email(lang, &token);
        match mailer.send(&user.email, &subject, &body).await {
            Ok(()) => Ok(()),
            Err(MailerError::NonExistentEmail) => Err(ApiError::EmailNonExistent.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Stores a new password under a change-password token.
    ///
    /// # Arguments
    /// - `token` - Change-password token from the confirmation email
    /// - `password` - New plaintext password
    ///
    /// # Returns
    /// - `Ok(())` - Password hash replaced
    /// - `Err(AppError::ApiErr)` - Token invalid or user gone
    pub async fn change_password(&self, token: &str, password: &str) -> Result<(), AppError> {
        let claims = self
            .tokens
            .verify(token, TokenKind::ChangePassword)
            .map_err(|_| ApiError::ChangePasswordTokenInvalid)?;

        let hash = bcrypt::hash(password, DEFAULT_COST)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let user_repo = UserRepository::new(self.db);
        if !user_repo.change_password(&claims.sub, &hash).await? {
            return Err(ApiError::UserNotExists.into());
        }

        Ok(())
    }

    fn issue_pair(&self, user_id: &str) -> Result<TokenPair, AppError> {
        let access_token =
            self.tokens
                .create(TokenKind::Access, user_id, self.settings.access_token_ttl)?;
        let refresh_token =
            self.tokens
                .create(TokenKind::Refresh, user_id, self.settings.refresh_token_ttl)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
