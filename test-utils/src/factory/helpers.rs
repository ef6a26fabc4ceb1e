//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique usernames, team names etc. in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUIDv7 row id, matching the application's id scheme.
pub fn new_row_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Hashes a password with a low bcrypt cost suitable for tests.
pub fn hash_password(password: &str) -> String {
    // DEFAULT_COST makes test suites crawl; 4 is the bcrypt minimum.
    bcrypt::hash(password, 4).expect("bcrypt hash")
}

/// Creates a team with its owning user in one call.
///
/// # Returns
/// - `Ok((owner, team))` - Created user and team entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::team::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::TeamFactory::new(db)
        .owner_id(&owner.id)
        .build()
        .await?;
    Ok((owner, team))
}
