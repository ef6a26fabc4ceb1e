use super::*;

/// Tests replacing a user's password hash.
///
/// Expected: Ok(true), the old password no longer verifies, the new one does
#[tokio::test]
async fn replaces_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = UserFactory::new(db)
        .username("frank")
        .password("old-secret")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let new_hash = test_utils::factory::helpers::hash_password("new-secret");
    let changed = repo.change_password(&stored.id, &new_hash).await?;

    assert!(changed);
    assert!(repo.verify_credentials("frank", "old-secret").await?.is_none());
    assert!(repo.verify_credentials("frank", "new-secret").await?.is_some());

    Ok(())
}

/// Tests changing the password of an unknown user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_user_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let changed = repo.change_password("missing", "hash").await?;

    assert!(!changed);

    Ok(())
}
