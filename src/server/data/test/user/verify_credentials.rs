use super::*;

/// Tests verifying a correct username/password pair.
///
/// Expected: Ok(Some(id)) for the matching active user
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = UserFactory::new(db)
        .username("grace")
        .password("correct horse")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let id = repo.verify_credentials("grace", "correct horse").await?;

    assert_eq!(id, Some(stored.id));

    Ok(())
}

/// Tests a wrong password.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("henry")
        .password("right")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.verify_credentials("henry", "wrong").await?.is_none());

    Ok(())
}

/// Tests that an inactive user cannot log in even with the right password.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("iris")
        .password("secret")
        .is_active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.verify_credentials("iris", "secret").await?.is_none());

    Ok(())
}

/// Tests an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(repo.verify_credentials("nobody", "secret").await?.is_none());

    Ok(())
}
