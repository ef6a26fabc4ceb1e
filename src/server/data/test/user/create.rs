use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts a user with the given fields and a
/// generated row id.
///
/// Expected: Ok with all fields stored and a non-empty id
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "$2b$04$fakehashfakehashfakehash".to_string(),
            is_active: false,
        })
        .await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.is_active);

    Ok(())
}

/// Tests that a duplicate username fails on the unique constraint.
///
/// The advisory uniqueness check can be raced; the constraint is the
/// backstop.
///
/// Expected: Err from the database
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("alice").build().await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            password: "hash".to_string(),
            is_active: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
