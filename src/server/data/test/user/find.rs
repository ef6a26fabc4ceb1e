use super::*;

/// Tests finding a user by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = UserFactory::new(db).username("bob").build().await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(&stored.id).await?.unwrap();

    assert_eq!(user.id, stored.id);
    assert_eq!(user.username, "bob");

    Ok(())
}

/// Tests finding a user by username.
///
/// Expected: Ok(Some) for a stored name, Ok(None) for an unknown one
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("carol").build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_username("carol").await?.is_some());
    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests looking up an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_id_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(repo.find_by_id("missing").await?.is_none());

    Ok(())
}
