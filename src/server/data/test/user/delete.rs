use super::*;

/// Tests deleting a user row.
///
/// Expected: the row is gone afterwards
#[tokio::test]
async fn removes_user_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = UserFactory::new(db).username("gone").build().await?;

    let repo = UserRepository::new(db);
    repo.delete(&stored.id).await?;

    assert!(repo.find_by_id(&stored.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok, deletion is a no-op
#[tokio::test]
async fn deleting_unknown_id_is_ok() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.delete("missing").await?;

    Ok(())
}
