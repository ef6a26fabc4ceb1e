use super::*;

/// Tests deleting a team.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn removes_team_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = create_team_with_owner(db).await?;

    let repo = TeamRepository::new(db);
    assert!(repo.delete(&stored.id).await?);
    assert!(repo.find_by_id(&stored.id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn deleting_unknown_id_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    assert!(!repo.delete("missing").await?);

    Ok(())
}
