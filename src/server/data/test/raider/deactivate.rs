use super::*;

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests soft-deleting a raider.
///
/// Expected: Ok(true) and the raider reads back inactive
#[tokio::test]
async fn clears_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Raider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let raider = create_raider(db, &team.id).await?;

    let repo = RaiderRepository::new(db);
    assert!(repo.deactivate(&raider.id).await?);

    let found = repo.find_by_id(&raider.id).await?.unwrap();
    assert!(!found.is_active);

    Ok(())
}

/// Tests deactivating an unknown id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_id_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Raider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RaiderRepository::new(db);
    assert!(!repo.deactivate("missing").await?);

    Ok(())
}

/// Tests that deactivation leaves the raider's queue slots in place.
///
/// Queue snapshots must keep resolving retired raiders.
///
/// Expected: queue rows still present after deactivation
#[tokio::test]
async fn preserves_queue_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let raider = create_raider(db, &team.id).await?;
    let item = create_wow_item(db, 16541).await?;
    create_queue_rows(db, &team.id, item.wow_id, &[&raider.id]).await?;

    let repo = RaiderRepository::new(db);
    repo.deactivate(&raider.id).await?;

    let remaining = entity::prelude::Queue::find()
        .filter(entity::queue::Column::RaiderId.eq(&raider.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 1);

    Ok(())
}
