use super::*;

/// Tests loading a queue ordered by position.
///
/// Rows are inserted out of order to prove the ordering comes from the
/// query, not insertion.
///
/// Expected: entries sorted by ascending position with raider detail
#[tokio::test]
async fn returns_entries_in_position_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let first = create_raider(db, &team.id).await?;
    let second = create_raider(db, &team.id).await?;

    use test_utils::factory::queue::QueueFactory;
    QueueFactory::new(db)
        .position(2)
        .team_id(&team.id)
        .raider_id(&second.id)
        .wow_id(16541)
        .build()
        .await?;
    QueueFactory::new(db)
        .position(1)
        .team_id(&team.id)
        .raider_id(&first.id)
        .wow_id(16541)
        .build()
        .await?;

    let repo = QueueRepository::new(db);
    let entries = repo.get(&team.id, 16541).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].position, 1);
    assert_eq!(entries[0].raider.name, first.name);
    assert_eq!(entries[1].position, 2);
    assert_eq!(entries[1].raider.name, second.name);

    Ok(())
}

/// Tests loading a queue that was never created.
///
/// Expected: Ok with an empty vec
#[tokio::test]
async fn absent_queue_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;

    let repo = QueueRepository::new(db);
    assert!(repo.get(&team.id, 16541).await?.is_empty());
    assert!(!repo.exists(&team.id, 16541).await?);

    Ok(())
}
