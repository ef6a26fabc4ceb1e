use super::*;

/// Tests grouping a team's queues by item.
///
/// Expected: one group per item ordered by wow_id, entries by position
#[tokio::test]
async fn groups_queues_by_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let first = create_raider(db, &team.id).await?;
    let second = create_raider(db, &team.id).await?;
    create_queue_rows(db, &team.id, 19019, &[&first.id]).await?;
    create_queue_rows(db, &team.id, 16541, &[&second.id, &first.id]).await?;

    let repo = QueueRepository::new(db);
    let queues = repo.get_all_for_team(&team.id).await?;

    assert_eq!(queues.len(), 2);
    assert_eq!(queues[0].wow_id, 16541);
    assert_eq!(queues[0].entries.len(), 2);
    assert_eq!(queues[0].entries[0].raider.id, second.id);
    assert_eq!(queues[1].wow_id, 19019);
    assert_eq!(queues[1].entries.len(), 1);

    Ok(())
}

/// Tests that queues of other teams are excluded.
///
/// Expected: only the asked-for team's groups come back
#[tokio::test]
async fn excludes_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, mine) = create_team_with_owner(db).await?;
    let (_, theirs) = create_team_with_owner(db).await?;
    let my_raider = create_raider(db, &mine.id).await?;
    let their_raider = create_raider(db, &theirs.id).await?;
    create_queue_rows(db, &mine.id, 16541, &[&my_raider.id]).await?;
    create_queue_rows(db, &theirs.id, 16541, &[&their_raider.id]).await?;

    let repo = QueueRepository::new(db);
    let queues = repo.get_all_for_team(&mine.id).await?;

    assert_eq!(queues.len(), 1);
    assert_eq!(queues[0].entries[0].raider.id, my_raider.id);

    Ok(())
}

/// Tests a team with no queues at all.
///
/// Expected: Ok with an empty vec
#[tokio::test]
async fn team_without_queues_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;

    let repo = QueueRepository::new(db);
    assert!(repo.get_all_for_team(&team.id).await?.is_empty());

    Ok(())
}
