use super::*;

fn entry_raider_ids(outcome: &ReplaceQueueOutcome) -> Vec<String> {
    match outcome {
        ReplaceQueueOutcome::Replaced(entries) => {
            entries.iter().map(|e| e.raider.id.clone()).collect()
        }
        ReplaceQueueOutcome::UnknownRaider => panic!("expected Replaced"),
    }
}

/// Tests replacing an absent queue with a fresh ordering.
///
/// Expected: Ok(Replaced) with positions 1..N in the given order
#[tokio::test]
async fn creates_fresh_queue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let first = create_raider(db, &team.id).await?;
    let second = create_raider(db, &team.id).await?;

    let repo = QueueRepository::new(db);
    let outcome = repo
        .replace(&team.id, 16541, &[first.id.clone(), second.id.clone()])
        .await?;

    let ReplaceQueueOutcome::Replaced(entries) = outcome else {
        panic!("expected Replaced");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].position, 1);
    assert_eq!(entries[0].raider.id, first.id);
    assert_eq!(entries[1].position, 2);
    assert_eq!(entries[1].raider.id, second.id);

    Ok(())
}

/// Tests that replacing with the same ordering leaves the queue unchanged.
///
/// Expected: identical entries after a repeated replace
#[tokio::test]
async fn repeated_replace_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let first = create_raider(db, &team.id).await?;
    let second = create_raider(db, &team.id).await?;
    let ids = vec![first.id, second.id];

    let repo = QueueRepository::new(db);
    let once = repo.replace(&team.id, 16541, &ids).await?;
    let twice = repo.replace(&team.id, 16541, &ids).await?;

    assert_eq!(entry_raider_ids(&once), entry_raider_ids(&twice));
    assert_eq!(repo.get(&team.id, 16541).await?.len(), 2);

    Ok(())
}

/// Tests shrinking a queue.
///
/// A shorter replacement drops the missing raiders entirely; positions are
/// renumbered from 1.
///
/// Expected: only the new ordering remains
#[tokio::test]
async fn shrinking_replace_drops_old_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let first = create_raider(db, &team.id).await?;
    let second = create_raider(db, &team.id).await?;

    let repo = QueueRepository::new(db);
    repo.replace(&team.id, 16541, &[first.id, second.id.clone()])
        .await?;
    let outcome = repo.replace(&team.id, 16541, &[second.id.clone()]).await?;

    let ReplaceQueueOutcome::Replaced(entries) = outcome else {
        panic!("expected Replaced");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].position, 1);
    assert_eq!(entries[0].raider.id, second.id);

    Ok(())
}

/// Tests that an unknown raider id rolls the whole replacement back.
///
/// Expected: Ok(UnknownRaider) and the previous queue intact
#[tokio::test]
async fn unknown_raider_rolls_back() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let raider = create_raider(db, &team.id).await?;

    let repo = QueueRepository::new(db);
    repo.replace(&team.id, 16541, &[raider.id.clone()]).await?;

    let outcome = repo
        .replace(&team.id, 16541, &[raider.id.clone(), "missing".to_string()])
        .await?;
    assert_eq!(outcome, ReplaceQueueOutcome::UnknownRaider);

    let entries = repo.get(&team.id, 16541).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].raider.id, raider.id);

    Ok(())
}

/// Tests clearing a queue with an empty replacement.
///
/// Expected: Ok(Replaced) with no entries and no rows left
#[tokio::test]
async fn empty_replace_clears_queue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let raider = create_raider(db, &team.id).await?;

    let repo = QueueRepository::new(db);
    repo.replace(&team.id, 16541, &[raider.id]).await?;
    let outcome = repo.replace(&team.id, 16541, &[]).await?;

    assert_eq!(outcome, ReplaceQueueOutcome::Replaced(Vec::new()));
    assert!(!repo.exists(&team.id, 16541).await?);

    Ok(())
}

/// Tests that queues for other items survive a replacement.
///
/// Expected: the untouched item's queue is unchanged
#[tokio::test]
async fn replace_is_scoped_to_one_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    let raider = create_raider(db, &team.id).await?;
    create_queue_rows(db, &team.id, 19019, &[&raider.id]).await?;

    let repo = QueueRepository::new(db);
    repo.replace(&team.id, 16541, &[raider.id]).await?;

    assert_eq!(repo.get(&team.id, 19019).await?.len(), 1);

    Ok(())
}
