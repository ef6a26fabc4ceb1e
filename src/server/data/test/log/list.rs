use super::*;

use chrono::{Duration, Utc};

/// Tests listing a team's log newest first.
///
/// Expected: rows ordered by descending created_at
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = create_team_with_owner(db).await?;
    let base = Utc::now();
    LogFactory::new(db)
        .team_id(&team.id)
        .user_id(&owner.id)
        .wow_id(1)
        .created_at(base - Duration::hours(2))
        .build()
        .await?;
    LogFactory::new(db)
        .team_id(&team.id)
        .user_id(&owner.id)
        .wow_id(2)
        .created_at(base)
        .build()
        .await?;
    LogFactory::new(db)
        .team_id(&team.id)
        .user_id(&owner.id)
        .wow_id(3)
        .created_at(base - Duration::hours(1))
        .build()
        .await?;

    let repo = LogRepository::new(db);
    let logs = repo.list(&team.id, LogFilter::default()).await?;

    let wow_ids: Vec<i32> = logs.iter().map(|l| l.wow_id).collect();
    assert_eq!(wow_ids, vec![2, 3, 1]);

    Ok(())
}

/// Tests filtering the log by item.
///
/// Expected: only rows for the given wow_id
#[tokio::test]
async fn filters_by_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = create_team_with_owner(db).await?;
    for wow_id in [16541, 16541, 19019] {
        LogFactory::new(db)
            .team_id(&team.id)
            .user_id(&owner.id)
            .wow_id(wow_id)
            .build()
            .await?;
    }

    let repo = LogRepository::new(db);
    let logs = repo
        .list(
            &team.id,
            LogFilter {
                wow_id: Some(16541),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l.wow_id == 16541));

    Ok(())
}

/// Tests limit and offset paging.
///
/// Expected: a one-row page starting after the newest row
#[tokio::test]
async fn pages_with_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = create_team_with_owner(db).await?;
    let base = Utc::now();
    for (i, wow_id) in [1, 2, 3].into_iter().enumerate() {
        LogFactory::new(db)
            .team_id(&team.id)
            .user_id(&owner.id)
            .wow_id(wow_id)
            .created_at(base + Duration::minutes(i as i64))
            .build()
            .await?;
    }

    let repo = LogRepository::new(db);
    let page = repo
        .list(
            &team.id,
            LogFilter {
                limit: Some(1),
                offset: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].wow_id, 2);

    Ok(())
}

/// Tests that another team's rows never leak into the listing.
///
/// Expected: only rows for the asked-for team
#[tokio::test]
async fn scopes_to_one_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, mine) = create_team_with_owner(db).await?;
    let (other_owner, theirs) = create_team_with_owner(db).await?;
    LogFactory::new(db)
        .team_id(&mine.id)
        .user_id(&owner.id)
        .build()
        .await?;
    LogFactory::new(db)
        .team_id(&theirs.id)
        .user_id(&other_owner.id)
        .build()
        .await?;

    let repo = LogRepository::new(db);
    let logs = repo.list(&mine.id, LogFilter::default()).await?;

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].team_id, mine.id);

    Ok(())
}
