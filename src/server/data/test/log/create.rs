use super::*;

/// Tests appending a log row.
///
/// Expected: Ok with the snapshot stored and a creation timestamp set
#[tokio::test]
async fn appends_log_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_loot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = create_team_with_owner(db).await?;

    let repo = LogRepository::new(db);
    let before = chrono::Utc::now();
    let log = repo
        .create(CreateLogParams {
            team_id: team.id.clone(),
            user_id: owner.id.clone(),
            wow_id: 16541,
            queue: r#"[{"position":1,"raider":{"id":"r1"}}]"#.to_string(),
        })
        .await?;

    assert_eq!(log.team_id, team.id);
    assert_eq!(log.user_id, owner.id);
    assert_eq!(log.wow_id, 16541);
    assert!(log.queue.contains("position"));
    assert!(log.created_at >= before);

    Ok(())
}
