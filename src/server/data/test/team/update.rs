use super::*;

use chrono::{TimeZone, Utc};

/// Tests a partial update touching only some fields.
///
/// Expected: Ok(Some) with changed fields applied and the rest untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = create_team_with_owner(db).await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(
            &stored.id,
            UpdateTeamParams {
                name: Some("Renamed".to_string()),
                addon: Some(Addon::Cata),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.addon, Addon::Cata);
    assert_eq!(updated.is_vip, stored.is_vip);
    assert_eq!(updated.owner_id, stored.owner_id);

    Ok(())
}

/// Tests granting vip status with an end date.
///
/// Expected: Ok(Some) with is_vip set and vip_end stored
#[tokio::test]
async fn sets_vip_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = create_team_with_owner(db).await?;
    let until = Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap();

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(
            &stored.id,
            UpdateTeamParams {
                is_vip: Some(true),
                vip_end: Some(until),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.is_vip);
    assert_eq!(updated.vip_end, Some(until));

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_team_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(
            "missing",
            UpdateTeamParams {
                name: Some("Nope".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
