use super::*;

/// Tests creating a team.
///
/// Expected: Ok with the stored fields, is_vip false, and no vip_end
#[tokio::test]
async fn creates_new_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            name: "Midnight Guard".to_string(),
            password: "hashed".to_string(),
            addon: Addon::Wotlk,
            owner_id: owner.id.clone(),
        })
        .await?;

    assert!(!team.id.is_empty());
    assert_eq!(team.name, "Midnight Guard");
    assert_eq!(team.addon, Addon::Wotlk);
    assert!(!team.is_vip);
    assert!(team.vip_end.is_none());
    assert_eq!(team.owner_id, owner.id);

    Ok(())
}

/// Tests that a duplicate team name trips the unique constraint.
///
/// Expected: Err carrying a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    TeamFactory::new(db)
        .name("Taken")
        .owner_id(&owner.id)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let result = repo
        .create(CreateTeamParams {
            name: "Taken".to_string(),
            password: "hashed".to_string(),
            addon: Addon::Retail,
            owner_id: owner.id,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
