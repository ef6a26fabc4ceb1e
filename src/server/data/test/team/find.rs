use super::*;

/// Tests finding a team by id and by name.
///
/// Expected: Ok(Some) for stored values, Ok(None) for unknown ones
#[tokio::test]
async fn finds_team_by_id_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = create_team_with_owner(db).await?;

    let repo = TeamRepository::new(db);
    let by_id = repo.find_by_id(&stored.id).await?.unwrap();
    assert_eq!(by_id.name, stored.name);

    let by_name = repo.find_by_name(&stored.name).await?.unwrap();
    assert_eq!(by_name.id, stored.id);

    assert!(repo.find_by_id("missing").await?.is_none());
    assert!(repo.find_by_name("missing").await?.is_none());

    Ok(())
}

/// Tests resolving a team name to just its id.
///
/// Expected: Ok(Some(id)) for a stored name, Ok(None) otherwise
#[tokio::test]
async fn resolves_name_to_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = create_team_with_owner(db).await?;

    let repo = TeamRepository::new(db);
    assert_eq!(repo.id_by_name(&stored.name).await?, Some(stored.id));
    assert_eq!(repo.id_by_name("missing").await?, None);

    Ok(())
}

/// Tests the team-with-owner joins used by the ownership checks.
///
/// Expected: Ok(Some) with both halves populated, by id and by name
#[tokio::test]
async fn joins_team_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, stored) = create_team_with_owner(db).await?;

    let repo = TeamRepository::new(db);
    let with_owner = repo.find_with_owner(&stored.id).await?.unwrap();
    assert_eq!(with_owner.team.id, stored.id);
    assert_eq!(with_owner.owner.id, owner.id);

    let by_name = repo.find_by_name_with_owner(&stored.name).await?.unwrap();
    assert_eq!(by_name.owner.username, owner.username);

    assert!(repo.find_with_owner("missing").await?.is_none());

    Ok(())
}

/// Tests loading just the owner of a team.
///
/// Expected: Ok(Some(owner)) for a stored team, Ok(None) for an unknown id
#[tokio::test]
async fn loads_team_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, stored) = create_team_with_owner(db).await?;

    let repo = TeamRepository::new(db);
    let loaded = repo.owner(&stored.id).await?.unwrap();
    assert_eq!(loaded.id, owner.id);

    assert!(repo.owner("missing").await?.is_none());

    Ok(())
}
