use super::*;

/// Tests creating a raider on a team.
///
/// Expected: Ok(Created) with the stored fields
#[tokio::test]
async fn creates_new_raider() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Raider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;

    let repo = RaiderRepository::new(db);
    let outcome = repo
        .create(CreateRaiderParams {
            name: "Thundra".to_string(),
            team_id: team.id.clone(),
            class: Class::Shaman,
            is_active: true,
        })
        .await?;

    let CreateRaiderOutcome::Created(raider) = outcome else {
        panic!("expected Created, got {:?}", outcome);
    };
    assert_eq!(raider.name, "Thundra");
    assert_eq!(raider.team_id, team.id);
    assert_eq!(raider.class, Class::Shaman);
    assert!(raider.is_active);

    Ok(())
}

/// Tests the active-uniqueness rule for the (team, name, class) triple.
///
/// Expected: Ok(DuplicateActive) when an active raider with the same triple
/// exists
#[tokio::test]
async fn rejects_active_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Raider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    RaiderFactory::new(db)
        .name("Thundra")
        .team_id(&team.id)
        .class(Class::Shaman)
        .build()
        .await?;

    let repo = RaiderRepository::new(db);
    let outcome = repo
        .create(CreateRaiderParams {
            name: "Thundra".to_string(),
            team_id: team.id,
            class: Class::Shaman,
            is_active: true,
        })
        .await?;

    assert_eq!(outcome, CreateRaiderOutcome::DuplicateActive);

    Ok(())
}

/// Tests that an inactive duplicate does not block re-creation.
///
/// A soft-deleted raider leaves its triple free for a fresh roster entry.
///
/// Expected: Ok(Created)
#[tokio::test]
async fn inactive_duplicate_does_not_block() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Raider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team) = create_team_with_owner(db).await?;
    RaiderFactory::new(db)
        .name("Thundra")
        .team_id(&team.id)
        .class(Class::Shaman)
        .is_active(false)
        .build()
        .await?;

    let repo = RaiderRepository::new(db);
    let outcome = repo
        .create(CreateRaiderParams {
            name: "Thundra".to_string(),
            team_id: team.id,
            class: Class::Shaman,
            is_active: true,
        })
        .await?;

    assert!(matches!(outcome, CreateRaiderOutcome::Created(_)));

    Ok(())
}

/// Tests that the same name/class on a different team is allowed.
///
/// Expected: Ok(Created) for each team
#[tokio::test]
async fn same_triple_on_other_team_is_allowed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .with_table(entity::prelude::Raider)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = create_team_with_owner(db).await?;
    let (_, second) = create_team_with_owner(db).await?;
    RaiderFactory::new(db)
        .name("Thundra")
        .team_id(&first.id)
        .class(Class::Shaman)
        .build()
        .await?;

    let repo = RaiderRepository::new(db);
    let outcome = repo
        .create(CreateRaiderParams {
            name: "Thundra".to_string(),
            team_id: second.id,
            class: Class::Shaman,
            is_active: true,
        })
        .await?;

    assert!(matches!(outcome, CreateRaiderOutcome::Created(_)));

    Ok(())
}
