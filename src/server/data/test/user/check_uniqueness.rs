use super::*;

/// Tests the all-clear case.
///
/// Expected: Ok(None) when neither username nor email is taken
#[tokio::test]
async fn free_pair_has_no_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let violation = repo
        .check_uniqueness("fresh-name", "fresh@example.com")
        .await?;

    assert_eq!(violation, None);

    Ok(())
}

/// Tests a username-only collision.
///
/// Expected: Ok(Some(Username))
#[tokio::test]
async fn taken_username_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("taken")
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let violation = repo.check_uniqueness("taken", "fresh@example.com").await?;

    assert_eq!(violation, Some(UniquenessViolation::Username));

    Ok(())
}

/// Tests an email-only collision.
///
/// Expected: Ok(Some(Email))
#[tokio::test]
async fn taken_email_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("holder")
        .email("held@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let violation = repo.check_uniqueness("fresh-name", "held@example.com").await?;

    assert_eq!(violation, Some(UniquenessViolation::Email));

    Ok(())
}

/// Tests the tie-break when two different users hold the username and the
/// email.
///
/// Expected: Ok(Some(Username)) - the username violation wins
#[tokio::test]
async fn username_wins_when_both_collide_across_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("name-holder")
        .email("a@example.com")
        .build()
        .await?;
    UserFactory::new(db)
        .username("email-holder")
        .email("b@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let violation = repo.check_uniqueness("name-holder", "b@example.com").await?;

    assert_eq!(violation, Some(UniquenessViolation::Username));

    Ok(())
}

/// Tests the tie-break when one row holds both the username and the email.
///
/// Within one row the email match takes precedence, mirroring how the
/// conflict is classified column by column.
///
/// Expected: Ok(Some(Email))
#[tokio::test]
async fn email_wins_when_one_row_holds_both() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("both-holder")
        .email("both@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let violation = repo.check_uniqueness("both-holder", "both@example.com").await?;

    assert_eq!(violation, Some(UniquenessViolation::Email));

    Ok(())
}
