use super::*;

/// Tests finding an item by its local row id.
///
/// Expected: Ok(Some) for a stored id, Ok(None) otherwise
#[tokio::test]
async fn finds_item_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = create_wow_item(db, 19019).await?;

    let repo = ItemRepository::new(db);
    let item = repo.find_by_id(&stored.id).await?.unwrap();
    assert_eq!(item.wow_id, 19019);

    assert!(repo.find_by_id("missing").await?.is_none());

    Ok(())
}

/// Tests the logical (wow_id, addon, lang) lookup.
///
/// The same game item cached for a different edition or language is a
/// distinct row, so the lookup must match on the full key.
///
/// Expected: Ok(Some) only for the exact key
#[tokio::test]
async fn lookup_matches_full_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    WowItemFactory::new(db)
        .wow_id(19019)
        .addon(Addon::Classic)
        .lang(Language::En)
        .build()
        .await?;
    WowItemFactory::new(db)
        .wow_id(19019)
        .addon(Addon::Classic)
        .lang(Language::De)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    assert!(repo
        .find_by_lookup(19019, Addon::Classic, Language::En)
        .await?
        .is_some());
    assert!(repo
        .find_by_lookup(19019, Addon::Classic, Language::De)
        .await?
        .is_some());
    assert!(repo
        .find_by_lookup(19019, Addon::Retail, Language::En)
        .await?
        .is_none());
    assert!(repo
        .find_by_lookup(19019, Addon::Classic, Language::Fr)
        .await?
        .is_none());

    Ok(())
}
