use super::*;

/// Tests persisting a fetched item.
///
/// Expected: Ok with all fields stored and a generated row id
#[tokio::test]
async fn stores_fetched_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateWowItemParams {
            wow_id: 16541,
            addon: Addon::Classic,
            lang: Language::En,
            html_tooltip: "<table>Might of Menethil</table>".to_string(),
            icon_url: "https://wow.zamimg.com/images/wow/icons/large/inv_hammer_05.jpg"
                .to_string(),
            origin_link: "https://www.wowhead.com/classic/item=16541".to_string(),
        })
        .await?;

    assert!(!item.id.is_empty());
    assert_eq!(item.wow_id, 16541);
    assert_eq!(item.addon, Addon::Classic);
    assert_eq!(item.lang, Language::En);
    assert!(item.html_tooltip.contains("Menethil"));

    Ok(())
}
