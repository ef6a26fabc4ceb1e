//! External item-lookup API client.
//!
//! Items unknown to the local database are fetched from the wowhead XML
//! endpoint, parsed, and handed back to the resolver for persistence. The
//! client sits behind the `ItemApi` trait so the resolver can be tested
//! with a counting stub instead of live HTTP.

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

use entity::enums::{Addon, Language};

#[derive(Error, Debug)]
pub enum ItemApiError {
    /// HTTP request to the item site failed.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The item site returned a 200 response that is not well-formed XML.
    #[error("Failed to parse item XML: {0}")]
    Parse(String),
}

/// An item as fetched from the external API, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedItem {
    pub wow_id: i32,
    pub addon: Addon,
    pub lang: Language,
    pub html_tooltip: String,
    pub icon_url: String,
    pub origin_link: String,
}

/// Read-only lookup against the external item database.
#[async_trait]
pub trait ItemApi: Send + Sync {
    /// Fetches one item.
    ///
    /// # Returns
    /// - `Ok(Some(item))` - The site knows the item
    /// - `Ok(None)` - The site answered but has no such item
    /// - `Err(_)` - Transport or parse failure
    async fn get_item(
        &self,
        wow_id: i32,
        addon: Addon,
        lang: Language,
    ) -> Result<Option<FetchedItem>, ItemApiError>;
}

/// Client for the wowhead `item=<id>&xml` endpoint.
pub struct WowheadApi {
    client: reqwest::Client,
    base_url: String,
    icon_base_url: String,
}

impl WowheadApi {
    pub fn new(client: reqwest::Client, base_url: &str, icon_base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            icon_base_url: icon_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the lookup URL for one item.
    ///
    /// Retail and English are the site's defaults and are expressed by
    /// omitting the path segment rather than naming it.
    fn item_url(&self, wow_id: i32, addon: Addon, lang: Language) -> String {
        let mut url = self.base_url.clone();
        if addon != Addon::Retail {
            url.push('/');
            url.push_str(addon.slug());
        }
        if lang != Language::En {
            url.push('/');
            url.push_str(lang.slug());
        }
        url.push_str(&format!("/item={wow_id}&xml"));
        url
    }

    fn icon_url(&self, icon: &str) -> String {
        format!("{}/{}.jpg", self.icon_base_url, icon)
    }
}

#[async_trait]
impl ItemApi for WowheadApi {
    async fn get_item(
        &self,
        wow_id: i32,
        addon: Addon,
        lang: Language,
    ) -> Result<Option<FetchedItem>, ItemApiError> {
        let url = self.item_url(wow_id, addon, lang);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response.text().await?;
        let parsed = match parse_item_xml(&body)? {
            Some(parsed) => parsed,
            None => return Ok(None),
        };

        Ok(Some(FetchedItem {
            wow_id,
            addon,
            lang,
            html_tooltip: parsed.html_tooltip,
            icon_url: self.icon_url(&parsed.icon),
            origin_link: parsed.origin_link,
        }))
    }
}

/// Fields extracted from the `<item>` element.
#[derive(Debug, Default, PartialEq, Eq)]
struct ParsedItem {
    html_tooltip: String,
    icon: String,
    origin_link: String,
}

/// Pulls `htmlTooltip`, `icon` and `link` out of the response XML.
///
/// A well-formed response without an `<item>` element (the site's way of
/// saying "no such item") yields `Ok(None)`. Tooltip markup arrives inside
/// CDATA sections, so both text and CDATA events are collected.
fn parse_item_xml(xml: &str) -> Result<Option<ParsedItem>, ItemApiError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut item = ParsedItem::default();
    let mut found_item = false;
    let mut in_item = false;
    let mut current: Option<Field> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ItemApiError::Parse(e.to_string()))?;
        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"item" => {
                    found_item = true;
                    in_item = true;
                }
                b"htmlTooltip" if in_item => current = Some(Field::HtmlTooltip),
                b"icon" if in_item => current = Some(Field::Icon),
                b"link" if in_item => current = Some(Field::OriginLink),
                _ => {}
            },
            Event::Text(e) => {
                if let Some(field) = current {
                    let text = e
                        .unescape()
                        .map_err(|e| ItemApiError::Parse(e.to_string()))?;
                    item.field_mut(field).push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(field) = current {
                    let text = reader
                        .decoder()
                        .decode(&e)
                        .map_err(|e| ItemApiError::Parse(e.to_string()))?;
                    item.field_mut(field).push_str(&text);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"item" => in_item = false,
                b"htmlTooltip" | b"icon" | b"link" => current = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if found_item {
        Ok(Some(item))
    } else {
        Ok(None)
    }
}

#[derive(Clone, Copy)]
enum Field {
    HtmlTooltip,
    Icon,
    OriginLink,
}

impl ParsedItem {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::HtmlTooltip => &mut self.html_tooltip,
            Field::Icon => &mut self.icon,
            Field::OriginLink => &mut self.origin_link,
        }
    }
}
