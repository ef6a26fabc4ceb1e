//! Preferred-language extractor.
//!
//! The frontend stores the user's language choice in a `language` cookie.
//! The cookie is a display preference, so a missing or unrecognized value
//! silently falls back to English rather than failing the request.

use axum::{extract::FromRequestParts, http::request::Parts};

use entity::enums::Language;

use crate::server::{middleware::cookie_value, state::AppState};

pub struct Lang(pub Language);

const LANGUAGE_COOKIE: &str = "language";

fn parse_language(value: &str) -> Option<Language> {
    match value {
        "ru" => Some(Language::Ru),
        "de" => Some(Language::De),
        "en" => Some(Language::En),
        "es" => Some(Language::Es),
        "fr" => Some(Language::Fr),
        "it" => Some(Language::It),
        "pt" => Some(Language::Pt),
        "ko" => Some(Language::Ko),
        "cn" => Some(Language::Cn),
        _ => None,
    }
}

impl FromRequestParts<AppState> for Lang {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let lang = cookie_value(&parts.headers, LANGUAGE_COOKIE)
            .and_then(|value| parse_language(&value))
            .unwrap_or(Language::En);

        Ok(Self(lang))
    }
}
