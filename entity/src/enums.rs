//! String-valued enums shared between tables and the API surface.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Game version/edition an item or team is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Addon {
    #[sea_orm(string_value = "retail")]
    Retail,
    #[sea_orm(string_value = "classic")]
    Classic,
    #[sea_orm(string_value = "cata")]
    Cata,
    #[sea_orm(string_value = "tbc")]
    Tbc,
    #[sea_orm(string_value = "wotlk")]
    Wotlk,
}

impl Addon {
    /// URL path segment used by the external item site.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Classic => "classic",
            Self::Cata => "cata",
            Self::Tbc => "tbc",
            Self::Wotlk => "wotlk",
        }
    }
}

/// Raider class tag. Values match the external item site's URL slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
pub enum Class {
    #[sea_orm(string_value = "warrior")]
    Warrior,
    #[sea_orm(string_value = "paladin")]
    Paladin,
    #[sea_orm(string_value = "hunter")]
    Hunter,
    #[sea_orm(string_value = "rogue")]
    Rogue,
    #[sea_orm(string_value = "priest")]
    Priest,
    #[sea_orm(string_value = "shaman")]
    Shaman,
    #[sea_orm(string_value = "mage")]
    Mage,
    #[sea_orm(string_value = "warlock")]
    Warlock,
    #[sea_orm(string_value = "monk")]
    Monk,
    #[sea_orm(string_value = "druid")]
    Druid,
    #[sea_orm(string_value = "demon-hunter")]
    DemonHunter,
    #[sea_orm(string_value = "death-knight")]
    DeathKnight,
    #[sea_orm(string_value = "evoker")]
    Evoker,
}

/// Tooltip language. A given item looked up in another language is a
/// distinct cached row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(4))")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[sea_orm(string_value = "ru")]
    Ru,
    #[sea_orm(string_value = "de")]
    De,
    #[sea_orm(string_value = "en")]
    En,
    #[sea_orm(string_value = "es")]
    Es,
    #[sea_orm(string_value = "fr")]
    Fr,
    #[sea_orm(string_value = "it")]
    It,
    #[sea_orm(string_value = "pt")]
    Pt,
    #[sea_orm(string_value = "ko")]
    Ko,
    #[sea_orm(string_value = "cn")]
    Cn,
}

impl Language {
    /// URL path segment used by the external item site.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Ko => "ko",
            Self::Cn => "cn",
        }
    }
}
