//! Team factory for creating test team entities.

use entity::enums::Addon;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{hash_password, new_row_id, next_id};

/// Factory for creating test teams with customizable fields.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    password: String,
    addon: Addon,
    is_vip: bool,
    owner_id: String,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"team{n}"` where n is auto-incremented
    /// - addon: `Retail`
    /// - is_vip: `false`
    /// - owner_id: empty — set it, or the insert will fail the FK check
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_row_id(),
            name: format!("team{}", n),
            password: hash_password("teampw"),
            addon: Addon::Retail,
            is_vip: false,
            owner_id: String::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn addon(mut self, addon: Addon) -> Self {
        self.addon = addon;
        self
    }

    pub fn is_vip(mut self, is_vip: bool) -> Self {
        self.is_vip = is_vip;
        self
    }

    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            password: ActiveValue::Set(self.password),
            addon: ActiveValue::Set(self.addon),
            is_vip: ActiveValue::Set(self.is_vip),
            vip_end: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(self.owner_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team owned by the given user with default values.
pub async fn create_team(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).owner_id(owner_id).build().await
}
