//! Loot queue table.
//!
//! One row is one slot in one team's priority list for one item. Positions
//! within a (team_id, wow_id) group are a contiguous 1..N sequence because
//! queue updates always rewrite the full set.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "queues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub position: i32,
    #[sea_orm(indexed)]
    pub team_id: String,
    pub raider_id: String,
    pub wow_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::raider::Entity",
        from = "Column::RaiderId",
        to = "super::raider::Column::Id"
    )]
    Raider,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::raider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Raider.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
