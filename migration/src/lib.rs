pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_user_table;
mod m20260110_000002_create_team_table;
mod m20260110_000003_create_raider_table;
mod m20260110_000004_create_wow_item_table;
mod m20260110_000005_create_queue_table;
mod m20260110_000006_create_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_user_table::Migration),
            Box::new(m20260110_000002_create_team_table::Migration),
            Box::new(m20260110_000003_create_raider_table::Migration),
            Box::new(m20260110_000004_create_wow_item_table::Migration),
            Box::new(m20260110_000005_create_queue_table::Migration),
            Box::new(m20260110_000006_create_log_table::Migration),
        ]
    }
}
