//! Migrator for the ads schema.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_app_ads;

pub use m20240101_000001_create_app_ads::TITLE_INDEX;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_app_ads::Migration)]
    }
}
