//! Create `app_ads` table.
//!
//! The classified ads resource. `title` is unique and indexed; `created_at`
//! is filled by the database.
use sea_orm_migration::{prelude::*, schema::*};

pub const TITLE_INDEX: &str = "ix_app_ads_title";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppAds::Table)
                    .if_not_exists()
                    .col(pk_auto(AppAds::Id))
                    .col(string(AppAds::Title))
                    .col(string_null(AppAds::Description))
                    .col(date_time(AppAds::CreatedAt).default(Expr::current_timestamp()))
                    .col(string(AppAds::Owner))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(TITLE_INDEX)
                    .table(AppAds::Table)
                    .col(AppAds::Title)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppAds::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppAds {
    Table,
    Id,
    Title,
    Description,
    CreatedAt,
    Owner,
}
