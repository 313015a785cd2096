use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Canvases::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Canvases::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Canvases::Filename).string().not_null())
                    .col(ColumnDef::new(Canvases::UserInput).text().not_null())
                    .col(
                        ColumnDef::new(Canvases::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Canvases::Accepted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Canvases::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Canvases::SettingsId).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_canvases_settings")
                            .from(Canvases::Table, Canvases::SettingsId)
                            .to(Settings::Table, Settings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_canvases_settings_id")
                    .table(Canvases::Table)
                    .col(Canvases::SettingsId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Canvases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Canvases {
    Table,
    Id,
    Filename,
    UserInput,
    CreatedAt,
    Accepted,
    Completed,
    SettingsId,
}

#[derive(DeriveIden)]
enum Settings {
    Table,
    Id,
}
