use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Settings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Settings::Name).string().not_null())
                    .col(ColumnDef::new(Settings::MinFontSize).integer().not_null())
                    .col(ColumnDef::new(Settings::MaxFontSize).integer().not_null())
                    .col(ColumnDef::new(Settings::LineSpace).integer().not_null())
                    .col(ColumnDef::new(Settings::WordSpace).integer().not_null())
                    .col(ColumnDef::new(Settings::CanvasHeight).integer().not_null())
                    .col(ColumnDef::new(Settings::CanvasWidth).integer().not_null())
                    .col(ColumnDef::new(Settings::Padding).integer().not_null())
                    .col(
                        ColumnDef::new(Settings::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Settings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Settings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Settings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Settings {
    Table,
    Id,
    Name,
    MinFontSize,
    MaxFontSize,
    LineSpace,
    WordSpace,
    CanvasHeight,
    CanvasWidth,
    Padding,
    IsDefault,
    CreatedAt,
    UpdatedAt,
}
