//! `SeaORM` repository implementation for settings.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait, Value,
};
use text_canvas_sdk::Settings;
use uuid::Uuid;

use super::entity::{canvas, settings};
use crate::domain::repo::SettingsRepository;

pub struct SeaOrmSettingsRepository {
    db: DatabaseConnection,
}

impl SeaOrmSettingsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn list(&self) -> anyhow::Result<Vec<Settings>> {
        let rows = settings::Entity::find()
            .order_by_asc(settings::Column::CreatedAt)
            .order_by_asc(settings::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Settings::from).collect())
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<Settings>> {
        let row = settings::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Into::into))
    }

    async fn find_default(&self) -> anyhow::Result<Option<Settings>> {
        let row = settings::Entity::find()
            .filter(settings::Column::IsDefault.eq(true))
            .one(&self.db)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, record: Settings) -> anyhow::Result<Settings> {
        let active: settings::ActiveModel = record.into();
        let model = active.insert(&self.db).await?;
        Ok(model.into())
    }

    async fn update(&self, record: Settings) -> anyhow::Result<Settings> {
        let active: settings::ActiveModel = record.into();
        let model = active.update(&self.db).await?;
        Ok(model.into())
    }

    async fn set_default(&self, id: Uuid) -> anyhow::Result<Option<Settings>> {
        let txn = self.db.begin().await?;

        if settings::Entity::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(None);
        }

        settings::Entity::update_many()
            .col_expr(settings::Column::IsDefault, Expr::value(false))
            .filter(settings::Column::IsDefault.eq(true))
            .exec(&txn)
            .await?;
        settings::Entity::update_many()
            .col_expr(settings::Column::IsDefault, Expr::value(true))
            .filter(settings::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        let chosen = settings::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Record should exist after set_default"))?;
        txn.commit().await?;

        Ok(Some(chosen.into()))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let txn = self.db.begin().await?;

        canvas::Entity::update_many()
            .col_expr(canvas::Column::SettingsId, Expr::value(Value::Uuid(None)))
            .filter(canvas::Column::SettingsId.eq(id))
            .exec(&txn)
            .await?;
        let result = settings::Entity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }
        txn.commit().await?;
        Ok(true)
    }
}
