//! `SeaORM` repository implementation for canvases.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use text_canvas_sdk::{Canvas, CanvasFlag};
use uuid::Uuid;

use super::entity::canvas;
use crate::domain::repo::CanvasRepository;

pub struct SeaOrmCanvasRepository {
    db: DatabaseConnection,
}

impl SeaOrmCanvasRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CanvasRepository for SeaOrmCanvasRepository {
    async fn insert(&self, record: Canvas) -> anyhow::Result<Canvas> {
        let active: canvas::ActiveModel = record.into();
        let model = active.insert(&self.db).await?;
        Ok(model.into())
    }

    async fn list(&self) -> anyhow::Result<Vec<Canvas>> {
        // v7 ids sort by creation time, breaking ties between equal stamps
        let rows = canvas::Entity::find()
            .order_by_desc(canvas::Column::CreatedAt)
            .order_by_desc(canvas::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Canvas::from).collect())
    }

    async fn set_flag(&self, id: Uuid, flag: CanvasFlag) -> anyhow::Result<Option<Canvas>> {
        let column = match flag {
            CanvasFlag::Accepted => canvas::Column::Accepted,
            CanvasFlag::Completed => canvas::Column::Completed,
        };

        let result = canvas::Entity::update_many()
            .col_expr(column, Expr::value(true))
            .filter(canvas::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        let row = canvas::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Into::into))
    }
}
