use async_trait::async_trait;
use text_canvas_sdk::{Canvas, CanvasFlag, Settings};
use uuid::Uuid;

/// Persistence of settings records.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// All records, oldest first.
    async fn list(&self) -> anyhow::Result<Vec<Settings>>;

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<Settings>>;

    async fn find_default(&self) -> anyhow::Result<Option<Settings>>;

    async fn insert(&self, settings: Settings) -> anyhow::Result<Settings>;

    /// Overwrite every column of an existing record.
    async fn update(&self, settings: Settings) -> anyhow::Result<Settings>;

    /// Atomically make `id` the only default record.
    ///
    /// Returns `None` without touching any row when `id` does not exist.
    async fn set_default(&self, id: Uuid) -> anyhow::Result<Option<Settings>>;

    /// Delete a record and detach the canvases referencing it.
    ///
    /// Returns `false` when `id` does not exist.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

/// Persistence of canvas metadata.
#[async_trait]
pub trait CanvasRepository: Send + Sync {
    async fn insert(&self, canvas: Canvas) -> anyhow::Result<Canvas>;

    /// All records, newest first.
    async fn list(&self) -> anyhow::Result<Vec<Canvas>>;

    /// Switch a workflow flag on. Returns `None` when `id` does not exist.
    async fn set_flag(&self, id: Uuid, flag: CanvasFlag) -> anyhow::Result<Option<Canvas>>;
}
