use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::config::TextCanvasConfig;
use crate::domain::image_store::ImageStore;
use crate::domain::service::{CanvasService, CanvasServiceConfig, SettingsService};
use crate::domain::surface::Typesetter;
use crate::infra::render::CosmicTypesetter;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{SeaOrmCanvasRepository, SeaOrmSettingsRepository};

/// Composition root of the text-canvas module: wires repositories,
/// renderer and services, and exposes migrations and REST routes.
#[derive(Clone)]
pub struct TextCanvasModule {
    settings: Arc<SettingsService>,
    canvases: Arc<CanvasService>,
}

impl TextCanvasModule {
    /// Build the module with the cosmic-text renderer.
    ///
    /// Font discovery scans the system font directories, so this blocks.
    #[must_use]
    pub fn new(db: DatabaseConnection, cfg: &TextCanvasConfig) -> Self {
        let typesetter = Arc::new(CosmicTypesetter::new(&cfg.render));
        Self::with_typesetter(db, cfg, typesetter)
    }

    #[must_use]
    pub fn with_typesetter(
        db: DatabaseConnection,
        cfg: &TextCanvasConfig,
        typesetter: Arc<dyn Typesetter>,
    ) -> Self {
        info!(
            output_path = %cfg.render.output_path.display(),
            max_text_length = cfg.max_text_length,
            "Initializing text_canvas module"
        );

        let settings_repo = Arc::new(SeaOrmSettingsRepository::new(db.clone()));
        let canvas_repo = Arc::new(SeaOrmCanvasRepository::new(db));
        let store = Arc::new(ImageStore::new(
            cfg.render.output_path.clone(),
            canvas_repo.clone(),
        ));

        let canvases = Arc::new(CanvasService::new(
            settings_repo.clone(),
            canvas_repo,
            store,
            typesetter,
            CanvasServiceConfig {
                max_text_length: cfg.max_text_length,
                fallback_layout: cfg.render.fallback_layout(),
            },
        ));

        Self {
            settings: Arc::new(SettingsService::new(settings_repo)),
            canvases,
        }
    }

    /// # Errors
    /// Propagates migration failures.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running text_canvas database migrations");
        Migrator::up(db, None).await?;
        info!("text_canvas database migrations completed successfully");
        Ok(())
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering text_canvas REST routes");
        routes::register_routes(router, self.settings.clone(), self.canvases.clone())
    }
}
