use std::sync::Arc;

use text_canvas_sdk::{Canvas, CanvasFlag};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::image_store::ImageStore;
use crate::domain::layout::LayoutParams;
use crate::domain::repo::{CanvasRepository, SettingsRepository};
use crate::domain::surface::Typesetter;
use crate::domain::validation::validate_text;

#[derive(Debug, Clone)]
pub struct CanvasServiceConfig {
    pub max_text_length: usize,
    /// Layout used when no settings record applies.
    pub fallback_layout: LayoutParams,
}

pub struct CanvasService {
    settings: Arc<dyn SettingsRepository>,
    canvases: Arc<dyn CanvasRepository>,
    store: Arc<ImageStore>,
    typesetter: Arc<dyn Typesetter>,
    config: CanvasServiceConfig,
}

impl CanvasService {
    pub fn new(
        settings: Arc<dyn SettingsRepository>,
        canvases: Arc<dyn CanvasRepository>,
        store: Arc<ImageStore>,
        typesetter: Arc<dyn Typesetter>,
        config: CanvasServiceConfig,
    ) -> Self {
        Self {
            settings,
            canvases,
            store,
            typesetter,
            config,
        }
    }

    /// Render `text`, store the PNG and record it.
    ///
    /// Settings resolve from `settings_id`, then the default record, then
    /// the configured fallback layout.
    #[instrument(skip(self, text), fields(settings_id = ?settings_id))]
    pub async fn generate(
        &self,
        text: Option<&str>,
        settings_id: Option<Uuid>,
    ) -> Result<Canvas, DomainError> {
        let text = validate_text(text, self.config.max_text_length)
            .map_err(|v| DomainError::Validation(vec![v]))?;
        let (params, used_settings) = self.resolve_layout(settings_id).await?;

        let typesetter = Arc::clone(&self.typesetter);
        let to_render = text.clone();
        let png = tokio::task::spawn_blocking(move || {
            let surface = typesetter.typeset(&to_render, &params)?;
            debug!(
                width = surface.width(),
                height = surface.height(),
                "Rendered canvas"
            );
            surface.encode_png()
        })
        .await
        .map_err(|e| DomainError::Render(e.to_string()))??;

        let canvas = self.store.save_png(png, &text, used_settings).await?;
        info!(canvas_id = %canvas.id, filename = %canvas.filename, "Generated canvas");
        Ok(canvas)
    }

    async fn resolve_layout(
        &self,
        settings_id: Option<Uuid>,
    ) -> Result<(LayoutParams, Option<Uuid>), DomainError> {
        if let Some(id) = settings_id {
            let settings = self
                .settings
                .find(id)
                .await?
                .ok_or_else(|| DomainError::settings_not_found(id))?;
            return Ok((LayoutParams::from(&settings), Some(settings.id)));
        }

        match self.settings.find_default().await? {
            Some(settings) => Ok((LayoutParams::from(&settings), Some(settings.id))),
            None => {
                debug!("No default settings, using fallback layout");
                Ok((self.config.fallback_layout, None))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list_canvases(&self) -> Result<Vec<Canvas>, DomainError> {
        Ok(self.canvases.list().await?)
    }

    #[instrument(skip(self), fields(canvas_id = %id))]
    pub async fn accept_canvas(&self, id: Uuid) -> Result<Canvas, DomainError> {
        self.flag(id, CanvasFlag::Accepted).await
    }

    #[instrument(skip(self), fields(canvas_id = %id))]
    pub async fn complete_canvas(&self, id: Uuid) -> Result<Canvas, DomainError> {
        self.flag(id, CanvasFlag::Completed).await
    }

    async fn flag(&self, id: Uuid, flag: CanvasFlag) -> Result<Canvas, DomainError> {
        let canvas = self
            .canvases
            .set_flag(id, flag)
            .await?
            .ok_or_else(|| DomainError::canvas_not_found(id))?;
        info!(?flag, "Canvas flag set");
        Ok(canvas)
    }
}
