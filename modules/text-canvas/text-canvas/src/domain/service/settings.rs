use std::sync::Arc;

use text_canvas_sdk::{Settings, SettingsPatch};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repo::SettingsRepository;
use crate::domain::validation::{validate_new_settings, validate_settings_patch};

pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list_settings(&self) -> Result<Vec<Settings>, DomainError> {
        let all = self.repo.list().await?;
        debug!("Listed {} settings", all.len());
        Ok(all)
    }

    #[instrument(skip(self))]
    pub async fn get_default_settings(&self) -> Result<Settings, DomainError> {
        self.repo
            .find_default()
            .await?
            .ok_or(DomainError::NoDefaultSettings)
    }

    /// Validate and persist a new record.
    ///
    /// Nothing reaches the repository when validation fails.
    #[instrument(skip(self, input))]
    pub async fn create_settings(&self, input: SettingsPatch) -> Result<Settings, DomainError> {
        let new = validate_new_settings(&input).map_err(DomainError::Validation)?;
        let settings = Settings::from_new(Uuid::now_v7(), new, OffsetDateTime::now_utc());

        let created = self.repo.insert(settings).await?;
        info!(settings_id = %created.id, "Created settings");
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(settings_id = %id))]
    pub async fn update_settings(
        &self,
        id: Uuid,
        patch: SettingsPatch,
    ) -> Result<Settings, DomainError> {
        let mut current = self
            .repo
            .find(id)
            .await?
            .ok_or_else(|| DomainError::settings_not_found(id))?;

        validate_settings_patch(&patch, &current).map_err(DomainError::Validation)?;
        current.apply(patch);
        current.updated_at = OffsetDateTime::now_utc();

        let updated = self.repo.update(current).await?;
        info!("Updated settings");
        Ok(updated)
    }

    #[instrument(skip(self), fields(settings_id = %id))]
    pub async fn set_default(&self, id: Uuid) -> Result<Settings, DomainError> {
        let chosen = self
            .repo
            .set_default(id)
            .await?
            .ok_or_else(|| DomainError::settings_not_found(id))?;
        info!("Settings marked as default");
        Ok(chosen)
    }

    #[instrument(skip(self), fields(settings_id = %id))]
    pub async fn delete_settings(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::settings_not_found(id));
        }
        info!("Deleted settings");
        Ok(())
    }
}
