use serde::{Deserialize, Serialize};
use text_canvas_sdk::{Canvas, Settings, SettingsPatch};
use time::OffsetDateTime;
use uuid::Uuid;

/// REST DTO for settings representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub id: Uuid,
    pub name: String,
    pub min_font_size: i32,
    pub max_font_size: i32,
    pub line_space: i32,
    pub word_space: i32,
    pub canvas_height: i32,
    pub canvas_width: i32,
    pub padding: i32,
    pub is_default: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body of create and update requests. Create requires every field.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsReq {
    pub name: Option<String>,
    pub min_font_size: Option<i32>,
    pub max_font_size: Option<i32>,
    pub line_space: Option<i32>,
    pub word_space: Option<i32>,
    pub canvas_height: Option<i32>,
    pub canvas_width: Option<i32>,
    pub padding: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedDto {
    pub id: Uuid,
}

/// REST DTO for canvas representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasDto {
    pub id: Uuid,
    pub filename: String,
    pub user_input: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub accepted: bool,
    pub completed: bool,
    pub settings_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCanvasReq {
    pub text: Option<String>,
    pub settings_id: Option<Uuid>,
}

impl From<Settings> for SettingsDto {
    fn from(s: Settings) -> Self {
        Self {
            id: s.id,
            name: s.name,
            min_font_size: s.min_font_size,
            max_font_size: s.max_font_size,
            line_space: s.line_space,
            word_space: s.word_space,
            canvas_height: s.canvas_height,
            canvas_width: s.canvas_width,
            padding: s.padding,
            is_default: s.is_default,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

impl From<SettingsReq> for SettingsPatch {
    fn from(req: SettingsReq) -> Self {
        Self {
            name: req.name,
            min_font_size: req.min_font_size,
            max_font_size: req.max_font_size,
            line_space: req.line_space,
            word_space: req.word_space,
            canvas_height: req.canvas_height,
            canvas_width: req.canvas_width,
            padding: req.padding,
        }
    }
}

impl From<Canvas> for CanvasDto {
    fn from(c: Canvas) -> Self {
        Self {
            id: c.id,
            filename: c.filename,
            user_input: c.user_input,
            created_at: c.created_at,
            accepted: c.accepted,
            completed: c.completed,
            settings_id: c.settings_id,
        }
    }
}
