//! Public models for the text-canvas module.

use time::OffsetDateTime;
use uuid::Uuid;

/// Named configuration used to lay text out on a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
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
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Validated data for a new settings record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSettings {
    pub name: String,
    pub min_font_size: i32,
    pub max_font_size: i32,
    pub line_space: i32,
    pub word_space: i32,
    pub canvas_height: i32,
    pub canvas_width: i32,
    pub padding: i32,
}

/// Partial settings data.
///
/// Used both as the raw create input (every field must then be present)
/// and as an in-place update where absent fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsPatch {
    pub name: Option<String>,
    pub min_font_size: Option<i32>,
    pub max_font_size: Option<i32>,
    pub line_space: Option<i32>,
    pub word_space: Option<i32>,
    pub canvas_height: Option<i32>,
    pub canvas_width: Option<i32>,
    pub padding: Option<i32>,
}

impl Settings {
    /// Build a fresh, non-default record from validated input.
    #[must_use]
    pub fn from_new(id: Uuid, new: NewSettings, now: OffsetDateTime) -> Self {
        Self {
            id,
            name: new.name,
            min_font_size: new.min_font_size,
            max_font_size: new.max_font_size,
            line_space: new.line_space,
            word_space: new.word_space,
            canvas_height: new.canvas_height,
            canvas_width: new.canvas_width,
            padding: new.padding,
            is_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the fields present in `patch`.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(v) = patch.min_font_size {
            self.min_font_size = v;
        }
        if let Some(v) = patch.max_font_size {
            self.max_font_size = v;
        }
        if let Some(v) = patch.line_space {
            self.line_space = v;
        }
        if let Some(v) = patch.word_space {
            self.word_space = v;
        }
        if let Some(v) = patch.canvas_height {
            self.canvas_height = v;
        }
        if let Some(v) = patch.canvas_width {
            self.canvas_width = v;
        }
        if let Some(v) = patch.padding {
            self.padding = v;
        }
    }
}

/// Metadata of one generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub id: Uuid,
    /// SHA-256 hex digest naming `<output_path>/<filename>.png`.
    pub filename: String,
    pub user_input: String,
    pub created_at: OffsetDateTime,
    pub accepted: bool,
    pub completed: bool,
    pub settings_id: Option<Uuid>,
}

/// Workflow flag on a canvas that can be switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasFlag {
    Accepted,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings::from_new(
            Uuid::new_v4(),
            NewSettings {
                name: "default".to_owned(),
                min_font_size: 66,
                max_font_size: 114,
                line_space: 40,
                word_space: 20,
                canvas_height: 2430,
                canvas_width: 1770,
                padding: 120,
            },
            OffsetDateTime::UNIX_EPOCH,
        )
    }

    #[test]
    fn from_new_is_not_default() {
        let s = sample();
        assert!(!s.is_default);
        assert_eq!(s.created_at, s.updated_at);
        assert_eq!(s.canvas_width, 1770);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut s = sample();
        s.apply(SettingsPatch {
            name: Some("compact".to_owned()),
            padding: Some(10),
            ..SettingsPatch::default()
        });

        assert_eq!(s.name, "compact");
        assert_eq!(s.padding, 10);
        assert_eq!(s.min_font_size, 66);
        assert_eq!(s.canvas_height, 2430);
    }
}
