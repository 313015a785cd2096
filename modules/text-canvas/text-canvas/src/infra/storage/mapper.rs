//! Entity to domain model mappers.

use sea_orm::ActiveValue::Set;
use text_canvas_sdk::{Canvas, Settings};

use super::entity::{canvas, settings};

impl From<settings::Model> for Settings {
    fn from(model: settings::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            min_font_size: model.min_font_size,
            max_font_size: model.max_font_size,
            line_space: model.line_space,
            word_space: model.word_space,
            canvas_height: model.canvas_height,
            canvas_width: model.canvas_width,
            padding: model.padding,
            is_default: model.is_default,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Every column set, for inserts and full overwrites.
impl From<Settings> for settings::ActiveModel {
    fn from(s: Settings) -> Self {
        Self {
            id: Set(s.id),
            name: Set(s.name),
            min_font_size: Set(s.min_font_size),
            max_font_size: Set(s.max_font_size),
            line_space: Set(s.line_space),
            word_space: Set(s.word_space),
            canvas_height: Set(s.canvas_height),
            canvas_width: Set(s.canvas_width),
            padding: Set(s.padding),
            is_default: Set(s.is_default),
            created_at: Set(s.created_at),
            updated_at: Set(s.updated_at),
        }
    }
}

impl From<canvas::Model> for Canvas {
    fn from(model: canvas::Model) -> Self {
        Self {
            id: model.id,
            filename: model.filename,
            user_input: model.user_input,
            created_at: model.created_at,
            accepted: model.accepted,
            completed: model.completed,
            settings_id: model.settings_id,
        }
    }
}

impl From<Canvas> for canvas::ActiveModel {
    fn from(c: Canvas) -> Self {
        Self {
            id: Set(c.id),
            filename: Set(c.filename),
            user_input: Set(c.user_input),
            created_at: Set(c.created_at),
            accepted: Set(c.accepted),
            completed: Set(c.completed),
            settings_id: Set(c.settings_id),
        }
    }
}
