use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::layout::LayoutParams;

/// Configuration of the text-canvas module (`modules.text_canvas.config`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextCanvasConfig {
    /// Upper bound on the characters accepted by the generate endpoint.
    pub max_text_length: usize,
    pub render: RenderConfig,
}

impl Default for TextCanvasConfig {
    fn default() -> Self {
        Self {
            max_text_length: 2000,
            render: RenderConfig::default(),
        }
    }
}

/// Rendering defaults.
///
/// The font-size bounds and canvas geometry form the layout used when a
/// generate request names no settings and no record is marked default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory receiving `<sha256>.png` files.
    pub output_path: PathBuf,
    pub min_font_size: i32,
    pub max_font_size: i32,
    pub base_font_family: String,
    /// Weight variants picked at random for each word.
    pub font_weights: Vec<FontWeight>,
    /// Extra directory scanned for font files next to the system fonts.
    pub fonts_dir: Option<PathBuf>,
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub padding: i32,
    pub line_space: i32,
    pub word_space: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("./assets/images"),
            min_font_size: 24,
            max_font_size: 38,
            base_font_family: "RobotoSlab".to_owned(),
            font_weights: FontWeight::ALL.to_vec(),
            fonts_dir: None,
            canvas_width: 1770,
            canvas_height: 2430,
            padding: 120,
            line_space: 40,
            word_space: 20,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn fallback_layout(&self) -> LayoutParams {
        LayoutParams {
            min_font_size: self.min_font_size,
            max_font_size: self.max_font_size,
            line_space: self.line_space,
            word_space: self.word_space,
            canvas_height: self.canvas_height,
            canvas_width: self.canvas_width,
            padding: self.padding,
        }
    }
}

/// Font weight variants of the base family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Black,
    Bold,
    ExtraBold,
    ExtraLight,
    Light,
    Medium,
}

impl FontWeight {
    pub const ALL: [FontWeight; 7] = [
        FontWeight::Regular,
        FontWeight::Black,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::Medium,
    ];

    /// CSS/OpenType numeric weight.
    #[must_use]
    pub const fn numeric(self) -> u16 {
        match self {
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}
