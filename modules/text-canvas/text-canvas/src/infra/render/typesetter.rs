use cosmic_text::{
    Attrs, Buffer, CacheKeyFlags, Command, Family, FontSystem, Metrics, Shaping, SwashCache,
    Weight, fontdb,
};
use parking_lot::Mutex;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};
use tracing::{debug, info, warn};

use super::surface::PixmapSurface;
use crate::config::{FontWeight, RenderConfig};
use crate::domain::error::DomainError;
use crate::domain::layout::{LayoutParams, PlacedWord, TextMeasure, layout_words};
use crate::domain::surface::{DrawingSurface, Typesetter};

const LINE_HEIGHT_RATIO: f32 = 1.2;

struct FontState {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

/// Shapes words with cosmic-text and fills their glyph outlines in black.
pub struct CosmicTypesetter {
    fonts: Mutex<FontState>,
    /// Resolved base family, `None` when it is not installed.
    family: Option<String>,
    weights: Vec<FontWeight>,
}

impl CosmicTypesetter {
    /// Load system fonts plus `fonts_dir` and resolve the base family.
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = &config.fonts_dir {
            db.load_fonts_dir(dir);
        }

        let family = db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name))
            .find(|name| name.eq_ignore_ascii_case(&config.base_font_family))
            .cloned();
        match &family {
            Some(name) => info!(family = %name, faces = db.len(), "Font family resolved"),
            None => warn!(
                family = %config.base_font_family,
                "Font family not installed, falling back to sans-serif"
            ),
        }

        Self {
            fonts: Mutex::new(FontState {
                font_system: FontSystem::new_with_locale_and_db("en".to_owned(), db),
                swash_cache: SwashCache::new(),
            }),
            family,
            weights: config.font_weights.clone(),
        }
    }

    fn attrs(&self, weight: FontWeight) -> Attrs<'_> {
        let family = self
            .family
            .as_deref()
            .map_or(Family::SansSerif, Family::Name);
        Attrs::new()
            .family(family)
            .weight(Weight(weight.numeric()))
            .cache_key_flags(CacheKeyFlags::DISABLE_HINTING)
    }

    fn shape(
        &self,
        fonts: &mut FontState,
        word: &str,
        font_size: f32,
        weight: FontWeight,
    ) -> Buffer {
        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_RATIO);
        let mut buffer = Buffer::new(&mut fonts.font_system, metrics);
        buffer.set_text(
            &mut fonts.font_system,
            word,
            &self.attrs(weight),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut fonts.font_system, false);
        buffer
    }

    fn draw_word(&self, fonts: &mut FontState, pixmap: &mut Pixmap, word: &PlacedWord) {
        let buffer = self.shape(fonts, &word.text, word.font_size, word.weight);
        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 255);
        paint.anti_alias = true;

        for run in buffer.layout_runs() {
            for glyph in run.glyphs {
                let physical = glyph.physical((word.x, word.y), 1.0);
                let Some(commands) = fonts
                    .swash_cache
                    .get_outline_commands(&mut fonts.font_system, physical.cache_key)
                else {
                    continue;
                };

                // font outlines are y-up
                let mut pb = PathBuilder::new();
                for cmd in commands {
                    match *cmd {
                        Command::MoveTo(p) => pb.move_to(p.x, -p.y),
                        Command::LineTo(p) => pb.line_to(p.x, -p.y),
                        Command::QuadTo(c, e) => pb.quad_to(c.x, -c.y, e.x, -e.y),
                        Command::CurveTo(c1, c2, e) => {
                            pb.cubic_to(c1.x, -c1.y, c2.x, -c2.y, e.x, -e.y);
                        }
                        Command::Close => pb.close(),
                    }
                }
                let Some(path) = pb.finish() else {
                    continue;
                };

                let gx = word.x + glyph.x + glyph.font_size * glyph.x_offset;
                let gy = word.y + glyph.y - glyph.font_size * glyph.y_offset;
                pixmap.fill_path(
                    &path,
                    &paint,
                    FillRule::Winding,
                    Transform::from_translate(gx, gy),
                    None,
                );
            }
        }
    }
}

struct CosmicMeasure<'a> {
    typesetter: &'a CosmicTypesetter,
    fonts: &'a mut FontState,
}

impl TextMeasure for CosmicMeasure<'_> {
    fn word_width(&mut self, word: &str, font_size: f32, weight: FontWeight) -> f32 {
        let buffer = self.typesetter.shape(self.fonts, word, font_size, weight);
        buffer
            .layout_runs()
            .fold(0.0_f32, |width, run| width.max(run.line_w))
    }
}

impl Typesetter for CosmicTypesetter {
    fn typeset(
        &self,
        text: &str,
        params: &LayoutParams,
    ) -> Result<Box<dyn DrawingSurface>, DomainError> {
        let mut surface = PixmapSurface::blank(params.canvas_width, params.canvas_height)?;
        let mut fonts = self.fonts.lock();

        let words = {
            let mut measure = CosmicMeasure {
                typesetter: self,
                fonts: &mut fonts,
            };
            layout_words(text, params, &self.weights, &mut measure, &mut rand::rng())?
        };
        debug!(words = words.len(), "Laid out words");

        for word in &words {
            self.draw_word(&mut fonts, surface.pixmap_mut(), word);
        }
        Ok(Box::new(surface))
    }
}
