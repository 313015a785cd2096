//! Word layout: flows words over the canvas with per-word random size and weight.

use rand::Rng;
use rand::seq::IndexedRandom;
use text_canvas_sdk::Settings;

use super::error::DomainError;
use crate::config::FontWeight;

/// Share of the line height above the baseline.
const ASCENT_RATIO: f32 = 0.8;

/// Geometry and spacing used to place words on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub min_font_size: i32,
    pub max_font_size: i32,
    pub line_space: i32,
    pub word_space: i32,
    pub canvas_height: i32,
    pub canvas_width: i32,
    pub padding: i32,
}

impl From<&Settings> for LayoutParams {
    fn from(s: &Settings) -> Self {
        Self {
            min_font_size: s.min_font_size,
            max_font_size: s.max_font_size,
            line_space: s.line_space,
            word_space: s.word_space,
            canvas_height: s.canvas_height,
            canvas_width: s.canvas_width,
            padding: s.padding,
        }
    }
}

/// A word with its final position. `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub weight: FontWeight,
}

/// Advance width of a word at a given size and weight.
pub trait TextMeasure {
    fn word_width(&mut self, word: &str, font_size: f32, weight: FontWeight) -> f32;
}

#[allow(clippy::cast_precision_loss)]
fn px(v: i32) -> f32 {
    v as f32
}

/// Place every whitespace-separated word of `text`.
///
/// Words wrap at `canvas_width - padding`; a word wider than the line is
/// still placed alone on its own line.
///
/// # Errors
/// Returns `DomainError::TextOverflow` when a line would end below
/// `canvas_height - padding`.
pub fn layout_words<M, R>(
    text: &str,
    params: &LayoutParams,
    weights: &[FontWeight],
    measure: &mut M,
    rng: &mut R,
) -> Result<Vec<PlacedWord>, DomainError>
where
    M: TextMeasure + ?Sized,
    R: Rng,
{
    let min_size = params.min_font_size.min(params.max_font_size).max(1);
    let max_size = params.max_font_size.max(min_size);
    let left = px(params.padding);
    let right = px(params.canvas_width - params.padding);
    let bottom = px(params.canvas_height - params.padding);
    let word_space = px(params.word_space);

    let mut placed = Vec::new();
    let mut line: Vec<PlacedWord> = Vec::new();
    let mut line_top = px(params.padding);
    let mut line_height = 0.0_f32;
    let mut cursor_x = left;

    for word in text.split_whitespace() {
        let font_size = px(rng.random_range(min_size..=max_size));
        let weight = weights.choose(rng).copied().unwrap_or(FontWeight::Regular);
        let width = measure.word_width(word, font_size, weight);

        if !line.is_empty() && cursor_x + width > right {
            line_top = finish_line(&mut line, &mut placed, line_top, line_height, bottom)?
                + px(params.line_space);
            line_height = 0.0;
            cursor_x = left;
        }

        line.push(PlacedWord {
            text: word.to_owned(),
            x: cursor_x,
            y: 0.0,
            font_size,
            weight,
        });
        line_height = line_height.max(font_size);
        cursor_x += width + word_space;
    }

    if !line.is_empty() {
        finish_line(&mut line, &mut placed, line_top, line_height, bottom)?;
    }

    Ok(placed)
}

/// Fix the baseline of the pending line and return its bottom edge.
fn finish_line(
    line: &mut Vec<PlacedWord>,
    placed: &mut Vec<PlacedWord>,
    top: f32,
    height: f32,
    bottom: f32,
) -> Result<f32, DomainError> {
    let line_bottom = top + height;
    if line_bottom > bottom {
        return Err(DomainError::TextOverflow);
    }
    let baseline = top + height * ASCENT_RATIO;
    placed.extend(line.drain(..).map(|mut w| {
        w.y = baseline;
        w
    }));
    Ok(line_bottom)
}
