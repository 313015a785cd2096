/// Wire names of the settings fields, as reported in validation errors.
pub struct SettingsFields;

impl SettingsFields {
    pub const NAME: &'static str = "name";
    pub const MIN_FONT_SIZE: &'static str = "minFontSize";
    pub const MAX_FONT_SIZE: &'static str = "maxFontSize";
    pub const LINE_SPACE: &'static str = "lineSpace";
    pub const WORD_SPACE: &'static str = "wordSpace";
    pub const CANVAS_HEIGHT: &'static str = "canvasHeight";
    pub const CANVAS_WIDTH: &'static str = "canvasWidth";
    pub const PADDING: &'static str = "padding";
}

pub struct CanvasFields;

impl CanvasFields {
    pub const TEXT: &'static str = "text";
}
