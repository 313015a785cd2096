//! Text Canvas Module Implementation
//!
//! Settings CRUD plus PNG generation of rendered text. The contract types are
//! defined in `text-canvas-sdk` and re-exported here.

pub use text_canvas_sdk::{Canvas, CanvasFlag, NewSettings, Settings, SettingsPatch};

pub mod module;
pub use module::TextCanvasModule;

pub mod config;
pub use config::{FontWeight, RenderConfig, TextCanvasConfig};

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
