mod canvases;
mod settings;

pub use canvases::{CanvasService, CanvasServiceConfig};
pub use settings::SettingsService;
