//! Contract types for the text-canvas module.
//!
//! Transport-agnostic models shared by the module implementation and its
//! consumers. No storage or HTTP types leak into this crate.

pub mod models;

pub use models::{Canvas, CanvasFlag, NewSettings, Settings, SettingsPatch};
