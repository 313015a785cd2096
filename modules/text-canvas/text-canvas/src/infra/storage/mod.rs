//! Storage infrastructure for the text-canvas module.

pub mod canvas_repo;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod settings_repo;

pub use canvas_repo::SeaOrmCanvasRepository;
pub use settings_repo::SeaOrmSettingsRepository;
