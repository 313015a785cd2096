//! Raster rendering backed by cosmic-text shaping and tiny-skia pixmaps.

mod surface;
mod typesetter;

pub use surface::PixmapSurface;
pub use typesetter::CosmicTypesetter;
