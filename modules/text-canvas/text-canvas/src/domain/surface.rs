use super::error::DomainError;
use super::layout::LayoutParams;

/// Largest accepted canvas width or height, in pixels.
pub const MAX_CANVAS_SIDE: i32 = 8192;

/// Largest surface a renderer may allocate, in pixels.
pub const MAX_CANVAS_PIXELS: u64 = 8192 * 8192;

/// An in-memory rendered area that can emit its contents as PNG.
pub trait DrawingSurface: Send + Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Encode the surface as an 8-bit RGBA PNG.
    ///
    /// # Errors
    /// Returns `DomainError::Render` when encoding fails.
    fn encode_png(&self) -> Result<Vec<u8>, DomainError>;
}

/// Lays text out with the given parameters and draws it onto a new surface.
///
/// Implementations are CPU bound; callers run them on a blocking thread.
pub trait Typesetter: Send + Sync {
    /// # Errors
    /// Returns `DomainError::TextOverflow` when the text does not fit and
    /// `DomainError::Render` when the surface cannot be created.
    fn typeset(
        &self,
        text: &str,
        params: &LayoutParams,
    ) -> Result<Box<dyn DrawingSurface>, DomainError>;
}
