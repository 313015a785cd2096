use tiny_skia::{Color, Pixmap};

use crate::domain::error::DomainError;
use crate::domain::surface::{DrawingSurface, MAX_CANVAS_PIXELS};

/// A white RGBA pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// # Errors
    /// Returns `DomainError::Render` for non-positive dimensions or more than
    /// [`MAX_CANVAS_PIXELS`] pixels. Nothing is allocated in that case.
    pub fn blank(width: i32, height: i32) -> Result<Self, DomainError> {
        let invalid = || DomainError::Render(format!("invalid canvas size {width}x{height}"));
        let w = u32::try_from(width).map_err(|_| invalid())?;
        let h = u32::try_from(height).map_err(|_| invalid())?;
        if u64::from(w) * u64::from(h) > MAX_CANVAS_PIXELS {
            return Err(DomainError::Render(format!(
                "canvas {width}x{height} exceeds {MAX_CANVAS_PIXELS} pixels"
            )));
        }
        let mut pixmap = Pixmap::new(w, h).ok_or_else(invalid)?;
        pixmap.fill(Color::WHITE);
        Ok(Self { pixmap })
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Straight-alpha RGBA bytes, row major.
    fn rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }
}

impl DrawingSurface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn encode_png(&self) -> Result<Vec<u8>, DomainError> {
        let encode_err = |e: png::EncodingError| DomainError::Render(e.to_string());
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width(), self.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header().map_err(encode_err)?;
            writer.write_image_data(&self.rgba()).map_err(encode_err)?;
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn blank_surface_encodes_white_png() {
        let surface = PixmapSurface::blank(4, 3).unwrap();
        let png_bytes = surface.encode_png().unwrap();

        let decoder = png::Decoder::new(Cursor::new(png_bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (4, 3));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert!(buf[..info.buffer_size()].iter().all(|&b| b == 255));
    }

    #[test]
    fn invalid_sizes_are_render_errors() {
        assert!(matches!(
            PixmapSurface::blank(0, 10),
            Err(DomainError::Render(_))
        ));
        assert!(matches!(
            PixmapSurface::blank(10, -1),
            Err(DomainError::Render(_))
        ));
    }

    #[test]
    fn oversized_surface_is_refused_before_allocating() {
        let err = PixmapSurface::blank(100_000, 100_000).err();
        assert!(matches!(err, Some(DomainError::Render(ref m)) if m.contains("exceeds")));

        // one row past the limit
        assert!(PixmapSurface::blank(8192, 8193).is_err());
    }
}
