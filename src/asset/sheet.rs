//! Sprite sheet files on disk
//!
//! `<dir>/<name>.spr` is tried first; a bare `<dir>/<name>.png` is accepted
//! as a single-frame sheet.

use std::path::Path;

use image::ImageFormat;

use super::spr::{SPR_EXTENSION, SprHeader};
use super::sprite::LoadError;

/// Decoded sheet pixels plus frame geometry, ready for texture upload
#[derive(Debug, Clone)]
pub struct SheetImage {
    pub width: u32,
    pub height: u32,
    /// Zero when the sheet is a single frame
    pub frame_width: u32,
    pub frame_height: u32,
    pub rgba: Vec<u8>,
}

impl SheetImage {
    /// Decode a `.spr` container
    pub fn from_spr(bytes: &[u8]) -> Result<Self, LoadError> {
        let (header, png) = SprHeader::parse(bytes)?;
        let mut sheet = Self::from_png(png)?;
        sheet.frame_width = header.frame_width;
        sheet.frame_height = header.frame_height;
        Ok(sheet)
    }

    pub fn from_png(bytes: &[u8]) -> Result<Self, LoadError> {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
        Ok(Self {
            width: img.width(),
            height: img.height(),
            frame_width: 0,
            frame_height: 0,
            rgba: img.into_raw(),
        })
    }

    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }
}

/// Read sprite `name` from `dir`
pub fn read_sheet(dir: &Path, name: &str) -> Result<SheetImage, LoadError> {
    let spr = dir.join(name).with_extension(SPR_EXTENSION);
    if spr.is_file() {
        return SheetImage::from_spr(&std::fs::read(spr)?);
    }

    let png = dir.join(name).with_extension("png");
    if png.is_file() {
        return SheetImage::from_png(&std::fs::read(png)?);
    }

    Err(LoadError::NotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_read_spr() {
        let dir = tempfile::tempdir().unwrap();
        let header = SprHeader { frame_width: 25, frame_height: 25 };
        let bytes = header.encode(&png_bytes(100, 100));
        std::fs::write(dir.path().join("blood25.spr"), bytes).unwrap();

        let sheet = read_sheet(dir.path(), "blood25").unwrap();
        assert_eq!((sheet.width, sheet.height), (100, 100));
        assert_eq!(sheet.frame_size(), (25, 25));
        assert_eq!(sheet.rgba.len(), 100 * 100 * 4);
        assert_eq!(&sheet.rgba[0..4], &[200, 10, 10, 255]);
    }

    #[test]
    fn test_png_fallback_is_single_frame() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo.png"), png_bytes(40, 20)).unwrap();

        let sheet = read_sheet(dir.path(), "logo").unwrap();
        assert_eq!((sheet.width, sheet.height), (40, 20));
        assert_eq!(sheet.frame_size(), (0, 0));
    }

    #[test]
    fn test_missing_sprite() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read_sheet(dir.path(), "nothing"), Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_payload() {
        let dir = tempfile::tempdir().unwrap();
        let header = SprHeader { frame_width: 8, frame_height: 8 };
        std::fs::write(dir.path().join("bad.spr"), header.encode(b"not a png")).unwrap();
        assert!(matches!(read_sheet(dir.path(), "bad"), Err(LoadError::Image(_))));
    }
}
