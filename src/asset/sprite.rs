//! Sprite sheets
//!
//! A sprite is one backend texture cut into a grid of equally sized frames,
//! numbered left to right, top to bottom.

use std::rc::Rc;

use thiserror::Error;

use crate::geom::Rect;

/// Errors raised while loading an asset
#[derive(Debug, Error)]
pub enum LoadError {
    /// No file for this asset name
    #[error("asset not found: {0}")]
    NotFound(String),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The sprite container header is malformed
    #[error("invalid sprite header: {0}")]
    InvalidHeader(String),
    /// Image payload could not be decoded
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),
    /// The backend refused the decoded asset
    #[error("backend error: {0}")]
    Backend(String),
}

/// A loaded sprite sheet over a backend texture `T`
#[derive(Debug)]
pub struct Sprite<T> {
    name: String,
    texture: T,
    texture_width: u32,
    texture_height: u32,
    frame_width: u32,
    frame_height: u32,
    frames_per_row: u32,
    frame_count: u32,
}

/// Shared handle to a precached sprite
pub type SpriteHandle<T> = Rc<Sprite<T>>;

impl<T> Sprite<T> {
    /// Build a sprite from a texture and its frame size.
    ///
    /// A zero frame dimension falls back to the full texture size, giving a
    /// single-frame sprite.
    pub fn new(
        name: impl Into<String>,
        texture: T,
        texture_size: (u32, u32),
        frame_size: (u32, u32),
    ) -> Self {
        let (texture_width, texture_height) = texture_size;
        let frame_width = if frame_size.0 == 0 { texture_width.max(1) } else { frame_size.0 };
        let frame_height = if frame_size.1 == 0 { texture_height.max(1) } else { frame_size.1 };
        let frames_per_row = texture_width / frame_width;
        let frame_count = frames_per_row * (texture_height / frame_height);

        Self {
            name: name.into(),
            texture,
            texture_width,
            texture_height,
            frame_width,
            frame_height,
            frames_per_row,
            frame_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn texture_size(&self) -> (u32, u32) {
        (self.texture_width, self.texture_height)
    }

    /// Width and height of one frame
    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Number of whole frames in the sheet
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Source rectangle of `frame` inside the texture.
    ///
    /// Frames past the end of the sheet clamp to the last frame.
    pub fn frame_rect(&self, frame: u32) -> Rect {
        let frame = frame.min(self.frame_count.saturating_sub(1));
        let per_row = self.frames_per_row.max(1);
        Rect::new(
            to_i32((frame % per_row).saturating_mul(self.frame_width)),
            to_i32((frame / per_row).saturating_mul(self.frame_height)),
            to_i32(self.frame_width),
            to_i32(self.frame_height),
        )
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Loads sprites by name for a particular backend.
pub trait SpriteLoader {
    type Texture;

    fn load_sprite(&mut self, name: &str) -> Result<Sprite<Self::Texture>, LoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_grid() {
        // 4 columns x 2 rows of 25x25 frames
        let sprite = Sprite::new("blood25", (), (100, 50), (25, 25));
        assert_eq!(sprite.frame_count(), 8);
        assert_eq!(sprite.frame_rect(0), Rect::new(0, 0, 25, 25));
        assert_eq!(sprite.frame_rect(3), Rect::new(75, 0, 25, 25));
        assert_eq!(sprite.frame_rect(5), Rect::new(25, 25, 25, 25));
    }

    #[test]
    fn test_partial_frames_are_ignored() {
        let sprite = Sprite::new("odd", (), (110, 60), (25, 25));
        assert_eq!(sprite.frame_count(), 4 * 2);
    }

    #[test]
    fn test_frame_past_end_clamps_to_last() {
        let sprite = Sprite::new("blood25", (), (100, 50), (25, 25));
        assert_eq!(sprite.frame_rect(8), Rect::new(75, 25, 25, 25));
        assert_eq!(sprite.frame_rect(u32::MAX), Rect::new(75, 25, 25, 25));
    }

    #[test]
    fn test_sheet_smaller_than_frame() {
        let sprite = Sprite::new("tiny", (), (10, 10), (25, 25));
        assert_eq!(sprite.frame_count(), 0);
        assert_eq!(sprite.frame_rect(u32::MAX), Rect::new(0, 0, 25, 25));
    }

    #[test]
    fn test_zero_frame_size_means_whole_texture() {
        let sprite = Sprite::new("button", (), (64, 32), (0, 0));
        assert_eq!(sprite.frame_size(), (64, 32));
        assert_eq!(sprite.frame_count(), 1);
        assert_eq!(sprite.frame_rect(0), Rect::new(0, 0, 64, 32));
    }
}
