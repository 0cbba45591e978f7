//! macroquad backend
//!
//! Asset loading into GPU textures and audio clips, plus the [`Renderer`]
//! used by the demo. Needs a live macroquad context, so everything here runs
//! inside the `#[macroquad::main]` future.

use std::path::PathBuf;

use macroquad::audio::Sound as MqSound;
use macroquad::prelude::{
    draw_rectangle, draw_texture_ex, vec2, Color as MqColor, DrawTextureParams, FilterMode,
    Rect as MqRect, Texture2D, WHITE,
};

use crate::asset::{read_sheet, LoadError, Sound, SoundLoader, Sprite, SpriteLoader};
use crate::geom::{Color, Rect};
use crate::render::Renderer;

/// Loads sprites into nearest-filtered textures and sounds into audio clips
#[derive(Debug, Clone)]
pub struct MqAssetLoader {
    sprite_dir: PathBuf,
    sound_dir: PathBuf,
}

impl MqAssetLoader {
    pub fn new(sprite_dir: impl Into<PathBuf>, sound_dir: impl Into<PathBuf>) -> Self {
        Self {
            sprite_dir: sprite_dir.into(),
            sound_dir: sound_dir.into(),
        }
    }
}

impl SpriteLoader for MqAssetLoader {
    type Texture = Texture2D;

    fn load_sprite(&mut self, name: &str) -> Result<Sprite<Texture2D>, LoadError> {
        let sheet = read_sheet(&self.sprite_dir, name)?;
        let (Ok(width), Ok(height)) = (u16::try_from(sheet.width), u16::try_from(sheet.height))
        else {
            return Err(LoadError::InvalidHeader(format!(
                "sheet {}x{} too large for a texture",
                sheet.width, sheet.height
            )));
        };

        let texture = Texture2D::from_rgba8(width, height, &sheet.rgba);
        texture.set_filter(FilterMode::Nearest);
        Ok(Sprite::new(name, texture, (sheet.width, sheet.height), sheet.frame_size()))
    }
}

impl SoundLoader for MqAssetLoader {
    type Audio = MqSound;

    #[cfg(not(target_arch = "wasm32"))]
    fn load_sound(&mut self, name: &str) -> Result<Sound<MqSound>, LoadError> {
        let bytes = crate::asset::read_sound(&self.sound_dir, name)?;
        // native decoding finishes on the first poll
        let audio = futures::executor::block_on(macroquad::audio::load_sound_from_bytes(&bytes))
            .map_err(|e| LoadError::Backend(e.to_string()))?;
        Ok(Sound::new(name, audio))
    }

    // browsers decode audio asynchronously across frames
    #[cfg(target_arch = "wasm32")]
    fn load_sound(&mut self, name: &str) -> Result<Sound<MqSound>, LoadError> {
        Err(LoadError::Backend(format!(
            "cannot load {} from {} synchronously on wasm",
            name,
            self.sound_dir.display()
        )))
    }
}

/// Draws straight to the current macroquad render target
#[derive(Debug, Default)]
pub struct MqRenderer;

impl Renderer<Texture2D> for MqRenderer {
    fn draw_sprite(&mut self, texture: &Texture2D, src: Rect, dst: Rect) {
        draw_texture_ex(
            texture,
            dst.x as f32,
            dst.y as f32,
            WHITE,
            DrawTextureParams {
                source: Some(MqRect::new(src.x as f32, src.y as f32, src.w as f32, src.h as f32)),
                dest_size: Some(vec2(dst.w as f32, dst.h as f32)),
                ..Default::default()
            },
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(
            rect.x as f32,
            rect.y as f32,
            rect.w as f32,
            rect.h as f32,
            MqColor::from_rgba(color.r, color.g, color.b, color.a),
        );
    }
}
