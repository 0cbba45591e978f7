//! Precache - name-keyed asset deduplication
//!
//! Every sprite and sound request goes through the precache. A name that was
//! loaded before returns the same shared handle; only a new name reaches the
//! loader. Sprites and sounds live in separate tables, so a sprite and a
//! sound may share a name.

use std::rc::Rc;

use super::sound::{AssetLoader, SoundHandle};
use super::sprite::{LoadError, SpriteHandle};

/// Deduplicating cache in front of an [`AssetLoader`]
pub struct Precache<L: AssetLoader> {
    loader: L,
    /// Loaded sprites in load order
    sprites: Vec<SpriteHandle<L::Texture>>,
    /// Loaded sounds in load order
    sounds: Vec<SoundHandle<L::Audio>>,
}

impl<L: AssetLoader> Precache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            sprites: Vec::new(),
            sounds: Vec::new(),
        }
    }

    /// Return the sprite called `name`, loading it on first request.
    ///
    /// A load failure is returned to the caller and nothing is cached, so a
    /// later request retries the loader.
    pub fn acquire(&mut self, name: &str) -> Result<SpriteHandle<L::Texture>, LoadError> {
        if let Some(sprite) = self.sprites.iter().find(|s| s.name() == name) {
            return Ok(Rc::clone(sprite));
        }

        let sprite = match self.loader.load_sprite(name) {
            Ok(sprite) => Rc::new(sprite),
            Err(e) => {
                tracing::warn!(sprite = %name, error = %e, "failed to load sprite");
                return Err(e);
            }
        };

        tracing::info!(sprite = %name, frames = sprite.frame_count(), "precache sprite");
        self.sprites.push(Rc::clone(&sprite));
        Ok(sprite)
    }

    /// Sound counterpart of [`Precache::acquire`]
    pub fn acquire_sound(&mut self, name: &str) -> Result<SoundHandle<L::Audio>, LoadError> {
        if let Some(sound) = self.sounds.iter().find(|s| s.name() == name) {
            return Ok(Rc::clone(sound));
        }

        let sound = match self.loader.load_sound(name) {
            Ok(sound) => Rc::new(sound),
            Err(e) => {
                tracing::warn!(sound = %name, error = %e, "failed to load sound");
                return Err(e);
            }
        };

        tracing::info!(sound = %name, "precache sound");
        self.sounds.push(Rc::clone(&sound));
        Ok(sound)
    }

    /// Check whether sprite `name` is already cached
    pub fn contains(&self, name: &str) -> bool {
        self.sprites.iter().any(|s| s.name() == name)
    }

    pub fn contains_sound(&self, name: &str) -> bool {
        self.sounds.iter().any(|s| s.name() == name)
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty() && self.sounds.is_empty()
    }

    /// Drop every cached handle and start over empty.
    ///
    /// Handles still held elsewhere (e.g. by live decals) keep their asset
    /// alive until they are dropped too.
    pub fn release_all(&mut self) {
        let sprites = self.sprites.len();
        let sounds = self.sounds.len();
        self.sprites.clear();
        self.sounds.clear();
        tracing::debug!(sprites, sounds, "precache released");
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}
