//! Sound clips
//!
//! The engine never plays audio itself. It only keeps named backend sound
//! handles so each clip is loaded once, the same way sprites are.

use std::path::Path;
use std::rc::Rc;

use super::sprite::{LoadError, SpriteLoader};

/// File extensions tried by [`read_sound`], in order
pub const SOUND_EXTENSIONS: [&str; 2] = ["wav", "ogg"];

/// A loaded sound over a backend audio handle `A`
#[derive(Debug)]
pub struct Sound<A> {
    name: String,
    audio: A,
}

/// Shared handle to a precached sound
pub type SoundHandle<A> = Rc<Sound<A>>;

impl<A> Sound<A> {
    pub fn new(name: impl Into<String>, audio: A) -> Self {
        Self {
            name: name.into(),
            audio,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

/// Loads sounds by name for a particular backend.
pub trait SoundLoader {
    type Audio;

    fn load_sound(&mut self, name: &str) -> Result<Sound<Self::Audio>, LoadError>;
}

/// A backend able to load every asset kind the precache keeps
pub trait AssetLoader: SpriteLoader + SoundLoader {}

impl<L: SpriteLoader + SoundLoader> AssetLoader for L {}

/// Raw bytes of sound `name` from `dir`, trying each of [`SOUND_EXTENSIONS`]
pub fn read_sound(dir: &Path, name: &str) -> Result<Vec<u8>, LoadError> {
    for ext in SOUND_EXTENSIONS {
        let path = dir.join(name).with_extension(ext);
        if path.is_file() {
            return std::fs::read(path).map_err(LoadError::from);
        }
    }
    Err(LoadError::NotFound(name.to_string()))
}
