//! Asset Module
//!
//! Sprites, sounds and the name-keyed precache that keeps each asset loaded
//! once.
//!
//! - `sprite`: sprite sheets, frame geometry and the loader seam
//! - `sound`: named sound handles and their loader seam
//! - `spr`: the `.spr` sprite container format
//! - `sheet`: reading and decoding sheets from a sprite directory
//! - `precache`: deduplicating cache in front of a loader

pub mod precache;
pub mod sheet;
pub mod sound;
pub mod spr;
pub mod sprite;

pub use precache::Precache;
pub use sheet::{read_sheet, SheetImage};
pub use sound::{read_sound, AssetLoader, Sound, SoundHandle, SoundLoader};
pub use sprite::{LoadError, Sprite, SpriteHandle, SpriteLoader};
