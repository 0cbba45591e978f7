//! Krystal: a small 2D effects engine
//!
//! Decals (static sprites stamped into the world) and effects (short-lived
//! objects with their own spawn/think/draw/die behavior) are registered as
//! templates, instantiated at runtime and drawn layer by layer through a
//! camera view.
//!
//! - `game`: templates, scheduler, view and the [`Engine`] context
//! - `asset`: sprite sheets and the precache
//! - `content`: the demo's blood decals and spark effect
//! - `backend`: macroquad loader and renderer

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod asset;
pub mod backend;
pub mod clock;
pub mod config;
pub mod content;
pub mod game;
pub mod geom;
pub mod logger;
pub mod render;

#[cfg(test)]
mod testing;

pub use game::Engine;
