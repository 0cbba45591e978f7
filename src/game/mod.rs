//! Game Module
//!
//! The entity registration-and-scheduling engine.
//!
//! Key concepts:
//! - Decal: static sprite stamp on a draw layer
//! - Effect: entity with optional Spawn/Think/Draw/Die behavior and private data
//! - Linker: template registry that spawns decals and effects by index
//! - Scheduler: owns live entities, runs think/reap and layered draw
//! - Spawner: lets an effect's spawn hook add more entities
//! - Engine: context object bundling all of the above with a clock and view

pub mod anim;
pub mod decal;
pub mod effect;
pub mod entity;
pub mod linker;
pub mod runtime;
pub mod scheduler;
pub mod spawner;
pub mod view;

pub use anim::{Anim, AnimMode};
pub use decal::Decal;
pub use effect::{EffectBehavior, EffectState, Inert};
pub use entity::{DecalId, EffectId};
pub use linker::{DecalTemplate, EffectTemplate, Linker};
pub use runtime::Engine;
pub use scheduler::Scheduler;
pub use spawner::Spawner;
pub use view::View;
