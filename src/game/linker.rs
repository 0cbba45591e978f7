//! Linker - template registry and spawn factory
//!
//! Game code registers every decal and effect template at startup, then
//! spawns them by index. Indices are assigned in registration order.

use crate::asset::{AssetLoader, Precache, SpriteHandle};
use crate::clock::Millis;
use crate::geom::Point;

use super::decal::Decal;
use super::effect::{EffectBehavior, EffectState};
use super::entity::{DecalId, EffectId};
use super::scheduler::Scheduler;
use super::spawner::Spawner;

/// Blueprint for a decal: one frame of a precached sprite
#[derive(Debug)]
pub struct DecalTemplate<T> {
    pub name: String,
    pub sprite_name: String,
    pub frame: u32,
    sprite: SpriteHandle<T>,
}

impl<T> DecalTemplate<T> {
    pub fn sprite(&self) -> &SpriteHandle<T> {
        &self.sprite
    }
}

type BehaviorFactory<T> = Box<dyn Fn() -> Box<dyn EffectBehavior<T>>>;

/// Blueprint for an effect: a behavior factory and the size of the private
/// data each instance carries
pub struct EffectTemplate<T> {
    pub name: String,
    pub data_size: usize,
    factory: BehaviorFactory<T>,
}

impl<T> std::fmt::Debug for EffectTemplate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectTemplate")
            .field("name", &self.name)
            .field("data_size", &self.data_size)
            .finish_non_exhaustive()
    }
}

pub struct Linker<T> {
    decals: Vec<DecalTemplate<T>>,
    effects: Vec<EffectTemplate<T>>,
}

impl<T> Linker<T> {
    pub fn new() -> Self {
        Self {
            decals: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Register a decal template, precaching its sprite.
    ///
    /// Returns the template index, or `None` when the sprite cannot be
    /// loaded or has no such frame; the template is then skipped and later
    /// indices shift down.
    pub fn register_decal<L>(
        &mut self,
        precache: &mut Precache<L>,
        name: &str,
        sprite_name: &str,
        frame: u32,
    ) -> Option<usize>
    where
        L: AssetLoader<Texture = T>,
    {
        let sprite = match precache.acquire(sprite_name) {
            Ok(sprite) => sprite,
            Err(e) => {
                tracing::warn!(
                    decal = %name,
                    sprite = %sprite_name,
                    error = %e,
                    "decal not registered"
                );
                return None;
            }
        };

        if frame >= sprite.frame_count() {
            tracing::warn!(
                decal = %name,
                frame,
                frames = sprite.frame_count(),
                "decal not registered: frame outside sprite sheet"
            );
            return None;
        }

        self.decals.push(DecalTemplate {
            name: name.to_string(),
            sprite_name: sprite_name.to_string(),
            frame,
            sprite,
        });
        tracing::info!(decal = %name, index = self.decals.len() - 1, "register decal");
        Some(self.decals.len() - 1)
    }

    /// Register an effect template built by `factory`; always succeeds
    pub fn register_effect<B, F>(&mut self, name: &str, factory: F) -> usize
    where
        T: 'static,
        B: EffectBehavior<T> + 'static,
        F: Fn() -> B + 'static,
    {
        let data_size = std::mem::size_of::<B>();
        self.effects.push(EffectTemplate {
            name: name.to_string(),
            data_size,
            factory: Box::new(move || Box::new(factory()) as Box<dyn EffectBehavior<T>>),
        });
        let index = self.effects.len() - 1;
        tracing::info!(effect = %name, data_size, index, "register effect");
        index
    }

    /// Register an effect whose private data starts from `B::default()`
    pub fn register_default<B>(&mut self, name: &str) -> usize
    where
        T: 'static,
        B: EffectBehavior<T> + Default + 'static,
    {
        self.register_effect(name, B::default)
    }

    /// Instantiate decal template `index` into the scheduler
    pub fn spawn_decal(
        &self,
        scheduler: &mut Scheduler<T>,
        index: usize,
        origin: Point,
        layer: u32,
    ) -> Option<DecalId> {
        let Some(template) = self.decals.get(index) else {
            tracing::warn!(index, max = self.decals.len(), "invalid decal index");
            return None;
        };

        let decal = Decal::new(&template.sprite, template.frame, origin, layer);
        Some(scheduler.add_decal(decal))
    }

    /// Instantiate effect template `index`: allocate its private data, run
    /// its spawn hook, then hand it to the scheduler
    pub fn spawn_effect(
        &self,
        scheduler: &mut Scheduler<T>,
        index: usize,
        origin: Point,
        layer: u32,
        now: Millis,
    ) -> Option<EffectId> {
        let Some(template) = self.effects.get(index) else {
            tracing::warn!(index, max = self.effects.len(), "invalid effect index");
            return None;
        };

        let mut behavior = (template.factory)();
        let mut state = EffectState::new(origin, layer);
        behavior.spawn(&mut state, origin, &mut Spawner::new(self, scheduler, now));
        Some(scheduler.add_effect(state, behavior))
    }

    pub fn decal_template(&self, index: usize) -> Option<&DecalTemplate<T>> {
        self.decals.get(index)
    }

    pub fn effect_template(&self, index: usize) -> Option<&EffectTemplate<T>> {
        self.effects.get(index)
    }

    /// Index of the decal template called `name`
    pub fn find_decal(&self, name: &str) -> Option<usize> {
        self.decals.iter().position(|t| t.name == name)
    }

    /// Index of the effect template called `name`
    pub fn find_effect(&self, name: &str) -> Option<usize> {
        self.effects.iter().position(|t| t.name == name)
    }

    pub fn decal_count(&self) -> usize {
        self.decals.len()
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Forget every template
    pub fn reset(&mut self) {
        self.decals.clear();
        self.effects.clear();
    }
}

impl<T> Default for Linker<T> {
    fn default() -> Self {
        Self::new()
    }
}
