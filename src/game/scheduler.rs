//! Scheduler - owner of every live decal and effect
//!
//! Per frame the game calls [`Scheduler::update`] then [`Scheduler::draw`]:
//! - update reaps effects whose kill flag is set (calling `die` first) and
//!   runs `think` on effects whose deadline has elapsed
//! - draw walks layers `0..max_layer` in ascending order and, within each
//!   layer, draws decals then effects
//!
//! Both lists keep insertion order; draw visits them newest first. Kills are
//! only ever observed by the next update pass, so nothing is dropped while a
//! think or draw traversal is running.

use crate::clock::Millis;
use crate::render::Renderer;

use super::decal::Decal;
use super::effect::{Effect, EffectBehavior, EffectState};
use super::entity::{DecalId, EffectId, EntityAllocator};
use super::view::View;

pub struct Scheduler<T> {
    /// Number of draw layers; entities on a layer >= this are never drawn
    max_layer: u32,
    decals: Vec<(DecalId, Decal<T>)>,
    effects: Vec<Effect<T>>,
    decal_ids: EntityAllocator,
    effect_ids: EntityAllocator,
}

impl<T> Scheduler<T> {
    pub fn new(max_layer: u32) -> Self {
        Self {
            max_layer,
            decals: Vec::new(),
            effects: Vec::new(),
            decal_ids: EntityAllocator::new(),
            effect_ids: EntityAllocator::new(),
        }
    }

    pub fn max_layer(&self) -> u32 {
        self.max_layer
    }

    /// Take ownership of a decal
    pub fn add_decal(&mut self, decal: Decal<T>) -> DecalId {
        let id = DecalId(self.decal_ids.allocate());
        self.decals.push((id, decal));
        id
    }

    /// Take ownership of a spawned effect
    pub fn add_effect(
        &mut self,
        state: EffectState,
        behavior: Box<dyn EffectBehavior<T>>,
    ) -> EffectId {
        let id = EffectId(self.effect_ids.allocate());
        self.effects.push(Effect { id, state, behavior });
        id
    }

    /// Advance one frame: reap dead effects, then think the due ones.
    ///
    /// A kill raised inside `think` is reaped on the following pass.
    pub fn update(&mut self, now: Millis) {
        let Self { effects, effect_ids, .. } = self;

        effects.retain_mut(|effect| {
            if effect.state.is_killed() {
                effect.behavior.die(&mut effect.state);
                effect_ids.free(effect.id.0);
                tracing::debug!(effect = ?effect.id, "effect reaped");
                return false;
            }

            if effect.state.take_due_think(now) {
                effect.behavior.think(&mut effect.state, now);
            }
            true
        });
    }

    /// Draw every layer back to front
    pub fn draw(&mut self, view: &View, renderer: &mut dyn Renderer<T>) {
        for layer in 0..self.max_layer {
            for (_, decal) in self.decals.iter_mut().rev() {
                if decal.layer == layer {
                    decal.draw(view, renderer);
                }
            }

            for effect in self.effects.iter_mut().rev() {
                if effect.state.layer != layer || effect.state.is_killed() {
                    continue;
                }
                effect.state.position = view.to_screen(effect.state.origin);
                effect.behavior.draw(&effect.state, view, renderer);
            }
        }
    }

    /// Set the kill flag of a live effect; false if the handle is stale
    pub fn kill(&mut self, id: EffectId) -> bool {
        match self.effects.iter_mut().find(|e| e.id == id) {
            Some(effect) => {
                effect.state.kill();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: EffectId) -> bool {
        self.effect_ids.is_alive(id.0)
    }

    pub fn contains_decal(&self, id: DecalId) -> bool {
        self.decal_ids.is_alive(id.0)
    }

    pub fn effect(&self, id: EffectId) -> Option<&EffectState> {
        self.effects.iter().find(|e| e.id == id).map(|e| &e.state)
    }

    pub fn decal(&self, id: DecalId) -> Option<&Decal<T>> {
        self.decals.iter().find(|(d, _)| *d == id).map(|(_, decal)| decal)
    }

    /// Live effect handles, newest first
    pub fn effect_ids(&self) -> impl Iterator<Item = EffectId> + '_ {
        self.effects.iter().rev().map(|e| e.id)
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    pub fn decal_count(&self) -> usize {
        self.decals.len()
    }

    /// Drop everything without running `die`
    pub fn free(&mut self) {
        tracing::debug!(
            decals = self.decals.len(),
            effects = self.effects.len(),
            "scheduler freed"
        );
        self.decals.clear();
        self.effects.clear();
        self.decal_ids.clear();
        self.effect_ids.clear();
    }
}
