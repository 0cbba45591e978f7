//! Spawn context
//!
//! A [`Spawner`] is handed to every effect's spawn hook so the new effect can
//! put more entities into the scheduler (a burst that leaves a decal behind,
//! an effect that starts companions). Anything added here goes live right
//! away; the effect being spawned is inserted after its hook returns.

use crate::clock::Millis;
use crate::geom::Point;

use super::decal::Decal;
use super::effect::{EffectBehavior, EffectState};
use super::entity::{DecalId, EffectId};
use super::linker::Linker;
use super::scheduler::Scheduler;

pub struct Spawner<'a, T> {
    linker: &'a Linker<T>,
    scheduler: &'a mut Scheduler<T>,
    now: Millis,
}

impl<'a, T> Spawner<'a, T> {
    pub(crate) fn new(linker: &'a Linker<T>, scheduler: &'a mut Scheduler<T>, now: Millis) -> Self {
        Self {
            linker,
            scheduler,
            now,
        }
    }

    /// Time of the spawn request
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Spawn decal template `index`, same contract as [`Linker::spawn_decal`]
    pub fn spawn_decal(&mut self, index: usize, origin: Point, layer: u32) -> Option<DecalId> {
        self.linker
            .spawn_decal(&mut *self.scheduler, index, origin, layer)
    }

    /// Spawn effect template `index`, same contract as [`Linker::spawn_effect`]
    pub fn spawn_effect(&mut self, index: usize, origin: Point, layer: u32) -> Option<EffectId> {
        self.linker
            .spawn_effect(&mut *self.scheduler, index, origin, layer, self.now)
    }

    pub fn add_decal(&mut self, decal: Decal<T>) -> DecalId {
        self.scheduler.add_decal(decal)
    }

    pub fn add_effect(
        &mut self,
        state: EffectState,
        behavior: Box<dyn EffectBehavior<T>>,
    ) -> EffectId {
        self.scheduler.add_effect(state, behavior)
    }
}
