//! Engine runtime
//!
//! [`Engine`] is the context object the game threads through startup and
//! the frame loop. It owns the precache, the template registry, the live
//! entity lists, the camera view and the clock.
//!
//! Typical use:
//! 1. register every decal/effect template
//! 2. each frame: spawn as needed, `update()`, then `draw()`
//! 3. `shutdown()` on exit

use crate::asset::{AssetLoader, LoadError, Precache, SoundHandle};
use crate::clock::{Clock, Millis};
use crate::config::EngineConfig;
use crate::geom::Point;
use crate::render::Renderer;

use super::effect::EffectBehavior;
use super::entity::{DecalId, EffectId};
use super::linker::Linker;
use super::scheduler::Scheduler;
use super::view::View;

pub struct Engine<L: AssetLoader> {
    precache: Precache<L>,
    linker: Linker<L::Texture>,
    scheduler: Scheduler<L::Texture>,
    view: View,
    clock: Box<dyn Clock>,
}

impl<L> Engine<L>
where
    L: AssetLoader,
    L::Texture: 'static,
{
    pub fn new(loader: L, clock: Box<dyn Clock>, max_layer: u32, view: View) -> Self {
        tracing::debug!(max_layer, "engine created");
        Self {
            precache: Precache::new(loader),
            linker: Linker::new(),
            scheduler: Scheduler::new(max_layer),
            view,
            clock,
        }
    }

    /// Engine sized from the window and layer count of `config`
    pub fn from_config(loader: L, clock: Box<dyn Clock>, config: &EngineConfig) -> Self {
        let view = View::new(config.window.width as i32, config.window.height as i32);
        Self::new(loader, clock, config.max_layer, view)
    }

    pub fn now(&self) -> Millis {
        self.clock.now_millis()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    pub fn register_decal(&mut self, name: &str, sprite_name: &str, frame: u32) -> Option<usize> {
        self.linker
            .register_decal(&mut self.precache, name, sprite_name, frame)
    }

    /// Precache a sound for the game to play
    pub fn acquire_sound(&mut self, name: &str) -> Result<SoundHandle<L::Audio>, LoadError> {
        self.precache.acquire_sound(name)
    }

    pub fn register_effect<B, F>(&mut self, name: &str, factory: F) -> usize
    where
        B: EffectBehavior<L::Texture> + 'static,
        F: Fn() -> B + 'static,
    {
        self.linker.register_effect(name, factory)
    }

    pub fn register_default<B>(&mut self, name: &str) -> usize
    where
        B: EffectBehavior<L::Texture> + Default + 'static,
    {
        self.linker.register_default::<B>(name)
    }

    // =========================================================================
    // Spawning
    // =========================================================================

    pub fn spawn_decal(&mut self, index: usize, origin: Point, layer: u32) -> Option<DecalId> {
        self.linker
            .spawn_decal(&mut self.scheduler, index, origin, layer)
    }

    pub fn spawn_effect(&mut self, index: usize, origin: Point, layer: u32) -> Option<EffectId> {
        let now = self.clock.now_millis();
        self.linker
            .spawn_effect(&mut self.scheduler, index, origin, layer, now)
    }

    /// Request removal of a live effect at the next update
    pub fn kill(&mut self, id: EffectId) -> bool {
        self.scheduler.kill(id)
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    pub fn update(&mut self) {
        let now = self.clock.now_millis();
        self.scheduler.update(now);
    }

    pub fn draw(&mut self, renderer: &mut dyn Renderer<L::Texture>) {
        self.scheduler.draw(&self.view, renderer);
    }

    /// Hard stop: drop live entities (no `die` calls), templates and assets
    pub fn shutdown(&mut self) {
        self.scheduler.free();
        self.linker.reset();
        self.precache.release_all();
        tracing::info!("engine shut down");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn scheduler(&self) -> &Scheduler<L::Texture> {
        &self.scheduler
    }

    pub fn linker(&self) -> &Linker<L::Texture> {
        &self.linker
    }

    pub fn precache(&self) -> &Precache<L> {
        &self.precache
    }
}
