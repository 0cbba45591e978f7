//! Effects - dynamic entities with optional behavior
//!
//! An effect is split in two:
//! - [`EffectState`]: what the scheduler reads (layer, think deadline, kill flag)
//! - an [`EffectBehavior`] value: the per-template private data plus its
//!   Spawn/Think/Draw/Die hooks
//!
//! Every hook has a no-op default, so a template only implements what it
//! needs and the scheduler never checks for missing callbacks.

use crate::clock::Millis;
use crate::geom::Point;
use crate::render::Renderer;

use super::entity::EffectId;
use super::spawner::Spawner;
use super::view::View;

/// Scheduling state of one live effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectState {
    /// World position the effect was spawned at
    pub origin: Point,
    /// Screen position as of the last draw pass
    pub position: Point,
    pub layer: u32,
    next_think: Option<Millis>,
    killed: bool,
}

impl EffectState {
    pub fn new(origin: Point, layer: u32) -> Self {
        Self {
            origin,
            position: origin,
            layer,
            next_think: None,
            killed: false,
        }
    }

    /// Schedule the next think at an absolute time
    pub fn think_at(&mut self, deadline: Millis) {
        self.next_think = Some(deadline);
    }

    /// Schedule the next think `delay` ms after `now`
    pub fn think_in(&mut self, now: Millis, delay: Millis) {
        self.next_think = Some(now.saturating_add(delay));
    }

    /// Drop any pending think
    pub fn cancel_think(&mut self) {
        self.next_think = None;
    }

    pub fn next_think(&self) -> Option<Millis> {
        self.next_think
    }

    /// Request removal at the next scheduler update
    pub fn kill(&mut self) {
        self.killed = true;
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }

    /// Consume a due think deadline; true when think should run now
    pub(crate) fn take_due_think(&mut self, now: Millis) -> bool {
        match self.next_think {
            Some(deadline) if now >= deadline => {
                self.next_think = None;
                true
            }
            _ => false,
        }
    }
}

/// Behavior and private data of an effect template.
///
/// One value is created per spawned effect and dropped when the effect is
/// reaped or the scheduler is freed.
pub trait EffectBehavior<T> {
    /// One-time setup right after allocation; may schedule the first think
    /// and put further decals or effects into the scheduler through `spawner`
    fn spawn(&mut self, _fx: &mut EffectState, _origin: Point, _spawner: &mut Spawner<'_, T>) {}

    /// Runs once per elapsed deadline. The deadline is already cleared, so a
    /// recurring effect must reschedule itself here.
    fn think(&mut self, _fx: &mut EffectState, _now: Millis) {}

    /// Render for the current layer pass
    fn draw(&self, _fx: &EffectState, _view: &View, _renderer: &mut dyn Renderer<T>) {}

    /// Last call before the effect is dropped by a reap
    fn die(&mut self, _fx: &mut EffectState) {}
}

/// Behavior that does nothing at all
#[derive(Debug, Clone, Copy, Default)]
pub struct Inert;

impl<T> EffectBehavior<T> for Inert {}

/// A live effect as stored by the scheduler
pub(crate) struct Effect<T> {
    pub(crate) id: EffectId,
    pub(crate) state: EffectState,
    pub(crate) behavior: Box<dyn EffectBehavior<T>>,
}

impl<T> std::fmt::Debug for Effect<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect")
            .field("id", &self.id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_think_fires_once_per_deadline() {
        let mut fx = EffectState::new(Point::ZERO, 0);
        assert!(!fx.take_due_think(1000));

        fx.think_at(100);
        assert!(!fx.take_due_think(99));
        assert!(fx.take_due_think(100));
        assert_eq!(fx.next_think(), None);
        assert!(!fx.take_due_think(200));
    }

    #[test]
    fn test_think_in_is_relative() {
        let mut fx = EffectState::new(Point::ZERO, 0);
        fx.think_in(40, 25);
        assert_eq!(fx.next_think(), Some(65));
        fx.cancel_think();
        assert_eq!(fx.next_think(), None);
    }

    #[test]
    fn test_kill_flag() {
        let mut fx = EffectState::new(Point::new(1, 2), 3);
        assert!(!fx.is_killed());
        fx.kill();
        assert!(fx.is_killed());
    }
}
