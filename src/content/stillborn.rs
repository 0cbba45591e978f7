//! Spawn-kill test effect
//!
//! Exercises the path where an effect dies before its first frame.

use crate::game::{EffectBehavior, EffectState, Spawner};
use crate::geom::Point;

pub const STILLBORN_NAME: &str = "eff_test";

/// Effect that kills itself as soon as it is spawned
#[derive(Debug, Default, Clone, Copy)]
pub struct Stillborn;

impl<T> EffectBehavior<T> for Stillborn {
    fn spawn(&mut self, fx: &mut EffectState, _origin: Point, _spawner: &mut Spawner<'_, T>) {
        fx.kill();
    }
}
