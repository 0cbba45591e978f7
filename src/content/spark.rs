//! Spark burst
//!
//! A handful of small yellow squares flying away from the origin and fading
//! out over one second.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::clock::Millis;
use crate::game::{EffectBehavior, EffectState, Spawner, View};
use crate::geom::{Color, Point, Rect};
use crate::render::Renderer;

pub const SPARK_NAME: &str = "eff_spark";

const MIN_SPARKS: usize = 7;
const MAX_SPARKS: usize = 10;
const SPARK_SIZE: i32 = 2;
const JITTER: i32 = 2;
const MAX_SPEED: i32 = 3;
/// Total lifetime of a burst
pub const LIFETIME: Millis = 1000;
/// Delay between two moves
pub const THINK_INTERVAL: Millis = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    /// World-space rectangle
    pub rect: Rect,
    pub velocity: Point,
    pub color: Color,
}

#[derive(Debug)]
pub struct Spark {
    particles: Vec<Particle>,
    expires_at: Millis,
    rng: StdRng,
}

impl Default for Spark {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Spark {
    /// Deterministic burst, for replays and tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::with_capacity(MAX_SPARKS),
            expires_at: 0,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn expires_at(&self) -> Millis {
        self.expires_at
    }
}

impl<T> EffectBehavior<T> for Spark {
    fn spawn(&mut self, fx: &mut EffectState, origin: Point, spawner: &mut Spawner<'_, T>) {
        let now = spawner.now();
        let count = self.rng.gen_range(MIN_SPARKS..=MAX_SPARKS);
        self.expires_at = now + LIFETIME;
        self.particles.clear();

        for _ in 0..count {
            let jitter = Point::new(
                self.rng.gen_range(-JITTER..=JITTER),
                self.rng.gen_range(-JITTER..=JITTER),
            );
            let velocity = Point::new(
                self.rng.gen_range(-MAX_SPEED..=MAX_SPEED),
                self.rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            );
            let color = Color::rgb(
                self.rng.gen_range(200..=240),
                self.rng.gen_range(200..=240),
                self.rng.gen_range(40..=80),
            );
            self.particles.push(Particle {
                rect: Rect::at(origin + jitter, SPARK_SIZE, SPARK_SIZE),
                velocity,
                color,
            });
        }

        fx.think_in(now, THINK_INTERVAL);
    }

    fn think(&mut self, fx: &mut EffectState, now: Millis) {
        if now >= self.expires_at {
            fx.kill();
            return;
        }

        for particle in &mut self.particles {
            particle.rect = particle.rect.translate(particle.velocity);
            particle.color = particle.color.fade(
                self.rng.gen_range(0..=4),
                self.rng.gen_range(0..=4),
                self.rng.gen_range(0..=1),
            );
        }
        fx.think_in(now, THINK_INTERVAL);
    }

    fn draw(&self, _fx: &EffectState, view: &View, renderer: &mut dyn Renderer<T>) {
        for particle in &self.particles {
            let screen = view.to_screen(particle.rect.origin());
            renderer.fill_rect(Rect::at(screen, particle.rect.w, particle.rect.h), particle.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_detached, DrawCall, RecordingRenderer};

    fn spawned(seed: u64, origin: Point, now: Millis) -> (Spark, EffectState) {
        let mut spark = Spark::seeded(seed);
        let mut fx = EffectState::new(origin, 1);
        spawn_detached(&mut spark, &mut fx, now);
        (spark, fx)
    }

    #[test]
    fn test_spawn_ranges() {
        for seed in 0..32 {
            let origin = Point::new(100, 50);
            let (spark, fx) = spawned(seed, origin, 10);

            assert!((MIN_SPARKS..=MAX_SPARKS).contains(&spark.particles().len()));
            assert_eq!(spark.expires_at(), 10 + LIFETIME);
            assert_eq!(fx.next_think(), Some(10 + THINK_INTERVAL));

            for p in spark.particles() {
                assert!((p.rect.x - origin.x).abs() <= JITTER);
                assert!((p.rect.y - origin.y).abs() <= JITTER);
                assert_eq!((p.rect.w, p.rect.h), (2, 2));
                assert!(p.velocity.x.abs() <= MAX_SPEED && p.velocity.y.abs() <= MAX_SPEED);
                assert!((200..=240).contains(&p.color.r));
                assert!((200..=240).contains(&p.color.g));
                assert!((40..=80).contains(&p.color.b));
                assert_eq!(p.color.a, 255);
            }
        }
    }

    #[test]
    fn test_think_moves_and_fades() {
        let (mut spark, mut fx) = spawned(7, Point::ZERO, 0);
        let before = spark.particles().to_vec();

        fx.take_due_think(25);
        EffectBehavior::<String>::think(&mut spark, &mut fx, 25);

        for (old, new) in before.iter().zip(spark.particles()) {
            assert_eq!(new.rect, old.rect.translate(old.velocity));
            assert!(new.color.r <= old.color.r && old.color.r - new.color.r <= 4);
            assert!(new.color.g <= old.color.g && old.color.g - new.color.g <= 4);
            assert!(new.color.b <= old.color.b && old.color.b - new.color.b <= 1);
        }
        assert_eq!(fx.next_think(), Some(50));
        assert!(!fx.is_killed());
    }

    #[test]
    fn test_kills_itself_after_lifetime() {
        let (mut spark, mut fx) = spawned(3, Point::ZERO, 0);
        fx.take_due_think(LIFETIME);
        EffectBehavior::<String>::think(&mut spark, &mut fx, LIFETIME);
        assert!(fx.is_killed());
    }

    #[test]
    fn test_draw_goes_through_view() {
        let (spark, fx) = spawned(11, Point::new(200, 200), 0);
        let mut view = View::new(100, 100);
        view.set_origin(Point::new(150, 150));

        let mut renderer = RecordingRenderer::new();
        EffectBehavior::<String>::draw(&spark, &fx, &view, &mut renderer);

        assert_eq!(renderer.calls.len(), spark.particles().len());
        for (call, p) in renderer.calls.iter().zip(spark.particles()) {
            match call {
                DrawCall::Fill { rect, color } => {
                    assert_eq!(rect.origin(), p.rect.origin() - Point::new(150, 150));
                    assert_eq!(*color, p.color);
                }
                other => panic!("unexpected draw call {other:?}"),
            }
        }
    }
}
