//! Shared test fixtures: an in-memory asset loader, a draw-call recorder,
//! a scriptable effect behavior and a log capture helper.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use crate::asset::{LoadError, Sound, SoundLoader, Sprite, SpriteLoader};
use crate::clock::Millis;
use crate::game::{EffectBehavior, EffectState, Linker, Scheduler, Spawner, View};
use crate::geom::{Color, Point, Rect};
use crate::render::Renderer;

/// Loader producing 100x100 sheets of 25x25 frames whose texture is the
/// sprite name, and sounds whose audio is the sound name.
#[derive(Debug, Default)]
pub struct FakeLoader {
    loads: HashMap<String, usize>,
    sound_loads: HashMap<String, usize>,
    failing: HashSet<String>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every sprite or sound load of `name` fail
    pub fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn load_count(&self, name: &str) -> usize {
        self.loads.get(name).copied().unwrap_or(0)
    }

    pub fn sound_load_count(&self, name: &str) -> usize {
        self.sound_loads.get(name).copied().unwrap_or(0)
    }
}

impl SpriteLoader for FakeLoader {
    type Texture = String;

    fn load_sprite(&mut self, name: &str) -> Result<Sprite<String>, LoadError> {
        *self.loads.entry(name.to_string()).or_insert(0) += 1;
        if self.failing.contains(name) {
            return Err(LoadError::NotFound(name.to_string()));
        }
        Ok(Sprite::new(name, name.to_string(), (100, 100), (25, 25)))
    }
}

impl SoundLoader for FakeLoader {
    type Audio = String;

    fn load_sound(&mut self, name: &str) -> Result<Sound<String>, LoadError> {
        *self.sound_loads.entry(name.to_string()).or_insert(0) += 1;
        if self.failing.contains(name) {
            return Err(LoadError::NotFound(name.to_string()));
        }
        Ok(Sound::new(name, name.to_string()))
    }
}

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Sprite { texture: String, src: Rect, dst: Rect },
    Fill { rect: Rect, color: Color },
}

/// Renderer that records every call in order
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer<String> for RecordingRenderer {
    fn draw_sprite(&mut self, texture: &String, src: Rect, dst: Rect) {
        self.calls.push(DrawCall::Sprite {
            texture: texture.clone(),
            src,
            dst,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill { rect, color });
    }
}

/// Formatted log output captured from a `tracing` subscriber
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Number of log lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(needle)).count()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber writing into a buffer
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer)
}

/// Run `behavior`'s spawn hook at `fx.origin` against a throwaway linker
/// and scheduler
pub fn spawn_detached<B>(behavior: &mut B, fx: &mut EffectState, now: Millis)
where
    B: EffectBehavior<String>,
{
    let linker = Linker::new();
    let mut scheduler = Scheduler::new(1);
    let origin = fx.origin;
    behavior.spawn(fx, origin, &mut Spawner::new(&linker, &mut scheduler, now));
}

/// Shared record of behavior hook calls as `(hook, tag)` pairs
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<(&'static str, u32)>>>);

impl EventLog {
    pub fn push(&self, hook: &'static str, tag: u32) {
        self.0.borrow_mut().push((hook, tag));
    }

    pub fn count(&self, hook: &str, tag: u32) -> usize {
        self.0.borrow().iter().filter(|(h, t)| *h == hook && *t == tag).count()
    }

    pub fn events(&self) -> Vec<(&'static str, u32)> {
        self.0.borrow().clone()
    }
}

/// Effect behavior driven by a few switches, logging every hook it sees.
///
/// Draw fills a 1x1 rect at the effect's screen position.
#[derive(Debug, Clone)]
pub struct Scripted {
    pub tag: u32,
    log: EventLog,
    think_delay: Option<Millis>,
    repeat: bool,
    kill_on_spawn: bool,
    kill_on_think: bool,
}

impl Scripted {
    pub fn new(tag: u32, log: &EventLog) -> Self {
        Self {
            tag,
            log: log.clone(),
            think_delay: None,
            repeat: false,
            kill_on_spawn: false,
            kill_on_think: false,
        }
    }

    /// Schedule the first think `delay` ms after spawn
    pub fn think_after(mut self, delay: Millis) -> Self {
        self.think_delay = Some(delay);
        self
    }

    /// Reschedule with the same delay after every think
    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn kill_on_spawn(mut self) -> Self {
        self.kill_on_spawn = true;
        self
    }

    pub fn kill_on_think(mut self) -> Self {
        self.kill_on_think = true;
        self
    }
}

impl<T> EffectBehavior<T> for Scripted {
    fn spawn(&mut self, fx: &mut EffectState, _origin: Point, spawner: &mut Spawner<'_, T>) {
        self.log.push("spawn", self.tag);
        if let Some(delay) = self.think_delay {
            fx.think_in(spawner.now(), delay);
        }
        if self.kill_on_spawn {
            fx.kill();
        }
    }

    fn think(&mut self, fx: &mut EffectState, now: Millis) {
        self.log.push("think", self.tag);
        if self.repeat {
            if let Some(delay) = self.think_delay {
                fx.think_in(now, delay);
            }
        }
        if self.kill_on_think {
            fx.kill();
        }
    }

    fn draw(&self, fx: &EffectState, view: &View, renderer: &mut dyn Renderer<T>) {
        self.log.push("draw", self.tag);
        renderer.fill_rect(Rect::at(view.to_screen(fx.origin), 1, 1), Color::WHITE);
    }

    fn die(&mut self, _fx: &mut EffectState) {
        self.log.push("die", self.tag);
    }
}
