//! Sprite animation playback
//!
//! Steps through the frames of a sprite sheet at a fixed frame rate, either
//! once (holding the last frame) or looping.

use std::rc::Rc;

use crate::asset::SpriteHandle;
use crate::clock::Millis;
use crate::geom::{Point, Rect};
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimMode {
    /// Frame stays where it is
    #[default]
    Stopped,
    /// Play up to the last frame, then hold it
    Once,
    /// Wrap back to frame 0 after the last frame
    Loop,
}

#[derive(Debug)]
pub struct Anim<T> {
    sprite: SpriteHandle<T>,
    mode: AnimMode,
    frame: u32,
    /// Delay between frames (ms)
    frame_rate: Millis,
    next_frame: Option<Millis>,
    /// Screen position of the top-left corner
    position: Point,
}

impl<T> Anim<T> {
    pub fn new(sprite: &SpriteHandle<T>) -> Self {
        Self {
            sprite: Rc::clone(sprite),
            mode: AnimMode::Stopped,
            frame: 0,
            frame_rate: 0,
            next_frame: None,
            position: Point::ZERO,
        }
    }

    pub fn mode(&self) -> AnimMode {
        self.mode
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_playing(&self) -> bool {
        self.next_frame.is_some()
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Jump to `frame`; out-of-range frames are ignored
    pub fn set_frame(&mut self, frame: u32) {
        if frame < self.sprite.frame_count() {
            self.frame = frame;
        }
    }

    pub fn start(&mut self, mode: AnimMode, frame_rate: Millis, now: Millis) {
        self.mode = mode;
        self.frame_rate = frame_rate;
        self.next_frame = match mode {
            AnimMode::Stopped => None,
            _ if frame_rate == 0 => None,
            _ => Some(now + frame_rate),
        };
    }

    pub fn stop(&mut self) {
        self.mode = AnimMode::Stopped;
        self.frame_rate = 0;
        self.next_frame = None;
    }

    /// Advance at most one frame if its time has come
    pub fn update(&mut self, now: Millis) {
        let frame_count = self.sprite.frame_count();
        let Some(deadline) = self.next_frame else {
            return;
        };
        if frame_count <= 1 || now < deadline {
            return;
        }

        let last = frame_count - 1;
        if self.mode == AnimMode::Loop || self.frame < last {
            self.frame = (self.frame + 1) % frame_count;
            self.next_frame = Some(now + self.frame_rate);
        } else {
            // played once, hold the last frame
            self.next_frame = None;
            self.frame_rate = 0;
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer<T>) {
        let src = self.sprite.frame_rect(self.frame);
        renderer.draw_sprite(self.sprite.texture(), src, Rect::at(self.position, src.w, src.h));
    }
}
