//! Decals - static, layer-ordered sprite stamps
//!
//! A decal has no behavior: it shows one frame of a sprite at a world point
//! until the scheduler is torn down.

use std::rc::Rc;

use crate::asset::SpriteHandle;
use crate::geom::{Point, Rect};
use crate::render::Renderer;

use super::view::View;

/// A live decal, owned by the scheduler
#[derive(Debug)]
pub struct Decal<T> {
    /// World position
    pub origin: Point,
    /// Screen position as of the last draw pass
    pub position: Point,
    pub layer: u32,
    pub sprite: SpriteHandle<T>,
    pub frame: u32,
}

impl<T> Decal<T> {
    pub fn new(sprite: &SpriteHandle<T>, frame: u32, origin: Point, layer: u32) -> Self {
        Self {
            origin,
            position: origin,
            layer,
            sprite: Rc::clone(sprite),
            frame,
        }
    }

    /// Refresh the screen position and draw the decal's frame there
    pub fn draw(&mut self, view: &View, renderer: &mut dyn Renderer<T>) {
        self.position = view.to_screen(self.origin);
        let src = self.sprite.frame_rect(self.frame);
        let dst = Rect::at(self.position, src.w, src.h);
        renderer.draw_sprite(self.sprite.texture(), src, dst);
    }
}
