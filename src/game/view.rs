//! Camera view over the world
//!
//! Entities live in world coordinates; the view origin is the world point
//! shown at the top-left corner of the screen.

use crate::geom::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    origin: Point,
    width: i32,
    height: i32,
}

impl View {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            origin: Point::ZERO,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Move the view so `target` sits at the screen center
    pub fn center_on(&mut self, target: Point) {
        self.origin = Point::new(target.x - (self.width >> 1), target.y - (self.height >> 1));
    }

    /// Pan the view by `delta` world pixels
    pub fn scroll(&mut self, delta: Point) {
        self.origin = self.origin + delta;
    }

    /// World point to screen point
    pub fn to_screen(&self, world: Point) -> Point {
        world - self.origin
    }

    /// Screen point to world point
    pub fn to_world(&self, screen: Point) -> Point {
        screen + self.origin
    }
}
