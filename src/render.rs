//! Renderer seam
//!
//! The engine never talks to a graphics API directly. Backends implement
//! [`Renderer`] for their texture type; tests use a recorder.

use crate::geom::{Color, Rect};

/// Drawing operations the engine needs from a backend.
///
/// Calls are fire-and-forget: backend errors are the backend's concern.
pub trait Renderer<T> {
    /// Copy the `src` region of `texture` to `dst` on screen
    fn draw_sprite(&mut self, texture: &T, src: Rect, dst: Rect);

    /// Fill a screen rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);
}
