use crate::constants::CANVAS_ORIGIN;
use crate::geometry::{Position, Rect};

/// Maps simulation geometry onto window coordinates.
pub trait ToScreen {
    type Output;

    fn to_screen(&self) -> Self::Output;
}

impl ToScreen for Rect {
    type Output = sdl2::rect::Rect;

    fn to_screen(&self) -> sdl2::rect::Rect {
        sdl2::rect::Rect::new(
            self.x + CANVAS_ORIGIN.0,
            self.y + CANVAS_ORIGIN.1,
            self.width.max(1) as u32,
            self.height.max(1) as u32,
        )
    }
}

impl ToScreen for Position {
    type Output = sdl2::rect::Point;

    fn to_screen(&self) -> sdl2::rect::Point {
        sdl2::rect::Point::new(self.x + CANVAS_ORIGIN.0, self.y + CANVAS_ORIGIN.1)
    }
}
