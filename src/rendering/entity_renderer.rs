use crate::direction::Direction;
use crate::geometry::rect_extensions::ToScreen;
use crate::geometry::Rect;
use crate::pedestrian::{Pedestrian, PedestrianState};
use crate::vehicle::Vehicle;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const WINDSHIELD: Color = Color::RGBA(170, 210, 240, 220);
const BRAKE_LIGHT: Color = Color::RGB(255, 30, 30);
const OUTLINE: Color = Color::RGB(20, 20, 20);
const PEDESTRIAN_SIZE: i32 = 8;

pub struct EntityRenderer;

impl EntityRenderer {
    pub fn render_vehicles(canvas: &mut Canvas<Window>, vehicles: &[Vehicle]) -> Result<(), String> {
        for vehicle in vehicles {
            Self::render_vehicle(canvas, vehicle)?;
        }
        Ok(())
    }

    pub fn render_vehicle(canvas: &mut Canvas<Window>, vehicle: &Vehicle) -> Result<(), String> {
        let body = vehicle.footprint();
        let color = vehicle.color;

        canvas.set_draw_color(Color::RGB(color.r, color.g, color.b));
        canvas.fill_rect(body.to_screen())?;
        canvas.set_draw_color(OUTLINE);
        canvas.draw_rect(body.to_screen())?;

        canvas.set_draw_color(WINDSHIELD);
        canvas.fill_rect(end_strip(&body, vehicle.direction, 3, 4).to_screen())?;

        if vehicle.is_stopped() {
            canvas.set_draw_color(BRAKE_LIGHT);
            canvas.fill_rect(end_strip(&body, vehicle.direction.opposite(), 0, 2).to_screen())?;
        }
        Ok(())
    }

    pub fn render_pedestrians(
        canvas: &mut Canvas<Window>,
        pedestrians: &[Pedestrian],
    ) -> Result<(), String> {
        for pedestrian in pedestrians {
            let color = match pedestrian.state {
                PedestrianState::Waiting => Color::RGB(255, 165, 0),
                PedestrianState::Crossing => Color::RGB(0, 170, 255),
                PedestrianState::Done => continue,
            };
            let body = Rect::centered(pedestrian.position, PEDESTRIAN_SIZE, PEDESTRIAN_SIZE);
            canvas.set_draw_color(color);
            canvas.fill_rect(body.to_screen())?;
            canvas.set_draw_color(OUTLINE);
            canvas.draw_rect(body.to_screen())?;
        }
        Ok(())
    }
}

/// Strip across the `facing` end of a body, `inset` pixels in and `depth` deep.
fn end_strip(body: &Rect, facing: Direction, inset: i32, depth: i32) -> Rect {
    match facing {
        Direction::North => Rect::new(body.x + 2, body.top() + inset, body.width - 4, depth),
        Direction::South => {
            Rect::new(body.x + 2, body.bottom() - inset - depth, body.width - 4, depth)
        }
        Direction::East => {
            Rect::new(body.right() - inset - depth, body.y + 2, depth, body.height - 4)
        }
        Direction::West => Rect::new(body.left() + inset, body.y + 2, depth, body.height - 4),
    }
}
