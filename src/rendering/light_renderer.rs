use crate::direction::{CrossingAxis, Direction};
use crate::geometry::rect_extensions::ToScreen;
use crate::geometry::Rect;
use crate::intersection::{LightState, PedestrianLightState, SignalController};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const HOUSING: Color = Color::RGB(25, 25, 25);
const BULB: i32 = 10;
const BULB_PAD: i32 = 2;
const HOUSING_LONG: i32 = 3 * BULB + 4 * BULB_PAD;
const HOUSING_SHORT: i32 = BULB + 2 * BULB_PAD;

pub struct LightRenderer;

impl LightRenderer {
    pub fn render(canvas: &mut Canvas<Window>, signals: &SignalController) -> Result<(), String> {
        for direction in Direction::ALL {
            if !signals.layout().carries(direction) {
                continue;
            }
            Self::render_vehicle_light(canvas, direction, signals.vehicle_light(direction))?;
        }
        for axis in [CrossingAxis::NorthSouth, CrossingAxis::EastWest] {
            Self::render_pedestrian_light(canvas, axis, signals.pedestrian_light(axis))?;
        }
        Ok(())
    }

    fn render_vehicle_light(
        canvas: &mut Canvas<Window>,
        direction: Direction,
        state: LightState,
    ) -> Result<(), String> {
        let housing = housing(direction);
        canvas.set_draw_color(HOUSING);
        canvas.fill_rect(housing.to_screen())?;

        for (slot, bulb_state) in [LightState::Red, LightState::Yellow, LightState::Green]
            .into_iter()
            .enumerate()
        {
            canvas.set_draw_color(bulb_color(bulb_state, bulb_state == state));
            canvas.fill_rect(bulb(&housing, slot as i32).to_screen())?;
        }
        Ok(())
    }

    fn render_pedestrian_light(
        canvas: &mut Canvas<Window>,
        axis: CrossingAxis,
        state: PedestrianLightState,
    ) -> Result<(), String> {
        let signal = pedestrian_signal(axis);
        canvas.set_draw_color(match state {
            PedestrianLightState::Green => Color::RGB(0, 230, 90),
            PedestrianLightState::Red => Color::RGB(230, 40, 40),
        });
        canvas.fill_rect(signal.to_screen())?;
        canvas.set_draw_color(Color::RGB(255, 255, 255));
        canvas.draw_rect(signal.to_screen())
    }
}

/// Signal housing in the grass corner on the approach side of each lane.
fn housing(direction: Direction) -> Rect {
    match direction {
        Direction::North => Rect::new(208, 372, HOUSING_SHORT, HOUSING_LONG),
        Direction::South => Rect::new(378, 188, HOUSING_SHORT, HOUSING_LONG),
        Direction::East => Rect::new(188, 208, HOUSING_LONG, HOUSING_SHORT),
        Direction::West => Rect::new(372, 378, HOUSING_LONG, HOUSING_SHORT),
    }
}

/// Bulb `slot` (0 red, 1 yellow, 2 green) inside a housing.
fn bulb(housing: &Rect, slot: i32) -> Rect {
    let offset = BULB_PAD + slot * (BULB + BULB_PAD);
    if housing.height > housing.width {
        Rect::new(housing.x + BULB_PAD, housing.y + offset, BULB, BULB)
    } else {
        Rect::new(housing.x + offset, housing.y + BULB_PAD, BULB, BULB)
    }
}

fn pedestrian_signal(axis: CrossingAxis) -> Rect {
    match axis {
        CrossingAxis::NorthSouth => Rect::new(232, 218, 12, 12),
        CrossingAxis::EastWest => Rect::new(218, 232, 12, 12),
    }
}

fn bulb_color(state: LightState, lit: bool) -> Color {
    match (state, lit) {
        (LightState::Red, true) => Color::RGB(255, 40, 40),
        (LightState::Yellow, true) => Color::RGB(255, 210, 0),
        (LightState::Green, true) => Color::RGB(0, 230, 90),
        (LightState::Red, false) => Color::RGB(70, 20, 20),
        (LightState::Yellow, false) => Color::RGB(70, 60, 10),
        (LightState::Green, false) => Color::RGB(10, 60, 30),
    }
}
