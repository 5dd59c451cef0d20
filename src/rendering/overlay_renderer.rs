use crate::constants::CANVAS_ORIGIN;
use crate::direction::Direction;
use crate::geometry::rect_extensions::ToScreen;
use crate::intersection::IntersectionBounds;
use crate::rendering::draw_text;
use crate::simulation::Simulation;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

const ZONE: Color = Color::RGBA(255, 220, 0, 90);
const ZONE_OUTLINE: Color = Color::RGB(255, 220, 0);
const JUNCTION_OUTLINE: Color = Color::RGB(255, 60, 60);
const LABEL: Color = Color::RGB(255, 255, 255);

/// Debug view drawn while Ctrl is held.
pub struct OverlayRenderer;

impl OverlayRenderer {
    pub fn render(
        canvas: &mut Canvas<Window>,
        simulation: &Simulation,
        font: Option<&Font>,
    ) -> Result<(), String> {
        let layout = simulation.signals().layout();
        for direction in Direction::ALL {
            if !layout.carries(direction) {
                continue;
            }
            let zone = IntersectionBounds::stop_zone(direction).to_screen();
            canvas.set_draw_color(ZONE);
            canvas.fill_rect(zone)?;
            canvas.set_draw_color(ZONE_OUTLINE);
            canvas.draw_rect(zone)?;
        }

        canvas.set_draw_color(JUNCTION_OUTLINE);
        canvas.draw_rect(IntersectionBounds::BOX.to_screen())?;

        for vehicle in simulation.vehicles() {
            canvas.set_draw_color(if vehicle.entered_intersection {
                JUNCTION_OUTLINE
            } else {
                LABEL
            });
            canvas.draw_rect(vehicle.footprint().to_screen())?;
        }
        for pedestrian in simulation.pedestrians() {
            canvas.set_draw_color(ZONE_OUTLINE);
            canvas.draw_rect(pedestrian.probe().to_screen())?;
        }

        let Some(font) = font else {
            return Ok(());
        };

        for vehicle in simulation.vehicles() {
            let label = format!("#{} {}", vehicle.id, vehicle.direction.arrow());
            let at = vehicle.position.to_screen();
            draw_text(canvas, font, &label, at.x() + 10, at.y() - 8, LABEL)?;
        }

        let signals = simulation.signals();
        let x = CANVAS_ORIGIN.0 + 6;
        let mut y = CANVAS_ORIGIN.1 + 6;
        for direction in Direction::ALL {
            let line = format!("{direction}: {}", signals.vehicle_light(direction));
            y += draw_text(canvas, font, &line, x, y, LABEL)? as i32;
        }
        let line = format!("phase {} ({} ticks)", signals.phase(), signals.phase_ticks());
        draw_text(canvas, font, &line, x, y, LABEL)?;
        Ok(())
    }
}
