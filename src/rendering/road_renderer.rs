use crate::constants::*;
use crate::direction::{CrossingAxis, RoadLayout};
use crate::geometry::rect_extensions::ToScreen;
use crate::geometry::{Position, Rect};
use crate::intersection::IntersectionBounds;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const GRASS: Color = Color::RGB(50, 150, 60);
const ASPHALT: Color = Color::RGB(51, 51, 51);
const JUNCTION: Color = Color::RGB(60, 60, 60);
const EDGE_LINE: Color = Color::RGB(255, 255, 255);
const CENTER_LINE: Color = Color::RGB(240, 200, 0);

const DASH_LENGTH: i32 = 12;
const DASH_GAP: i32 = 10;
const STRIPE_WIDTH: i32 = 5;
const STRIPE_SPACING: i32 = 10;
const CROSSWALK_DEPTH: i32 = 16;

pub struct RoadRenderer;

impl RoadRenderer {
    pub fn render(canvas: &mut Canvas<Window>, layout: RoadLayout) -> Result<(), String> {
        Self::render_background(canvas)?;
        Self::render_road_surface(canvas)?;
        Self::render_edges(canvas)?;
        Self::render_center_lines(canvas, layout)?;
        Self::render_crosswalks(canvas)
    }

    pub fn render_background(canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(30, 30, 36));
        canvas.clear();

        canvas.set_draw_color(GRASS);
        canvas.fill_rect(Rect::new(0, 0, CANVAS_SIZE, CANVAS_SIZE).to_screen())
    }

    pub fn render_road_surface(canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(ASPHALT);
        canvas.fill_rect(
            Rect::new(ROAD_NEAR_EDGE, 0, INTERSECTION_SIZE, CANVAS_SIZE).to_screen(),
        )?;
        canvas.fill_rect(
            Rect::new(0, ROAD_NEAR_EDGE, CANVAS_SIZE, INTERSECTION_SIZE).to_screen(),
        )?;

        canvas.set_draw_color(JUNCTION);
        canvas.fill_rect(IntersectionBounds::BOX.to_screen())
    }

    /// Solid curb lines, interrupted by the junction.
    pub fn render_edges(canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(EDGE_LINE);
        for edge in [ROAD_NEAR_EDGE, ROAD_FAR_EDGE] {
            for (from, to) in [(0, ROAD_NEAR_EDGE), (ROAD_FAR_EDGE, CANVAS_SIZE)] {
                canvas.draw_line(
                    Position::new(edge, from).to_screen(),
                    Position::new(edge, to).to_screen(),
                )?;
                canvas.draw_line(
                    Position::new(from, edge).to_screen(),
                    Position::new(to, edge).to_screen(),
                )?;
            }
        }
        Ok(())
    }

    /// Dashed yellow line between opposing lanes, white when the road is one-way.
    pub fn render_center_lines(
        canvas: &mut Canvas<Window>,
        layout: RoadLayout,
    ) -> Result<(), String> {
        let color = match layout {
            RoadLayout::TwoWay => CENTER_LINE,
            RoadLayout::OneWay => EDGE_LINE,
        };
        canvas.set_draw_color(color);

        for (from, to) in [(0, ROAD_NEAR_EDGE), (ROAD_FAR_EDGE, CANVAS_SIZE)] {
            let mut start = from;
            while start < to {
                let end = (start + DASH_LENGTH).min(to);
                canvas.fill_rect(Rect::new(ROAD_CENTER - 1, start, 2, end - start).to_screen())?;
                canvas.fill_rect(Rect::new(start, ROAD_CENTER - 1, end - start, 2).to_screen())?;
                start += DASH_LENGTH + DASH_GAP;
            }
        }
        Ok(())
    }

    pub fn render_crosswalks(canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(EDGE_LINE);
        for axis in [CrossingAxis::NorthSouth, CrossingAxis::EastWest] {
            for (start, _) in IntersectionBounds::crosswalks(axis) {
                for stripe in crosswalk_stripes(axis, start) {
                    canvas.fill_rect(stripe.to_screen())?;
                }
            }
        }
        Ok(())
    }
}

/// Zebra stripes for the crosswalk that starts at `start`.
fn crosswalk_stripes(axis: CrossingAxis, start: Position) -> Vec<Rect> {
    let half = CROSSWALK_DEPTH / 2;
    (ROAD_NEAR_EDGE + 2..ROAD_FAR_EDGE - 2)
        .step_by(STRIPE_SPACING as usize)
        .map(|offset| match axis {
            // Crossing the N-S road: walkers move along x, stripes run along y.
            CrossingAxis::NorthSouth => {
                Rect::new(offset, start.y - half, STRIPE_WIDTH, CROSSWALK_DEPTH)
            }
            CrossingAxis::EastWest => {
                Rect::new(start.x - half, offset, CROSSWALK_DEPTH, STRIPE_WIDTH)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripes_stay_on_the_road() {
        for axis in [CrossingAxis::NorthSouth, CrossingAxis::EastWest] {
            for (start, _) in IntersectionBounds::crosswalks(axis) {
                let stripes = crosswalk_stripes(axis, start);
                assert_eq!(stripes.len(), 10);
                for stripe in stripes {
                    let (along, across) = match axis {
                        CrossingAxis::NorthSouth => (stripe.left(), stripe.right()),
                        CrossingAxis::EastWest => (stripe.top(), stripe.bottom()),
                    };
                    assert!(along >= ROAD_NEAR_EDGE);
                    assert!(across <= ROAD_FAR_EDGE);
                }
            }
        }
    }

    #[test]
    fn stripes_do_not_touch_the_junction() {
        for axis in [CrossingAxis::NorthSouth, CrossingAxis::EastWest] {
            for (start, _) in IntersectionBounds::crosswalks(axis) {
                for stripe in crosswalk_stripes(axis, start) {
                    assert!(!stripe.intersects(&IntersectionBounds::BOX));
                }
            }
        }
    }
}
