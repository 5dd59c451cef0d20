use crate::constants::*;
use crate::event_log::EventLog;
use crate::input::Button;
use crate::rendering::draw_text;
use crate::simulation::Simulation;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

const PANEL_BACKGROUND: Color = Color::RGB(40, 44, 52);
const LOG_BACKGROUND: Color = Color::RGB(24, 26, 31);
const TEXT: Color = Color::RGB(230, 230, 230);
const DIM_TEXT: Color = Color::RGB(170, 170, 170);
const LOG_TEXT: Color = Color::RGB(180, 220, 180);
const LOG_LINE_CHARS: usize = 44;

/// What the side panel shows for one frame.
pub struct PanelView<'a> {
    pub simulation: &'a Simulation,
    pub log: &'a EventLog,
    pub running: bool,
    pub max_vehicles: usize,
}

impl PanelView<'_> {
    pub fn status_lines(&self) -> Vec<String> {
        let signals = self.simulation.signals();
        vec![
            format!(
                "Vehicles in circulation: {}/{}",
                self.simulation.vehicles().len(),
                self.max_vehicles
            ),
            format!("Pedestrians: {}", self.simulation.pedestrians().len()),
            format!(
                "State: {}",
                if self.running { "RUNNING" } else { "PAUSED" }
            ),
            format!("Phase {}: {}", signals.phase().index(), signals.phase()),
            format!("Layout: {}", signals.layout()),
            format!(
                "Mode: {}",
                if signals.is_manual() { "MANUAL" } else { "AUTOMATIC" }
            ),
        ]
    }
}

pub struct PanelRenderer;

impl PanelRenderer {
    pub fn render(
        canvas: &mut Canvas<Window>,
        view: &PanelView,
        font: Option<&Font>,
    ) -> Result<(), String> {
        canvas.set_draw_color(PANEL_BACKGROUND);
        canvas.fill_rect(Rect::new(
            PANEL_X - 10,
            0,
            (PANEL_WIDTH + 20) as u32,
            WINDOW_HEIGHT,
        ))?;

        Self::render_buttons(canvas, view.running, font)?;

        let Some(font) = font else {
            return Ok(());
        };

        let mut y = BUTTON_Y + BUTTON_HEIGHT + 16;
        for line in view.status_lines() {
            y += draw_text(canvas, font, &line, PANEL_X, y, TEXT)? as i32 + 4;
        }
        draw_text(
            canvas,
            font,
            "Space run/pause  L layout  M manual",
            PANEL_X,
            y + 4,
            DIM_TEXT,
        )?;

        Self::render_log(canvas, view.log, font)
    }

    fn render_buttons(
        canvas: &mut Canvas<Window>,
        running: bool,
        font: Option<&Font>,
    ) -> Result<(), String> {
        for button in Button::ALL {
            let rect = button.rect();
            let active = matches!(
                (button, running),
                (Button::Start, true) | (Button::Pause, false)
            );
            canvas.set_draw_color(if active {
                Color::RGB(70, 130, 90)
            } else {
                Color::RGB(80, 86, 98)
            });
            let screen = Rect::new(rect.x, rect.y, rect.width as u32, rect.height as u32);
            canvas.fill_rect(screen)?;
            canvas.set_draw_color(Color::RGB(200, 200, 200));
            canvas.draw_rect(screen)?;

            if let Some(font) = font {
                let (width, height) = font.size_of(button.label()).map_err(|e| e.to_string())?;
                let x = rect.x + (rect.width - width as i32) / 2;
                let y = rect.y + (rect.height - height as i32) / 2;
                draw_text(canvas, font, button.label(), x, y, TEXT)?;
            }
        }
        Ok(())
    }

    fn render_log(canvas: &mut Canvas<Window>, log: &EventLog, font: &Font) -> Result<(), String> {
        let height = WINDOW_HEIGHT as i32 - LOG_PANE_Y - 10;
        canvas.set_draw_color(LOG_BACKGROUND);
        canvas.fill_rect(Rect::new(
            PANEL_X - 4,
            LOG_PANE_Y,
            (PANEL_WIDTH + 8) as u32,
            height as u32,
        ))?;

        let visible = visible_log_lines(height);
        let mut y = LOG_PANE_Y + 4;
        for line in log.tail(visible) {
            let shown: String = line.chars().take(LOG_LINE_CHARS).collect();
            draw_text(canvas, font, &shown, PANEL_X, y, LOG_TEXT)?;
            y += LOG_LINE_HEIGHT;
        }
        Ok(())
    }
}

fn visible_log_lines(pane_height: i32) -> usize {
    ((pane_height - 8) / LOG_LINE_HEIGHT).max(0) as usize
}
