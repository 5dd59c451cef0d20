use sdl2::event::Event;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::time::Duration;

use crate::config::SimulationConfig;
use crate::constants::{CANVAS_ORIGIN, CANVAS_SIZE};
use crate::event_log::EventLog;
use crate::input::{InputAction, InputHandler};
use crate::rendering::{
    EntityRenderer, LightRenderer, OverlayRenderer, PanelRenderer, PanelView, RoadRenderer,
};
use crate::scheduler::Scheduler;
use crate::simulation::Simulation;
use crate::statistics::Statistics;

pub struct App {
    simulation: Simulation,
    scheduler: Scheduler,
    log: EventLog,
    statistics: Statistics,
    input: InputHandler,
    running: bool,
    max_vehicles: usize,
}

impl App {
    pub fn new(config: &SimulationConfig) -> Self {
        let mut app = App {
            simulation: Simulation::new(config),
            scheduler: Scheduler::new(&config.timers),
            log: EventLog::new(),
            statistics: Statistics::new(),
            input: InputHandler::new(),
            running: false,
            max_vehicles: config.limits.max_vehicles,
        };
        app.log.push(format!(
            "🚦 Ready: {} phase, {} layout. Press Space or Start.",
            app.simulation.signals().phase(),
            app.simulation.signals().layout()
        ));
        if config.start_running {
            app.start();
        }
        app
    }

    #[cfg(test)]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feeds an SDL event through the input handler. Returns false on exit.
    pub fn process_event(&mut self, event: &Event) -> bool {
        let action = self.input.process_event(event);
        self.handle_action(action)
    }

    /// Returns false when the application should quit.
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::None => {}
            InputAction::ToggleRun => {
                if self.running {
                    self.pause();
                } else {
                    self.start();
                }
            }
            InputAction::Start => self.start(),
            InputAction::Pause => self.pause(),
            InputAction::ClearLog => {
                self.log.clear();
                tracing::debug!("Event log cleared");
            }
            InputAction::ToggleLayout => self.simulation.toggle_layout(),
            InputAction::ToggleManual => {
                let manual = !self.simulation.is_manual();
                self.simulation.set_manual(manual);
                self.scheduler.set_manual(manual, self.running);
            }
            InputAction::CycleLight(direction) => {
                if self.simulation.cycle_manual_light(direction).is_none() {
                    tracing::debug!(%direction, "Light change ignored outside manual mode");
                }
            }
            InputAction::Exit => return false,
        }
        self.flush_events();
        true
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.scheduler.start_all(self.simulation.is_manual());
        tracing::info!("Simulation started");
        self.log.push("▶️ Simulation started");
    }

    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.scheduler.stop_all();
        tracing::info!("Simulation paused");
        self.log.push("⏸️ Simulation paused");
    }

    /// Advances all timers by one frame's worth of time.
    pub fn update(&mut self, delta: Duration) {
        let firings = self.scheduler.advance(delta);

        for _ in 0..firings.phases {
            self.simulation.phase_tick();
        }
        for _ in 0..firings.vehicle_spawns {
            self.simulation.spawn_vehicle();
        }
        for _ in 0..firings.pedestrian_spawns {
            self.simulation.spawn_pedestrian();
        }
        for _ in 0..firings.ticks {
            self.simulation.tick();
            self.statistics
                .observe_vehicle_count(self.simulation.vehicles().len());
        }

        self.flush_events();
    }

    fn flush_events(&mut self) {
        for event in self.simulation.drain_events() {
            self.statistics.record(&event);
            self.log.push(event.to_string());
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, font: Option<&Font>) -> Result<(), String> {
        RoadRenderer::render(canvas, self.simulation.signals().layout())?;

        // Vehicles spawn and leave outside the visible road.
        canvas.set_clip_rect(Rect::new(
            CANVAS_ORIGIN.0,
            CANVAS_ORIGIN.1,
            CANVAS_SIZE as u32,
            CANVAS_SIZE as u32,
        ));
        EntityRenderer::render_vehicles(canvas, self.simulation.vehicles())?;
        EntityRenderer::render_pedestrians(canvas, self.simulation.pedestrians())?;
        LightRenderer::render(canvas, self.simulation.signals())?;
        if self.input.is_debug_overlay() {
            OverlayRenderer::render(canvas, &self.simulation, font)?;
        }
        canvas.set_clip_rect(None);

        let view = PanelView {
            simulation: &self.simulation,
            log: &self.log,
            running: self.running,
            max_vehicles: self.max_vehicles,
        };
        PanelRenderer::render(canvas, &view, font)?;

        canvas.present();
        Ok(())
    }
}
