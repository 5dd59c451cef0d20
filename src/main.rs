use anyhow::Context;
use sdl2::render::BlendMode;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod constants;
mod direction;
mod error;
mod event_log;
mod geometry;
mod input;
mod intersection;
mod pedestrian;
mod rendering;
mod scheduler;
mod simulation;
mod statistics;
mod vehicle;

use app::App;
use config::SimulationConfig;
use constants::{FRAME_DURATION, WINDOW_HEIGHT, WINDOW_WIDTH};
use error::AppError;

const FONT_POINT_SIZE: u16 = 13;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Crossroads intersection simulator");

    let config = SimulationConfig::load().context("loading configuration")?;
    info!(
        layout = %config.layout,
        seed = ?config.seed,
        max_vehicles = config.limits.max_vehicles,
        max_pedestrians = config.limits.max_pedestrians,
        "Configuration loaded"
    );

    let sdl_context = sdl2::init().map_err(AppError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(AppError::Sdl)?;
    let ttf_context = sdl2::ttf::init().map_err(|e| AppError::Sdl(e.to_string()))?;

    let window = video_subsystem
        .window("Crossroads - Intersection Simulator", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| AppError::Sdl(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| AppError::Sdl(e.to_string()))?;
    canvas.set_blend_mode(BlendMode::Blend);

    let font = match ttf_context.load_font(&config.font_path, FONT_POINT_SIZE) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!(path = %config.font_path.display(), error = %e, "Font not available, text disabled");
            None
        }
    };

    let mut app = App::new(&config);
    let mut event_pump = sdl_context.event_pump().map_err(AppError::Sdl)?;
    let mut running = true;
    let mut last_frame = Instant::now();

    print_controls();

    while running {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame);
        last_frame = now;

        for event in event_pump.poll_iter() {
            if !app.process_event(&event) {
                running = false;
            }
        }

        app.update(delta_time);
        app.render(&mut canvas, font.as_ref()).map_err(AppError::Sdl)?;

        let frame_time = now.elapsed();
        if frame_time < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - frame_time);
        }
    }

    info!(log_lines = app.log().len(), "Shutting down");
    app.statistics().display();
    Ok(())
}

fn print_controls() {
    println!("=== CONTROLS ===");
    println!("Space:         Start / pause the simulation");
    println!("Ctrl+C:        Clear the event log");
    println!("Hold Ctrl:     Show debug overlay");
    println!("L:             Toggle two-way / one-way roads");
    println!("M:             Toggle manual light control");
    println!("Arrow keys:    Cycle the light for that direction (manual mode)");
    println!("Esc:           Exit and show final statistics");
}
