use std::time::Duration;

pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 640;
pub const FPS: u32 = 60;
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / FPS as u64);

// Simulation canvas, in simulation pixels. The canvas is drawn at CANVAS_ORIGIN.
pub const CANVAS_SIZE: i32 = 600;
pub const CANVAS_ORIGIN: (i32, i32) = (20, 20);

pub const ROAD_NEAR_EDGE: i32 = 250;
pub const ROAD_FAR_EDGE: i32 = 350;
pub const ROAD_CENTER: i32 = 300;
pub const INTERSECTION_SIZE: i32 = ROAD_FAR_EDGE - ROAD_NEAR_EDGE;

// One lane per travel direction.
pub const LANE_NORTHBOUND_X: i32 = 275;
pub const LANE_SOUTHBOUND_X: i32 = 325;
pub const LANE_EASTBOUND_Y: i32 = 275;
pub const LANE_WESTBOUND_Y: i32 = 325;
pub const LANE_TOLERANCE: i32 = 15;

pub const ENTRY_NEAR: i32 = 20;
pub const ENTRY_FAR: i32 = 580;

pub const STOP_ZONE_DEPTH: i32 = 30;
pub const STOP_ZONE_WIDTH: i32 = 15;
pub const STOP_PROBE_SIZE: i32 = 30;
pub const APPROACH_DISTANCE: i32 = 40;
pub const CROSSED_MARGIN: i32 = 20;

pub const FOLLOWING_DISTANCE: i32 = 50;
pub const VEHICLE_PEDESTRIAN_PROBE: i32 = 40;
pub const PEDESTRIAN_PROBE: i32 = 20;
pub const PEDESTRIAN_SAFE_DISTANCE: i32 = 80;
pub const PEDESTRIAN_ARRIVAL_DISTANCE: i32 = 5;

pub const EXIT_MIN: i32 = -50;
pub const EXIT_MAX: i32 = 650;

pub const MAX_VEHICLES: usize = 8;
pub const MAX_PEDESTRIANS: usize = 4;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const PHASE_INTERVAL: Duration = Duration::from_millis(3000);
pub const VEHICLE_SPAWN_INTERVAL: Duration = Duration::from_millis(2000);
pub const PEDESTRIAN_SPAWN_INTERVAL: Duration = Duration::from_millis(4000);

pub const GREEN_HOLD_TICKS: u32 = 2;
pub const YELLOW_HOLD_TICKS: u32 = 1;

pub const LOG_MAX_LINES: usize = 1000;
pub const LOG_KEEP_LINES: usize = 500;

// Control panel, in window pixels.
pub const PANEL_X: i32 = CANVAS_ORIGIN.0 * 2 + CANVAS_SIZE;
pub const PANEL_WIDTH: i32 = WINDOW_WIDTH as i32 - PANEL_X - CANVAS_ORIGIN.0;
pub const BUTTON_Y: i32 = 20;
pub const BUTTON_WIDTH: i32 = 100;
pub const BUTTON_HEIGHT: i32 = 32;
pub const BUTTON_GAP: i32 = 10;
pub const LOG_PANE_Y: i32 = 230;
pub const LOG_LINE_HEIGHT: i32 = 16;
