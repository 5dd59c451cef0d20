use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::*;
use crate::direction::RoadLayout;
use crate::error::{AppError, AppResult};

pub const CONFIG_ENV_VAR: &str = "TRAFFIC_SIM_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub timers: TimerConfig,
    pub limits: LimitConfig,
    pub phases: PhaseConfig,
    pub layout: RoadLayout,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    pub start_running: bool,
    pub font_path: PathBuf,
}

/// Timer intervals in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub tick_ms: u64,
    pub phase_ms: u64,
    pub vehicle_spawn_ms: u64,
    pub pedestrian_spawn_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    pub max_vehicles: usize,
    pub max_pedestrians: usize,
}

/// Phase hold lengths, counted in phase-timer ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseConfig {
    pub green_ticks: u32,
    pub yellow_ticks: u32,
}

impl SimulationConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file named by the first argument or by `TRAFFIC_SIM_CONFIG`,
    /// falling back to defaults when neither is given.
    pub fn load() -> AppResult<Self> {
        let path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());
        match path {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let t = &self.timers;
        if [t.tick_ms, t.phase_ms, t.vehicle_spawn_ms, t.pedestrian_spawn_ms].contains(&0) {
            return Err(AppError::InvalidConfig(
                "timer intervals must be greater than zero".to_string(),
            ));
        }
        if self.limits.max_vehicles == 0 || self.limits.max_pedestrians == 0 {
            return Err(AppError::InvalidConfig(
                "spawn caps must be greater than zero".to_string(),
            ));
        }
        if self.phases.green_ticks == 0 || self.phases.yellow_ticks == 0 {
            return Err(AppError::InvalidConfig(
                "phase hold ticks must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl TimerConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn phase(&self) -> Duration {
        Duration::from_millis(self.phase_ms)
    }

    pub fn vehicle_spawn(&self) -> Duration {
        Duration::from_millis(self.vehicle_spawn_ms)
    }

    pub fn pedestrian_spawn(&self) -> Duration {
        Duration::from_millis(self.pedestrian_spawn_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timers: TimerConfig::default(),
            limits: LimitConfig::default(),
            phases: PhaseConfig::default(),
            layout: RoadLayout::TwoWay,
            seed: None,
            start_running: false,
            font_path: PathBuf::from("assets/fonts/font.ttf"),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_INTERVAL.as_millis() as u64,
            phase_ms: PHASE_INTERVAL.as_millis() as u64,
            vehicle_spawn_ms: VEHICLE_SPAWN_INTERVAL.as_millis() as u64,
            pedestrian_spawn_ms: PEDESTRIAN_SPAWN_INTERVAL.as_millis() as u64,
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_vehicles: MAX_VEHICLES,
            max_pedestrians: MAX_PEDESTRIANS,
        }
    }
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            green_ticks: GREEN_HOLD_TICKS,
            yellow_ticks: YELLOW_HOLD_TICKS,
        }
    }
}
