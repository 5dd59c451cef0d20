use std::fmt;

use crate::direction::{CrossingAxis, Direction, RoadLayout};
use crate::geometry::Position;
use crate::intersection::{LightState, Phase};
use crate::vehicle::VehicleKind;

/// Something worth telling the user about. The shell drains these into the
/// on-screen log and the statistics.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    VehicleSpawned {
        id: u32,
        direction: Direction,
        kind: VehicleKind,
        position: Position,
    },
    VehicleExited {
        id: u32,
        direction: Direction,
    },
    VehicleStoppedAtLight {
        id: u32,
        direction: Direction,
        light: LightState,
    },
    VehicleYielded {
        id: u32,
        direction: Direction,
        pedestrian: u32,
    },
    PedestrianSpawned {
        id: u32,
        axis: CrossingAxis,
    },
    PedestrianStartedCrossing {
        id: u32,
        axis: CrossingAxis,
    },
    PedestrianFinished {
        id: u32,
    },
    PhaseChanged {
        phase: Phase,
        walking: CrossingAxis,
    },
    WaitingForClearance,
    LayoutChanged(RoadLayout),
    ManualModeChanged(bool),
    ManualLightChanged {
        direction: Direction,
        light: LightState,
    },
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::VehicleSpawned {
                id,
                direction,
                kind,
                position,
            } => write!(
                f,
                "🚗 New {kind} #{id} heading {direction} {} at ({},{})",
                direction.arrow(),
                position.x,
                position.y
            ),
            SimEvent::VehicleExited { id, direction } => {
                write!(f, "🏁 Vehicle #{id} left the area heading {direction}")
            }
            SimEvent::VehicleStoppedAtLight {
                id,
                direction,
                light,
            } => write!(f, "🛑 Vehicle #{id} ({direction}) stops at {light} light"),
            SimEvent::VehicleYielded {
                id,
                direction,
                pedestrian,
            } => write!(
                f,
                "🚨 Vehicle #{id} ({direction}) stops for pedestrian P{pedestrian}"
            ),
            SimEvent::PedestrianSpawned { id, axis } => {
                write!(f, "🚶 Pedestrian P{id} waiting to cross {axis}")
            }
            SimEvent::PedestrianStartedCrossing { id, axis } => {
                write!(f, "🚶 Pedestrian P{id} starts crossing {axis}")
            }
            SimEvent::PedestrianFinished { id } => {
                write!(f, "🚶 Pedestrian P{id} finished crossing")
            }
            SimEvent::PhaseChanged { phase, walking } => {
                write!(f, "🚦 {phase} | pedestrians {walking}: GREEN")
            }
            SimEvent::WaitingForClearance => {
                f.write_str("⏳ Waiting for the intersection and crosswalks to clear...")
            }
            SimEvent::LayoutChanged(layout) => write!(f, "🛣️ Road layout: {layout}"),
            SimEvent::ManualModeChanged(true) => {
                f.write_str("🔧 MANUAL mode: automatic light control disabled")
            }
            SimEvent::ManualModeChanged(false) => {
                f.write_str("🤖 AUTOMATIC mode: automatic light control enabled")
            }
            SimEvent::ManualLightChanged { direction, light } => {
                write!(f, "🔧 MANUAL - {direction}: {light}")
            }
        }
    }
}
