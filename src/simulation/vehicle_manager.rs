use crate::constants::*;
use crate::geometry::Rect;
use crate::intersection::{IntersectionBounds, LightState};
use crate::vehicle::{MotionState, Vehicle};

use super::{SimEvent, Simulation};

/// Why a vehicle holds its position this tick. Rules are checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReason {
    Light(LightState),
    Pedestrian(u32),
    VehicleAhead(u32),
}

impl Simulation {
    pub(super) fn update_vehicles(&mut self) {
        for i in (0..self.vehicles.len()).rev() {
            let vehicle = &mut self.vehicles[i];
            if !vehicle.entered_intersection && vehicle.is_in_intersection() {
                vehicle.entered_intersection = true;
                tracing::trace!(id = vehicle.id, "Vehicle entered the intersection");
            }

            let was_stopped = self.vehicles[i].is_stopped();
            match self.stop_reason(&self.vehicles[i]) {
                Some(reason) => {
                    self.vehicles[i].state = MotionState::Stopped;
                    if !was_stopped {
                        self.report_stop(i, reason);
                    }
                }
                None => {
                    let vehicle = &mut self.vehicles[i];
                    vehicle.state = MotionState::Moving;
                    vehicle.advance();
                }
            }

            if self.vehicles[i]
                .position
                .is_out_of_bounds(EXIT_MIN, EXIT_MAX)
            {
                let vehicle = self.vehicles.remove(i);
                tracing::debug!(id = vehicle.id, direction = %vehicle.direction, "Vehicle left the area");
                self.emit(SimEvent::VehicleExited {
                    id: vehicle.id,
                    direction: vehicle.direction,
                });
            }
        }
    }

    pub(crate) fn stop_reason(&self, vehicle: &Vehicle) -> Option<StopReason> {
        if let Some(light) = self.light_blocks(vehicle) {
            return Some(StopReason::Light(light));
        }
        if let Some(pedestrian) = self.pedestrian_in_path(vehicle) {
            return Some(StopReason::Pedestrian(pedestrian));
        }
        self.vehicle_ahead(vehicle).map(StopReason::VehicleAhead)
    }

    fn light_blocks(&self, vehicle: &Vehicle) -> Option<LightState> {
        // Once inside, a vehicle is committed for the rest of its life.
        if vehicle.entered_intersection
            || vehicle.is_in_intersection()
            || IntersectionBounds::has_crossed(vehicle.position, vehicle.direction)
        {
            return None;
        }

        let light = self.signals.vehicle_light(vehicle.direction);
        if !light.stops_traffic() {
            return None;
        }
        IntersectionBounds::is_in_stop_zone(vehicle.position, vehicle.direction).then_some(light)
    }

    fn pedestrian_in_path(&self, vehicle: &Vehicle) -> Option<u32> {
        let probe = Rect::centered(
            vehicle.position,
            VEHICLE_PEDESTRIAN_PROBE,
            VEHICLE_PEDESTRIAN_PROBE,
        );
        self.pedestrians
            .iter()
            .filter(|p| p.is_crossing())
            .filter(|p| probe.intersects(&p.probe()))
            .filter(|p| p.axis.conflicts_with(vehicle.direction))
            .find(|p| vehicle.position.is_ahead(&p.position, &vehicle.direction))
            .map(|p| p.id)
    }

    fn vehicle_ahead(&self, vehicle: &Vehicle) -> Option<u32> {
        if !IntersectionBounds::is_on_lane(vehicle.position, vehicle.direction) {
            return None;
        }
        self.vehicles
            .iter()
            .filter(|other| other.id != vehicle.id && other.direction == vehicle.direction)
            .filter(|other| IntersectionBounds::is_on_lane(other.position, other.direction))
            .filter(|other| vehicle.position.is_ahead(&other.position, &vehicle.direction))
            .find(|other| vehicle.position.manhattan_distance(&other.position) < FOLLOWING_DISTANCE)
            .map(|other| other.id)
    }

    fn report_stop(&mut self, index: usize, reason: StopReason) {
        let vehicle = &self.vehicles[index];
        let (id, direction) = (vehicle.id, vehicle.direction);
        match reason {
            StopReason::Light(light) => {
                tracing::info!(id, %direction, %light, "Vehicle stopping at light");
                self.emit(SimEvent::VehicleStoppedAtLight {
                    id,
                    direction,
                    light,
                });
            }
            StopReason::Pedestrian(pedestrian) => {
                tracing::info!(id, %direction, pedestrian, "Vehicle stopping for pedestrian");
                self.emit(SimEvent::VehicleYielded {
                    id,
                    direction,
                    pedestrian,
                });
            }
            StopReason::VehicleAhead(ahead) => {
                tracing::trace!(id, ahead, "Vehicle queueing behind another");
            }
        }
    }
}
