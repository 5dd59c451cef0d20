use crate::constants::PEDESTRIAN_SAFE_DISTANCE;
use crate::intersection::PedestrianLightState;
use crate::pedestrian::{Pedestrian, PedestrianState};
use crate::vehicle::MotionState;

use super::{SimEvent, Simulation};

impl Simulation {
    pub(super) fn update_pedestrians(&mut self) {
        for i in (0..self.pedestrians.len()).rev() {
            let pedestrian = &self.pedestrians[i];
            if pedestrian.state == PedestrianState::Waiting
                && self.may_cross(pedestrian)
                && self.is_safe_to_cross(pedestrian)
            {
                let pedestrian = &mut self.pedestrians[i];
                pedestrian.start_crossing();
                let (id, axis) = (pedestrian.id, pedestrian.axis);
                tracing::info!(id, %axis, "Pedestrian starts crossing");
                self.emit(SimEvent::PedestrianStartedCrossing { id, axis });
            }

            self.pedestrians[i].advance();

            if self.pedestrians[i].state == PedestrianState::Done {
                let pedestrian = self.pedestrians.remove(i);
                tracing::info!(id = pedestrian.id, "Pedestrian finished crossing");
                self.emit(SimEvent::PedestrianFinished { id: pedestrian.id });
            }
        }
    }

    fn may_cross(&self, pedestrian: &Pedestrian) -> bool {
        self.signals.pedestrian_light(pedestrian.axis) == PedestrianLightState::Green
    }

    /// No conflicting vehicle inside the junction, and no conflicting vehicle
    /// still moving within the safe distance.
    pub(crate) fn is_safe_to_cross(&self, pedestrian: &Pedestrian) -> bool {
        self.vehicles
            .iter()
            .filter(|vehicle| pedestrian.axis.conflicts_with(vehicle.direction))
            .all(|vehicle| {
                if vehicle.is_in_intersection() {
                    return false;
                }
                let distance = vehicle.position.manhattan_distance(&pedestrian.position);
                !(distance < PEDESTRIAN_SAFE_DISTANCE && vehicle.state == MotionState::Moving)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{CrossingAxis, Direction};
    use crate::geometry::Position;
    use crate::intersection::IntersectionBounds;
    use crate::simulation::test_support::*;

    fn waiting(id: u32, axis: CrossingAxis) -> Pedestrian {
        let [(start, end), _] = IntersectionBounds::crosswalks(axis);
        Pedestrian::new(id, axis, start, end)
    }

    #[test]
    fn waits_for_green_walk_signal() {
        let mut sim = seeded();
        // North-south traffic is green, so its crossing is red.
        sim.push_pedestrian(waiting(1, CrossingAxis::NorthSouth));
        sim.tick();
        assert_eq!(sim.pedestrians()[0].state, PedestrianState::Waiting);
        assert_eq!(sim.pedestrians()[0].position, Position::new(230, 240));
    }

    #[test]
    fn starts_crossing_on_green_and_moves() {
        let mut sim = seeded();
        sim.push_pedestrian(waiting(1, CrossingAxis::EastWest));
        sim.tick();
        let pedestrian = &sim.pedestrians()[0];
        assert_eq!(pedestrian.state, PedestrianState::Crossing);
        assert_eq!(pedestrian.position, Position::new(240, 231));
        assert_eq!(
            sim.drain_events(),
            vec![SimEvent::PedestrianStartedCrossing {
                id: 1,
                axis: CrossingAxis::EastWest,
            }]
        );
    }

    #[test]
    fn vehicle_in_junction_blocks_crossing() {
        let mut sim = seeded();
        sim.push_vehicle(car_at(5, Direction::East, 300, 275));
        let pedestrian = waiting(1, CrossingAxis::EastWest);
        assert!(!sim.is_safe_to_cross(&pedestrian));
    }

    #[test]
    fn nearby_moving_vehicle_blocks_but_stopped_one_does_not() {
        let mut sim = seeded();
        let pedestrian = waiting(1, CrossingAxis::EastWest);
        let mut vehicle = car_at(5, Direction::East, 200, 260);
        sim.push_vehicle(vehicle.clone());
        assert!(!sim.is_safe_to_cross(&pedestrian));

        let mut sim = seeded();
        vehicle.state = MotionState::Stopped;
        sim.push_vehicle(vehicle);
        assert!(sim.is_safe_to_cross(&pedestrian));
    }

    #[test]
    fn non_conflicting_vehicle_does_not_block() {
        let mut sim = seeded();
        sim.push_vehicle(car_at(5, Direction::North, 275, 300));
        let pedestrian = waiting(1, CrossingAxis::EastWest);
        assert!(sim.is_safe_to_cross(&pedestrian));
    }

    #[test]
    fn finished_pedestrian_is_removed() {
        let mut sim = seeded();
        sim.push_pedestrian(crossing_pedestrian(3, CrossingAxis::EastWest, 240, 365));
        sim.tick();
        assert!(sim.pedestrians().is_empty());
        assert_eq!(
            sim.drain_events(),
            vec![SimEvent::PedestrianFinished { id: 3 }]
        );
    }
}
