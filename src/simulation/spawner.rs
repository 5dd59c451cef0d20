use rand::Rng;

use crate::constants::FOLLOWING_DISTANCE;
use crate::direction::{CrossingAxis, Direction};
use crate::intersection::IntersectionBounds;
use crate::pedestrian::Pedestrian;
use crate::vehicle::{Vehicle, VehicleColor, VehicleKind};

use super::{SimEvent, Simulation};

impl Simulation {
    /// Spawns a vehicle on a random lane of the current layout. Returns the new
    /// id, or `None` at the cap or when the entry point is still occupied.
    pub fn spawn_vehicle(&mut self) -> Option<u32> {
        if self.vehicles.len() >= self.limits.max_vehicles {
            return None;
        }

        let direction = Direction::random(&mut self.rng, self.signals.layout());
        if !self.is_entry_clear(direction) {
            tracing::debug!(%direction, "Entry point occupied, skipping spawn");
            return None;
        }

        let kind = VehicleKind::random(&mut self.rng);
        let color = VehicleColor::random(&mut self.rng);
        let id = self.next_vehicle_id;
        self.next_vehicle_id += 1;

        let vehicle = Vehicle::new(id, direction, kind, color);
        let position = vehicle.position;
        self.vehicles.push(vehicle);

        tracing::info!(id, %direction, %kind, "Vehicle spawned");
        self.emit(SimEvent::VehicleSpawned {
            id,
            direction,
            kind,
            position,
        });
        Some(id)
    }

    /// Spawns a pedestrian waiting at one of the four crosswalks.
    pub fn spawn_pedestrian(&mut self) -> Option<u32> {
        if self.pedestrians.len() >= self.limits.max_pedestrians {
            return None;
        }

        let axis = CrossingAxis::random(&mut self.rng);
        let crosswalks = IntersectionBounds::crosswalks(axis);
        let (start, end) = crosswalks[self.rng.gen_range(0..crosswalks.len())];
        let id = self.next_pedestrian_id;
        self.next_pedestrian_id += 1;

        self.pedestrians.push(Pedestrian::new(id, axis, start, end));

        tracing::info!(id, %axis, "Pedestrian spawned");
        self.emit(SimEvent::PedestrianSpawned { id, axis });
        Some(id)
    }

    fn is_entry_clear(&self, direction: Direction) -> bool {
        let entry = IntersectionBounds::entry_point(direction);
        !self.vehicles.iter().any(|vehicle| {
            vehicle.direction == direction
                && vehicle.position.manhattan_distance(&entry) < FOLLOWING_DISTANCE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::direction::RoadLayout;
    use crate::simulation::test_support::*;
    use crate::vehicle::MotionState;

    #[test]
    fn vehicle_count_never_exceeds_cap() {
        let mut sim = seeded();
        for _ in 0..500 {
            let before = sim.vehicles().len();
            let spawned = sim.spawn_vehicle();
            if before >= 8 {
                assert_eq!(spawned, None);
            }
            assert!(sim.vehicles().len() <= 8);
            for _ in 0..10 {
                sim.tick();
            }
        }
    }

    #[test]
    fn full_road_refuses_spawn() {
        let mut sim = seeded();
        for id in 0..8 {
            sim.push_vehicle(car_at(id, Direction::South, 325, id as i32 * 60 - 200));
        }
        assert_eq!(sim.spawn_vehicle(), None);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn spawned_ids_increase() {
        let mut sim = seeded();
        let first = sim.spawn_vehicle();
        assert_eq!(first, Some(1));
        for _ in 0..60 {
            sim.tick();
        }
        assert_eq!(sim.spawn_vehicle(), Some(2));
    }

    #[test]
    fn pedestrian_count_never_exceeds_cap() {
        let mut sim = seeded();
        for _ in 0..50 {
            sim.spawn_pedestrian();
            assert!(sim.pedestrians().len() <= 4);
        }
        assert_eq!(sim.spawn_pedestrian(), None);
    }

    #[test]
    fn configured_caps_are_honoured() {
        let mut config = SimulationConfig {
            seed: Some(5),
            ..SimulationConfig::default()
        };
        config.limits.max_vehicles = 2;
        config.limits.max_pedestrians = 1;
        let mut sim = Simulation::new(&config);
        for _ in 0..20 {
            sim.spawn_vehicle();
            sim.spawn_pedestrian();
        }
        assert_eq!(sim.vehicles().len(), 2);
        assert_eq!(sim.pedestrians().len(), 1);
    }

    #[test]
    fn spawned_vehicles_start_at_entry_points() {
        let mut sim = seeded();
        for _ in 0..50 {
            sim.spawn_vehicle();
        }
        for vehicle in sim.vehicles() {
            assert_eq!(
                vehicle.position,
                IntersectionBounds::entry_point(vehicle.direction)
            );
        }
    }

    #[test]
    fn occupied_entry_point_is_skipped() {
        let mut config = SimulationConfig {
            seed: Some(11),
            layout: RoadLayout::OneWay,
            ..SimulationConfig::default()
        };
        config.limits.max_vehicles = 8;
        let mut sim = Simulation::new(&config);
        for _ in 0..100 {
            sim.spawn_vehicle();
        }
        // One per entry point until something moves.
        assert_eq!(sim.vehicles().len(), 2);
    }

    #[test]
    fn one_way_layout_spawns_north_and_west_only() {
        let config = SimulationConfig {
            seed: Some(3),
            layout: RoadLayout::OneWay,
            ..SimulationConfig::default()
        };
        let mut sim = Simulation::new(&config);
        for _ in 0..300 {
            sim.spawn_vehicle();
            sim.tick();
            for vehicle in sim.vehicles() {
                assert!(matches!(vehicle.direction, Direction::North | Direction::West));
            }
        }
    }

    #[test]
    fn pedestrians_start_on_a_crosswalk() {
        let mut sim = seeded();
        for _ in 0..4 {
            sim.spawn_pedestrian();
        }
        for pedestrian in sim.pedestrians() {
            let crosswalks = IntersectionBounds::crosswalks(pedestrian.axis);
            assert!(crosswalks
                .iter()
                .any(|(start, end)| *start == pedestrian.position && *end == pedestrian.end));
        }
    }

    #[test]
    fn moving_vehicles_advance_monotonically() {
        let mut sim = seeded();
        for step in 0..3000 {
            if step % 20 == 0 {
                sim.spawn_vehicle();
            }
            if step % 40 == 0 {
                sim.spawn_pedestrian();
            }
            if step % 30 == 0 {
                sim.phase_tick();
            }

            let before: Vec<_> = sim
                .vehicles()
                .iter()
                .map(|v| (v.id, v.position, v.direction))
                .collect();
            sim.tick();
            for vehicle in sim.vehicles() {
                let Some((_, old, direction)) = before.iter().find(|(id, ..)| *id == vehicle.id)
                else {
                    continue;
                };
                match vehicle.state {
                    MotionState::Moving => {
                        assert!(old.is_ahead(&vehicle.position, direction));
                        assert_eq!(
                            old.manhattan_distance(&vehicle.position),
                            vehicle.kind.speed()
                        );
                    }
                    MotionState::Stopped => assert_eq!(*old, vehicle.position),
                }
            }
            assert!(sim.vehicles().len() <= 8);
            assert!(sim.pedestrians().len() <= 4);
        }
    }
}
