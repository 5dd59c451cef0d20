pub mod events;
mod pedestrian_manager;
mod spawner;
mod vehicle_manager;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{LimitConfig, SimulationConfig};
use crate::direction::{CrossingAxis, Direction, RoadLayout};
use crate::intersection::{LightState, PedestrianLightState, PhaseOutcome, SignalController};
use crate::pedestrian::Pedestrian;
use crate::vehicle::Vehicle;

pub use events::SimEvent;

/// All mutable world state of the intersection.
pub struct Simulation {
    vehicles: Vec<Vehicle>,
    pedestrians: Vec<Pedestrian>,
    signals: SignalController,
    limits: LimitConfig,
    rng: StdRng,
    next_vehicle_id: u32,
    next_pedestrian_id: u32,
    events: Vec<SimEvent>,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Simulation {
            vehicles: Vec::new(),
            pedestrians: Vec::new(),
            signals: SignalController::new(
                config.layout,
                config.phases.green_ticks,
                config.phases.yellow_ticks,
            ),
            limits: config.limits.clone(),
            rng,
            next_vehicle_id: 1,
            next_pedestrian_id: 1,
            events: Vec::new(),
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn pedestrians(&self) -> &[Pedestrian] {
        &self.pedestrians
    }

    pub fn signals(&self) -> &SignalController {
        &self.signals
    }

    /// One simulation tick: vehicles first, then pedestrians.
    pub fn tick(&mut self) {
        self.update_vehicles();
        self.update_pedestrians();
    }

    /// One phase-timer tick.
    pub fn phase_tick(&mut self) {
        let occupied = self.is_occupied();
        match self.signals.advance(occupied) {
            PhaseOutcome::Advanced(phase) => {
                let walking = if self.signals.pedestrian_light(CrossingAxis::NorthSouth)
                    == PedestrianLightState::Green
                {
                    CrossingAxis::NorthSouth
                } else {
                    CrossingAxis::EastWest
                };
                tracing::info!(phase = %phase, "Light phase changed");
                self.emit(SimEvent::PhaseChanged { phase, walking });
            }
            PhaseOutcome::WaitingForClearance => {
                tracing::debug!("Yellow phase held, junction occupied");
                self.emit(SimEvent::WaitingForClearance);
            }
            PhaseOutcome::Held => {}
        }
    }

    /// Whether any vehicle is inside the junction or any pedestrian is crossing.
    pub fn is_occupied(&self) -> bool {
        self.vehicles.iter().any(Vehicle::is_in_intersection)
            || self.pedestrians.iter().any(Pedestrian::is_crossing)
    }

    /// Switches the road layout. Vehicles on the road are cleared.
    pub fn set_layout(&mut self, layout: RoadLayout) {
        self.vehicles.clear();
        self.signals.set_layout(layout);
        tracing::info!(%layout, "Road layout changed");
        self.emit(SimEvent::LayoutChanged(layout));
    }

    pub fn toggle_layout(&mut self) {
        let layout = self.signals.layout().toggled();
        self.set_layout(layout);
    }

    pub fn set_manual(&mut self, manual: bool) {
        self.signals.set_manual(manual);
        tracing::info!(manual, "Light control mode changed");
        self.emit(SimEvent::ManualModeChanged(manual));
    }

    pub fn is_manual(&self) -> bool {
        self.signals.is_manual()
    }

    pub fn cycle_manual_light(&mut self, direction: Direction) -> Option<LightState> {
        let light = self.signals.cycle_manual(direction)?;
        tracing::info!(%direction, %light, "Manual light change");
        self.emit(SimEvent::ManualLightChanged { direction, light });
        Some(light)
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    #[cfg(test)]
    pub(crate) fn push_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    #[cfg(test)]
    pub(crate) fn push_pedestrian(&mut self, pedestrian: Pedestrian) {
        self.pedestrians.push(pedestrian);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::intersection::Phase;

    #[test]
    fn phase_change_is_reported() {
        let mut sim = seeded();
        sim.phase_tick();
        assert!(sim.drain_events().is_empty());
        sim.phase_tick();
        assert_eq!(
            sim.drain_events(),
            vec![SimEvent::PhaseChanged {
                phase: Phase::NorthSouthYellow,
                walking: CrossingAxis::EastWest,
            }]
        );
    }

    #[test]
    fn occupied_junction_holds_yellow() {
        let mut sim = seeded();
        sim.phase_tick();
        sim.phase_tick();
        sim.push_vehicle(car_at(9, Direction::East, 300, 275));
        sim.drain_events();

        sim.phase_tick();
        assert_eq!(sim.signals().phase(), Phase::NorthSouthYellow);
        assert_eq!(sim.drain_events(), vec![SimEvent::WaitingForClearance]);
    }

    #[test]
    fn crossing_pedestrian_holds_yellow() {
        let mut sim = seeded();
        sim.phase_tick();
        sim.phase_tick();
        sim.push_pedestrian(crossing_pedestrian(1, CrossingAxis::EastWest, 240, 300));

        sim.phase_tick();
        assert_eq!(sim.signals().phase(), Phase::NorthSouthYellow);
    }

    #[test]
    fn layout_change_clears_vehicles() {
        let mut sim = seeded();
        sim.push_vehicle(car_at(1, Direction::South, 325, 100));
        sim.toggle_layout();
        assert!(sim.vehicles().is_empty());
        assert_eq!(sim.signals().layout(), RoadLayout::OneWay);
        assert_eq!(
            sim.drain_events(),
            vec![SimEvent::LayoutChanged(RoadLayout::OneWay)]
        );
    }

    #[test]
    fn manual_light_needs_manual_mode() {
        let mut sim = seeded();
        assert_eq!(sim.cycle_manual_light(Direction::North), None);
        sim.set_manual(true);
        assert_eq!(
            sim.cycle_manual_light(Direction::North),
            Some(LightState::Yellow)
        );
        assert!(sim.is_manual());
    }

    #[test]
    fn leaving_manual_mode_restores_automatic_lights() {
        let mut sim = seeded();
        sim.set_manual(true);
        assert_eq!(
            sim.cycle_manual_light(Direction::East),
            Some(LightState::Green)
        );
        sim.set_manual(false);
        sim.phase_tick();

        let signals = sim.signals();
        let north = signals.vehicle_light(Direction::North);
        let east = signals.vehicle_light(Direction::East);
        assert!(north == LightState::Red || east == LightState::Red);
        assert_eq!(north, signals.vehicle_light(Direction::South));
        assert_eq!(east, signals.vehicle_light(Direction::West));
    }
}
