use std::time::Instant;

use crate::simulation::SimEvent;

pub struct Statistics {
    pub vehicles_spawned: u32,
    pub vehicles_exited: u32,
    pub light_stops: u32,
    pub pedestrian_yields: u32,
    pub pedestrians_spawned: u32,
    pub pedestrians_crossed: u32,
    pub phase_changes: u32,
    pub clearance_waits: u32,
    pub manual_changes: u32,
    pub max_concurrent_vehicles: usize,

    vehicles_by_direction: [u32; 4], // N, S, E, W
    simulation_start: Instant,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics {
            vehicles_spawned: 0,
            vehicles_exited: 0,
            light_stops: 0,
            pedestrian_yields: 0,
            pedestrians_spawned: 0,
            pedestrians_crossed: 0,
            phase_changes: 0,
            clearance_waits: 0,
            manual_changes: 0,
            max_concurrent_vehicles: 0,
            vehicles_by_direction: [0; 4],
            simulation_start: Instant::now(),
        }
    }

    pub fn record(&mut self, event: &SimEvent) {
        match event {
            SimEvent::VehicleSpawned { direction, .. } => {
                self.vehicles_spawned += 1;
                self.vehicles_by_direction[direction.index()] += 1;
            }
            SimEvent::VehicleExited { .. } => self.vehicles_exited += 1,
            SimEvent::VehicleStoppedAtLight { .. } => self.light_stops += 1,
            SimEvent::VehicleYielded { .. } => self.pedestrian_yields += 1,
            SimEvent::PedestrianSpawned { .. } => self.pedestrians_spawned += 1,
            SimEvent::PedestrianFinished { .. } => self.pedestrians_crossed += 1,
            SimEvent::PhaseChanged { .. } => self.phase_changes += 1,
            SimEvent::WaitingForClearance => self.clearance_waits += 1,
            SimEvent::ManualLightChanged { .. } => self.manual_changes += 1,
            SimEvent::PedestrianStartedCrossing { .. }
            | SimEvent::LayoutChanged(_)
            | SimEvent::ManualModeChanged(_) => {}
        }
    }

    pub fn observe_vehicle_count(&mut self, count: usize) {
        self.max_concurrent_vehicles = self.max_concurrent_vehicles.max(count);
    }

    pub fn vehicles_by_direction(&self) -> [u32; 4] {
        self.vehicles_by_direction
    }

    pub fn display(&self) {
        let elapsed_sec = self.simulation_start.elapsed().as_secs_f32();
        let [north, south, east, west] = self.vehicles_by_direction();

        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                      FINAL STATISTICS                        ║");
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ Simulation Duration: {:>8.1}s                               ║", elapsed_sec);
        println!("║ Vehicles Spawned: {:<10}                                 ║", self.vehicles_spawned);
        println!("║ Vehicles Exited: {:<11}                                 ║", self.vehicles_exited);
        let throughput = if elapsed_sec > 0.0 { self.vehicles_exited as f32 * 60.0 / elapsed_sec } else { 0.0 };
        println!("║ Throughput: {:>16.1} veh/min                        ║", throughput);
        println!("║ By Direction: N {:<4} S {:<4} E {:<4} W {:<4}                  ║", north, south, east, west);

        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ Stops at Lights: {:<11}                                 ║", self.light_stops);
        println!("║ Yields to Pedestrians: {:<5}                                 ║", self.pedestrian_yields);
        println!("║ Pedestrians Crossed: {:<7} of {:<7}                       ║", self.pedestrians_crossed, self.pedestrians_spawned);

        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ Phase Changes: {:<13}                                 ║", self.phase_changes);
        println!("║ Clearance Waits: {:<11}                                 ║", self.clearance_waits);
        println!("║ Manual Light Changes: {:<6}                                 ║", self.manual_changes);
        println!("║ Max Concurrent Vehicles: {:<3}                                 ║", self.max_concurrent_vehicles);

        println!("╚══════════════════════════════════════════════════════════════╝");
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
