use std::fmt;

use crate::direction::{Axis, CrossingAxis, Direction, RoadLayout};

/// The state of a vehicle signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Red,
    Yellow,
    Green,
}

/// The state of a pedestrian signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedestrianLightState {
    Red,
    Green,
}

/// One quarter of the light cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NorthSouthGreen,
    NorthSouthYellow,
    EastWestGreen,
    EastWestYellow,
}

/// What a phase tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    Held,
    Advanced(Phase),
    /// Yellow has run its course but the junction is still occupied.
    WaitingForClearance,
}

impl LightState {
    /// Manual cycling order.
    pub fn cycled(self) -> LightState {
        match self {
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
            LightState::Red => LightState::Green,
        }
    }

    pub fn stops_traffic(self) -> bool {
        self != LightState::Green
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightState::Red => f.write_str("RED"),
            LightState::Yellow => f.write_str("YELLOW"),
            LightState::Green => f.write_str("GREEN"),
        }
    }
}

impl fmt::Display for PedestrianLightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PedestrianLightState::Red => f.write_str("RED"),
            PedestrianLightState::Green => f.write_str("GREEN"),
        }
    }
}

impl Phase {
    pub fn index(&self) -> usize {
        match self {
            Phase::NorthSouthGreen => 0,
            Phase::NorthSouthYellow => 1,
            Phase::EastWestGreen => 2,
            Phase::EastWestYellow => 3,
        }
    }

    pub fn next(&self) -> Phase {
        match self {
            Phase::NorthSouthGreen => Phase::NorthSouthYellow,
            Phase::NorthSouthYellow => Phase::EastWestGreen,
            Phase::EastWestGreen => Phase::EastWestYellow,
            Phase::EastWestYellow => Phase::NorthSouthGreen,
        }
    }

    /// The vehicle axis that is allowed to move (green or yellow).
    pub fn active_axis(&self) -> Axis {
        match self {
            Phase::NorthSouthGreen | Phase::NorthSouthYellow => Axis::NorthSouth,
            Phase::EastWestGreen | Phase::EastWestYellow => Axis::EastWest,
        }
    }

    pub fn is_yellow(&self) -> bool {
        matches!(self, Phase::NorthSouthYellow | Phase::EastWestYellow)
    }

    fn active_light(&self) -> LightState {
        if self.is_yellow() {
            LightState::Yellow
        } else {
            LightState::Green
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = if self.is_yellow() { "yellow" } else { "green" };
        write!(f, "{} {}", self.active_axis(), color)
    }
}

/// Drives the four vehicle signals and the two pedestrian signals.
pub struct SignalController {
    vehicle: [LightState; 4],
    pedestrian_north_south: PedestrianLightState,
    pedestrian_east_west: PedestrianLightState,
    phase: Phase,
    phase_ticks: u32,
    layout: RoadLayout,
    manual: bool,
    green_ticks: u32,
    yellow_ticks: u32,
}

impl SignalController {
    pub fn new(layout: RoadLayout, green_ticks: u32, yellow_ticks: u32) -> Self {
        let mut controller = SignalController {
            vehicle: [LightState::Red; 4],
            pedestrian_north_south: PedestrianLightState::Red,
            pedestrian_east_west: PedestrianLightState::Red,
            phase: Phase::NorthSouthGreen,
            phase_ticks: 0,
            layout,
            manual: false,
            green_ticks,
            yellow_ticks,
        };
        controller.apply_phase(Phase::NorthSouthGreen);
        controller
    }

    pub fn vehicle_light(&self, direction: Direction) -> LightState {
        self.vehicle[direction.index()]
    }

    pub fn pedestrian_light(&self, axis: CrossingAxis) -> PedestrianLightState {
        match axis {
            CrossingAxis::NorthSouth => self.pedestrian_north_south,
            CrossingAxis::EastWest => self.pedestrian_east_west,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_ticks(&self) -> u32 {
        self.phase_ticks
    }

    pub fn layout(&self) -> RoadLayout {
        self.layout
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    /// Switches layout and restarts the cycle at north-south green.
    pub fn set_layout(&mut self, layout: RoadLayout) {
        self.layout = layout;
        self.apply_phase(Phase::NorthSouthGreen);
    }

    /// Leaving manual mode restores the current phase's lights, dropping any
    /// hand-cycled signals.
    pub fn set_manual(&mut self, manual: bool) {
        let resuming = self.manual && !manual;
        self.manual = manual;
        if resuming {
            self.apply_phase(self.phase);
        }
    }

    /// Cycles one vehicle signal. Only honoured in manual mode.
    pub fn cycle_manual(&mut self, direction: Direction) -> Option<LightState> {
        if !self.manual {
            return None;
        }
        let light = &mut self.vehicle[direction.index()];
        *light = light.cycled();
        Some(*light)
    }

    /// One phase-timer tick. `occupied` reports whether any vehicle is inside
    /// the junction or any pedestrian is on a crosswalk.
    pub fn advance(&mut self, occupied: bool) -> PhaseOutcome {
        if self.manual {
            return PhaseOutcome::Held;
        }

        self.phase_ticks += 1;
        let hold = if self.phase.is_yellow() {
            self.yellow_ticks
        } else {
            self.green_ticks
        };
        if self.phase_ticks < hold {
            return PhaseOutcome::Held;
        }
        if self.phase.is_yellow() && occupied {
            return PhaseOutcome::WaitingForClearance;
        }

        let next = self.phase.next();
        self.apply_phase(next);
        PhaseOutcome::Advanced(next)
    }

    fn apply_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_ticks = 0;

        let active = phase.active_axis();
        for direction in Direction::ALL {
            self.vehicle[direction.index()] =
                if self.layout.carries(direction) && direction.axis() == active {
                    phase.active_light()
                } else {
                    LightState::Red
                };
        }

        // Pedestrians cross the road whose traffic is held at red.
        let (north_south, east_west) = match active {
            Axis::NorthSouth => (PedestrianLightState::Red, PedestrianLightState::Green),
            Axis::EastWest => (PedestrianLightState::Green, PedestrianLightState::Red),
        };
        self.pedestrian_north_south = north_south;
        self.pedestrian_east_west = east_west;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SignalController {
        SignalController::new(RoadLayout::TwoWay, 2, 1)
    }

    fn assert_axis_exclusive(signals: &SignalController) {
        let north = signals.vehicle_light(Direction::North);
        let south = signals.vehicle_light(Direction::South);
        let east = signals.vehicle_light(Direction::East);
        let west = signals.vehicle_light(Direction::West);
        assert_eq!(north, south);
        assert_eq!(east, west);
        assert!(north == LightState::Red || east == LightState::Red);
        assert_ne!(
            signals.pedestrian_light(CrossingAxis::NorthSouth),
            signals.pedestrian_light(CrossingAxis::EastWest)
        );
    }

    #[test]
    fn starts_with_north_south_green() {
        let signals = controller();
        assert_eq!(signals.phase(), Phase::NorthSouthGreen);
        assert_eq!(signals.vehicle_light(Direction::North), LightState::Green);
        assert_eq!(signals.vehicle_light(Direction::East), LightState::Red);
        assert_eq!(
            signals.pedestrian_light(CrossingAxis::EastWest),
            PedestrianLightState::Green
        );
        assert_eq!(
            signals.pedestrian_light(CrossingAxis::NorthSouth),
            PedestrianLightState::Red
        );
    }

    #[test]
    fn full_cycle_keeps_axes_exclusive() {
        let mut signals = controller();
        let mut seen = Vec::new();
        for _ in 0..24 {
            if let PhaseOutcome::Advanced(phase) = signals.advance(false) {
                seen.push(phase);
            }
            assert_axis_exclusive(&signals);
        }
        assert_eq!(
            &seen[..4],
            &[
                Phase::NorthSouthYellow,
                Phase::EastWestGreen,
                Phase::EastWestYellow,
                Phase::NorthSouthGreen
            ]
        );
    }

    #[test]
    fn green_holds_for_configured_ticks() {
        let mut signals = controller();
        assert_eq!(signals.advance(false), PhaseOutcome::Held);
        assert_eq!(
            signals.advance(false),
            PhaseOutcome::Advanced(Phase::NorthSouthYellow)
        );
        assert_eq!(signals.vehicle_light(Direction::South), LightState::Yellow);
    }

    #[test]
    fn green_to_yellow_ignores_occupancy() {
        let mut signals = controller();
        signals.advance(true);
        assert_eq!(
            signals.advance(true),
            PhaseOutcome::Advanced(Phase::NorthSouthYellow)
        );
    }

    #[test]
    fn yellow_waits_for_clearance() {
        let mut signals = controller();
        signals.advance(false);
        signals.advance(false);
        assert_eq!(signals.advance(true), PhaseOutcome::WaitingForClearance);
        assert_eq!(signals.advance(true), PhaseOutcome::WaitingForClearance);
        assert_eq!(signals.phase(), Phase::NorthSouthYellow);
        assert_eq!(
            signals.advance(false),
            PhaseOutcome::Advanced(Phase::EastWestGreen)
        );
        assert_eq!(signals.vehicle_light(Direction::East), LightState::Green);
        assert_eq!(
            signals.pedestrian_light(CrossingAxis::NorthSouth),
            PedestrianLightState::Green
        );
    }

    #[test]
    fn one_way_layout_keeps_unused_lights_red() {
        let mut signals = SignalController::new(RoadLayout::OneWay, 2, 1);
        for _ in 0..12 {
            signals.advance(false);
            assert_eq!(signals.vehicle_light(Direction::South), LightState::Red);
            assert_eq!(signals.vehicle_light(Direction::East), LightState::Red);
            assert!(
                signals.vehicle_light(Direction::North) == LightState::Red
                    || signals.vehicle_light(Direction::West) == LightState::Red
            );
        }
    }

    #[test]
    fn layout_change_resets_phase() {
        let mut signals = controller();
        signals.advance(false);
        signals.advance(false);
        signals.set_layout(RoadLayout::OneWay);
        assert_eq!(signals.phase(), Phase::NorthSouthGreen);
        assert_eq!(signals.phase_ticks(), 0);
        assert_eq!(signals.vehicle_light(Direction::North), LightState::Green);
        assert_eq!(signals.vehicle_light(Direction::South), LightState::Red);
    }

    #[test]
    fn manual_mode_freezes_cycle_and_allows_cycling() {
        let mut signals = controller();
        assert_eq!(signals.cycle_manual(Direction::East), None);

        signals.set_manual(true);
        for _ in 0..10 {
            assert_eq!(signals.advance(false), PhaseOutcome::Held);
        }
        assert_eq!(signals.phase(), Phase::NorthSouthGreen);
        assert_eq!(signals.cycle_manual(Direction::North), Some(LightState::Yellow));
        assert_eq!(signals.cycle_manual(Direction::North), Some(LightState::Red));
        assert_eq!(signals.cycle_manual(Direction::North), Some(LightState::Green));
        assert_eq!(signals.vehicle_light(Direction::South), LightState::Green);
    }

    #[test]
    fn leaving_manual_mode_restores_phase_lights() {
        let mut signals = controller();
        signals.set_manual(true);
        assert_eq!(signals.cycle_manual(Direction::East), Some(LightState::Green));
        signals.set_manual(false);

        assert_axis_exclusive(&signals);
        assert_eq!(signals.phase(), Phase::NorthSouthGreen);
        assert_eq!(signals.vehicle_light(Direction::North), LightState::Green);
        assert_eq!(signals.vehicle_light(Direction::East), LightState::Red);

        for _ in 0..12 {
            signals.advance(false);
            assert_axis_exclusive(&signals);
        }
    }
}
