use crate::constants::{PEDESTRIAN_ARRIVAL_DISTANCE, PEDESTRIAN_PROBE};
use crate::direction::CrossingAxis;
use crate::geometry::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedestrianState {
    Waiting,
    Crossing,
    Done,
}

#[derive(Debug, Clone)]
pub struct Pedestrian {
    pub id: u32,
    pub position: Position,
    pub axis: CrossingAxis,
    pub state: PedestrianState,
    pub start: Position,
    pub end: Position,
}

impl Pedestrian {
    pub const SPEED: i32 = 1;

    pub fn new(id: u32, axis: CrossingAxis, start: Position, end: Position) -> Self {
        Pedestrian {
            id,
            position: start,
            axis,
            state: PedestrianState::Waiting,
            start,
            end,
        }
    }

    pub fn start_crossing(&mut self) {
        if self.state == PedestrianState::Waiting {
            self.state = PedestrianState::Crossing;
        }
    }

    pub fn advance(&mut self) {
        if self.state != PedestrianState::Crossing {
            return;
        }

        let dx = (self.end.x - self.position.x).signum();
        let dy = (self.end.y - self.position.y).signum();
        self.position = Position::new(
            self.position.x + dx * Self::SPEED,
            self.position.y + dy * Self::SPEED,
        );

        if self.position.manhattan_distance(&self.end) < PEDESTRIAN_ARRIVAL_DISTANCE {
            self.state = PedestrianState::Done;
            self.position = self.end;
        }
    }

    pub fn is_crossing(&self) -> bool {
        self.state == PedestrianState::Crossing
    }

    pub fn probe(&self) -> Rect {
        Rect::centered(self.position, PEDESTRIAN_PROBE, PEDESTRIAN_PROBE)
    }
}
