use rand::Rng;
use std::fmt;

use crate::direction::Direction;
use crate::geometry::{Position, Rect};
use crate::intersection::IntersectionBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Truck,
    Motorcycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Moving,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const PALETTE: [VehicleColor; 10] = [
    VehicleColor { r: 230, g: 57, b: 70 },
    VehicleColor { r: 41, g: 128, b: 185 },
    VehicleColor { r: 39, g: 174, b: 96 },
    VehicleColor { r: 155, g: 89, b: 182 },
    VehicleColor { r: 241, g: 196, b: 15 },
    VehicleColor { r: 230, g: 126, b: 34 },
    VehicleColor { r: 52, g: 73, b: 94 },
    VehicleColor { r: 46, g: 204, b: 113 },
    VehicleColor { r: 231, g: 76, b: 60 },
    VehicleColor { r: 52, g: 152, b: 219 },
];

impl VehicleColor {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        PALETTE[rng.gen_range(0..PALETTE.len())]
    }
}

impl VehicleKind {
    /// 60% cars, 20% trucks, 20% motorcycles.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..10) {
            0..=5 => VehicleKind::Car,
            6..=7 => VehicleKind::Truck,
            _ => VehicleKind::Motorcycle,
        }
    }

    /// (length along travel, width across travel)
    pub fn dimensions(&self) -> (i32, i32) {
        match self {
            VehicleKind::Car => (24, 14),
            VehicleKind::Truck => (28, 18),
            VehicleKind::Motorcycle => (18, 10),
        }
    }

    /// Pixels per simulation tick.
    pub fn speed(&self) -> i32 {
        match self {
            VehicleKind::Car => 2,
            VehicleKind::Truck => 1,
            VehicleKind::Motorcycle => 3,
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Car => f.write_str("car"),
            VehicleKind::Truck => f.write_str("truck"),
            VehicleKind::Motorcycle => f.write_str("motorcycle"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: u32,
    pub position: Position,
    pub direction: Direction,
    pub kind: VehicleKind,
    pub state: MotionState,
    pub color: VehicleColor,
    /// Latched the first time the footprint touches the junction. Never cleared.
    pub entered_intersection: bool,
}

impl Vehicle {
    pub fn new(id: u32, direction: Direction, kind: VehicleKind, color: VehicleColor) -> Self {
        Vehicle {
            id,
            position: IntersectionBounds::entry_point(direction),
            direction,
            kind,
            state: MotionState::Moving,
            color,
            entered_intersection: false,
        }
    }

    pub fn advance(&mut self) {
        self.position = self
            .position
            .move_in_direction(&self.direction, self.kind.speed());
    }

    /// Body rectangle, long side along the direction of travel.
    pub fn footprint(&self) -> Rect {
        let (length, width) = self.kind.dimensions();
        match self.direction {
            Direction::North | Direction::South => Rect::centered(self.position, width, length),
            Direction::East | Direction::West => Rect::centered(self.position, length, width),
        }
    }

    pub fn is_in_intersection(&self) -> bool {
        IntersectionBounds::overlaps_core(&self.footprint())
    }

    pub fn is_stopped(&self) -> bool {
        self.state == MotionState::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(direction: Direction) -> Vehicle {
        Vehicle::new(1, direction, VehicleKind::Car, PALETTE[0])
    }

    #[test]
    fn spawns_at_entry_point() {
        let vehicle = car(Direction::West);
        assert_eq!(vehicle.position, Position::new(580, 325));
        assert_eq!(vehicle.state, MotionState::Moving);
        assert!(!vehicle.entered_intersection);
    }

    #[test]
    fn advance_moves_by_kind_speed() {
        for (kind, speed) in [
            (VehicleKind::Car, 2),
            (VehicleKind::Truck, 1),
            (VehicleKind::Motorcycle, 3),
        ] {
            let mut vehicle = Vehicle::new(1, Direction::North, kind, PALETTE[1]);
            let before = vehicle.position.y;
            vehicle.advance();
            assert_eq!(before - vehicle.position.y, speed);
            assert_eq!(vehicle.position.x, 275);
        }
    }

    #[test]
    fn footprint_is_oriented_along_travel() {
        let mut vehicle = car(Direction::East);
        vehicle.position = Position::new(100, 275);
        assert_eq!(vehicle.footprint(), Rect::new(88, 268, 24, 14));

        let mut vehicle = car(Direction::South);
        vehicle.position = Position::new(325, 100);
        assert_eq!(vehicle.footprint(), Rect::new(318, 88, 14, 24));
    }

    #[test]
    fn detects_junction_overlap() {
        let mut vehicle = car(Direction::North);
        vehicle.position = Position::new(275, 363);
        assert!(!vehicle.is_in_intersection());
        vehicle.position = Position::new(275, 361);
        assert!(vehicle.is_in_intersection());
    }
}
