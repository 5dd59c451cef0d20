use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of travel. A `North` vehicle drives towards the top of the screen.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum Axis {
    NorthSouth,
    EastWest,
}

/// Which road a pedestrian walks across.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum CrossingAxis {
    /// Crosses the north-south road, walking horizontally.
    NorthSouth,
    /// Crosses the east-west road, walking vertically.
    EastWest,
}

/// Which directions carry traffic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadLayout {
    TwoWay,
    /// Only north-bound and west-bound traffic.
    OneWay,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn random<R: Rng>(rng: &mut R, layout: RoadLayout) -> Direction {
        let choices = layout.directions();
        choices[rng.gen_range(0..choices.len())]
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::NorthSouth,
            Direction::East | Direction::West => Axis::EastWest,
        }
    }

    /// Unit step in screen coordinates (y grows downwards).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::North => "↑",
            Direction::South => "↓",
            Direction::East => "→",
            Direction::West => "←",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::NorthSouth => f.write_str("North-South"),
            Axis::EastWest => f.write_str("East-West"),
        }
    }
}

impl CrossingAxis {
    pub fn random<R: Rng>(rng: &mut R) -> CrossingAxis {
        if rng.gen_bool(0.5) {
            CrossingAxis::NorthSouth
        } else {
            CrossingAxis::EastWest
        }
    }

    /// The vehicle axis whose traffic this crossing cuts through.
    pub fn conflicting_axis(&self) -> Axis {
        match self {
            CrossingAxis::NorthSouth => Axis::NorthSouth,
            CrossingAxis::EastWest => Axis::EastWest,
        }
    }

    pub fn conflicts_with(&self, direction: Direction) -> bool {
        direction.axis() == self.conflicting_axis()
    }
}

impl fmt::Display for CrossingAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossingAxis::NorthSouth => f.write_str("N-S"),
            CrossingAxis::EastWest => f.write_str("E-W"),
        }
    }
}

impl RoadLayout {
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            RoadLayout::TwoWay => &Direction::ALL,
            RoadLayout::OneWay => &[Direction::North, Direction::West],
        }
    }

    pub fn carries(&self, direction: Direction) -> bool {
        self.directions().contains(&direction)
    }

    pub fn toggled(&self) -> RoadLayout {
        match self {
            RoadLayout::TwoWay => RoadLayout::OneWay,
            RoadLayout::OneWay => RoadLayout::TwoWay,
        }
    }
}

impl fmt::Display for RoadLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadLayout::TwoWay => f.write_str("two-way"),
            RoadLayout::OneWay => f.write_str("one-way"),
        }
    }
}
