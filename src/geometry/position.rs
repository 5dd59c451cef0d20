use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn move_in_direction(&self, direction: &Direction, speed: i32) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx * speed,
            y: self.y + dy * speed,
        }
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Whether `other` lies strictly ahead of `self` when travelling in `direction`.
    pub fn is_ahead(&self, other: &Position, direction: &Direction) -> bool {
        match direction {
            Direction::North => other.y < self.y,
            Direction::South => other.y > self.y,
            Direction::East => other.x > self.x,
            Direction::West => other.x < self.x,
        }
    }

    pub fn is_out_of_bounds(&self, min: i32, max: i32) -> bool {
        self.x < min || self.x > max || self.y < min || self.y > max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_along_screen_axes() {
        let origin = Position::new(100, 100);
        assert_eq!(origin.move_in_direction(&Direction::North, 3), Position::new(100, 97));
        assert_eq!(origin.move_in_direction(&Direction::South, 3), Position::new(100, 103));
        assert_eq!(origin.move_in_direction(&Direction::East, 3), Position::new(103, 100));
        assert_eq!(origin.move_in_direction(&Direction::West, 3), Position::new(97, 100));
    }

    #[test]
    fn ahead_depends_on_direction() {
        let me = Position::new(275, 400);
        let other = Position::new(275, 380);
        assert!(me.is_ahead(&other, &Direction::North));
        assert!(!me.is_ahead(&other, &Direction::South));
        assert_eq!(me.manhattan_distance(&other), 20);
    }
}
