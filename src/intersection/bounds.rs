use crate::constants::*;
use crate::direction::{CrossingAxis, Direction};
use crate::geometry::{Position, Rect};

/// Fixed geometry of the junction, in simulation pixels.
pub struct IntersectionBounds;

impl IntersectionBounds {
    pub const BOX: Rect = Rect::new(
        ROAD_NEAR_EDGE,
        ROAD_NEAR_EDGE,
        INTERSECTION_SIZE,
        INTERSECTION_SIZE,
    );

    pub fn lane_center(direction: Direction) -> i32 {
        match direction {
            Direction::North => LANE_NORTHBOUND_X,
            Direction::South => LANE_SOUTHBOUND_X,
            Direction::East => LANE_EASTBOUND_Y,
            Direction::West => LANE_WESTBOUND_Y,
        }
    }

    pub fn entry_point(direction: Direction) -> Position {
        match direction {
            Direction::North => Position::new(LANE_NORTHBOUND_X, ENTRY_FAR),
            Direction::South => Position::new(LANE_SOUTHBOUND_X, ENTRY_NEAR),
            Direction::East => Position::new(ENTRY_NEAR, LANE_EASTBOUND_Y),
            Direction::West => Position::new(ENTRY_FAR, LANE_WESTBOUND_Y),
        }
    }

    /// Rectangle just before the junction, centred on the lane.
    pub fn stop_zone(direction: Direction) -> Rect {
        let half = STOP_ZONE_WIDTH / 2;
        match direction {
            Direction::North => Rect::new(
                LANE_NORTHBOUND_X - half,
                ROAD_FAR_EDGE + CROSSED_MARGIN,
                STOP_ZONE_WIDTH,
                STOP_ZONE_DEPTH,
            ),
            Direction::South => Rect::new(
                LANE_SOUTHBOUND_X - half,
                ROAD_NEAR_EDGE - CROSSED_MARGIN - STOP_ZONE_DEPTH,
                STOP_ZONE_WIDTH,
                STOP_ZONE_DEPTH,
            ),
            Direction::East => Rect::new(
                ROAD_NEAR_EDGE - CROSSED_MARGIN - STOP_ZONE_DEPTH,
                LANE_EASTBOUND_Y - half,
                STOP_ZONE_DEPTH,
                STOP_ZONE_WIDTH,
            ),
            Direction::West => Rect::new(
                ROAD_FAR_EDGE + CROSSED_MARGIN,
                LANE_WESTBOUND_Y - half,
                STOP_ZONE_DEPTH,
                STOP_ZONE_WIDTH,
            ),
        }
    }

    pub fn overlaps_core(footprint: &Rect) -> bool {
        footprint.intersects(&Self::BOX)
    }

    /// True once the vehicle centre is more than the margin past the far edge.
    pub fn has_crossed(position: Position, direction: Direction) -> bool {
        let b = Self::BOX;
        match direction {
            Direction::North => position.y < b.top() - CROSSED_MARGIN,
            Direction::South => position.y > b.bottom() + CROSSED_MARGIN,
            Direction::East => position.x > b.right() + CROSSED_MARGIN,
            Direction::West => position.x < b.left() - CROSSED_MARGIN,
        }
    }

    /// Inside the approach window leading up to the stop zone.
    pub fn is_approaching(position: Position, direction: Direction) -> bool {
        let zone = Self::stop_zone(direction);
        match direction {
            Direction::North => {
                position.y > zone.bottom() && position.y < zone.bottom() + APPROACH_DISTANCE
            }
            Direction::South => position.y < zone.top() && position.y > zone.top() - APPROACH_DISTANCE,
            Direction::East => {
                position.x < zone.left() && position.x > zone.left() - APPROACH_DISTANCE
            }
            Direction::West => {
                position.x > zone.right() && position.x < zone.right() + APPROACH_DISTANCE
            }
        }
    }

    pub fn is_in_stop_zone(position: Position, direction: Direction) -> bool {
        let probe = Rect::centered(position, STOP_PROBE_SIZE, STOP_PROBE_SIZE);
        probe.intersects(&Self::stop_zone(direction)) || Self::is_approaching(position, direction)
    }

    pub fn is_on_lane(position: Position, direction: Direction) -> bool {
        let across = match direction.axis() {
            crate::direction::Axis::NorthSouth => position.x,
            crate::direction::Axis::EastWest => position.y,
        };
        (across - Self::lane_center(direction)).abs() < LANE_TOLERANCE
    }

    /// The two crosswalks of a crossing axis as (start, end) pairs.
    pub fn crosswalks(axis: CrossingAxis) -> [(Position, Position); 2] {
        let curb_before = ROAD_NEAR_EDGE - 20;
        let curb_after = ROAD_FAR_EDGE + 20;
        let near_walk = ROAD_NEAR_EDGE - 10;
        let far_walk = ROAD_FAR_EDGE + 10;
        match axis {
            CrossingAxis::NorthSouth => [
                (Position::new(curb_before, near_walk), Position::new(curb_after, near_walk)),
                (Position::new(curb_before, far_walk), Position::new(curb_after, far_walk)),
            ],
            CrossingAxis::EastWest => [
                (Position::new(near_walk, curb_before), Position::new(near_walk, curb_after)),
                (Position::new(far_walk, curb_before), Position::new(far_walk, curb_after)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_zones_sit_on_their_lanes() {
        for direction in Direction::ALL {
            let zone = IntersectionBounds::stop_zone(direction);
            assert!(!zone.intersects(&IntersectionBounds::BOX), "{direction} zone overlaps box");
            let lane = IntersectionBounds::lane_center(direction);
            let (low, high) = match direction.axis() {
                crate::direction::Axis::NorthSouth => (zone.left(), zone.right()),
                crate::direction::Axis::EastWest => (zone.top(), zone.bottom()),
            };
            assert!(low <= lane && lane <= high);
        }
    }

    #[test]
    fn north_zone_has_expected_rectangle() {
        assert_eq!(
            IntersectionBounds::stop_zone(Direction::North),
            Rect::new(268, 370, 15, 30)
        );
        assert_eq!(
            IntersectionBounds::stop_zone(Direction::East),
            Rect::new(200, 268, 30, 15)
        );
    }

    #[test]
    fn entry_points_lie_on_lanes() {
        for direction in Direction::ALL {
            let entry = IntersectionBounds::entry_point(direction);
            assert!(IntersectionBounds::is_on_lane(entry, direction));
            assert!(!IntersectionBounds::has_crossed(entry, direction));
        }
    }

    #[test]
    fn approach_window_precedes_zone() {
        assert!(IntersectionBounds::is_approaching(Position::new(275, 420), Direction::North));
        assert!(!IntersectionBounds::is_approaching(Position::new(275, 440), Direction::North));
        assert!(IntersectionBounds::is_approaching(Position::new(170, 275), Direction::East));
        assert!(!IntersectionBounds::is_approaching(Position::new(100, 275), Direction::East));
    }

    #[test]
    fn crosswalks_span_the_road() {
        let [(start, end), _] = IntersectionBounds::crosswalks(CrossingAxis::NorthSouth);
        assert_eq!(start, Position::new(230, 240));
        assert_eq!(end, Position::new(370, 240));
        let [_, (start, end)] = IntersectionBounds::crosswalks(CrossingAxis::EastWest);
        assert_eq!(start, Position::new(360, 230));
        assert_eq!(end, Position::new(360, 370));
    }
}
