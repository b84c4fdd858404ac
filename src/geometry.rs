use serde::{Deserialize, Serialize};

/// Two axis-aligned headings are treated as perpendicular when |dot| stays under this.
pub const TURN_TOLERANCE: f32 = 1e-3;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point moved `by` units along `dir`.
    pub fn advanced(self, dir: Direction, by: f32) -> Point {
        let (dx, dy) = dir.delta();
        Point {
            x: self.x + dx * by,
            y: self.y + dy * by,
        }
    }
}

/// Heading of a segment. Screen coordinates: y grows downward.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector (dx, dy) for one unit of travel.
    pub fn delta(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    pub fn dot(&self, other: Direction) -> f32 {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        ax * bx + ay * by
    }

    pub fn is_perpendicular(&self, other: Direction) -> bool {
        self.dot(other).abs() <= TURN_TOLERANCE
    }
}

/// Directed piece of the snake's path.
///
/// `p0` is the head-ward end and `p1` the tail-ward end. The heading is
/// fixed at construction; only the endpoints move afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
    dir: Direction,
}

impl Segment {
    pub fn new(p0: Point, p1: Point, dir: Direction) -> Segment {
        Segment { p0, p1, dir }
    }

    /// Zero-length segment sitting on `at`, as created by a turn.
    pub fn starting_at(at: Point, dir: Direction) -> Segment {
        Segment::new(at, at, dir)
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn length(&self) -> f32 {
        self.p0.distance(self.p1)
    }

    /// Parameters (t, u) where `self` and `other`, taken as infinite lines
    /// P(t) = p0 + (p1 - p0) * t, meet. `None` when the lines are parallel
    /// or collinear (zero determinant).
    pub fn crossing_params(&self, other: &Segment) -> Option<(f32, f32)> {
        let (x1, y1) = (self.p0.x, self.p0.y);
        let (x2, y2) = (self.p1.x, self.p1.y);
        let (x3, y3) = (other.p0.x, other.p0.y);
        let (x4, y4) = (other.p1.x, other.p1.y);

        let den = (y4 - y3) * (x2 - x1) - (y2 - y1) * (x4 - x3);
        if den == 0.0 {
            return None;
        }
        let t = ((y4 - y3) * (x3 - x1) - (y3 - y1) * (x4 - x3)) / den;
        let u = ((y2 - y1) * (x3 - x1) - (y3 - y1) * (x2 - x1)) / den;
        Some((t, u))
    }

    /// True iff both finite segments share a point. Parallel and collinear
    /// pairs never intersect, even when they overlap.
    pub fn intersects(&self, other: &Segment) -> bool {
        match self.crossing_params(other) {
            Some((t, u)) => (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u),
            None => false,
        }
    }

    /// Shortest distance from `p` to any point of the segment.
    pub fn distance_to(&self, p: Point) -> f32 {
        let (vx, vy) = (self.p1.x - self.p0.x, self.p1.y - self.p0.y);
        let len2 = vx * vx + vy * vy;
        if len2 == 0.0 {
            return self.p0.distance(p);
        }
        let t = (((p.x - self.p0.x) * vx + (p.y - self.p0.y) * vy) / len2).clamp(0.0, 1.0);
        p.distance(Point::new(self.p0.x + vx * t, self.p0.y + vy * t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1), Direction::Right)
    }

    #[test]
    fn length_is_euclidean() {
        assert_eq!(seg(0.0, 0.0, 3.0, 4.0).length(), 5.0);
        assert_eq!(Segment::starting_at(Point::new(7.0, 7.0), Direction::Up).length(), 0.0);
    }

    #[test]
    fn crossing_segments_intersect_at_midpoints() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, -5.0, 5.0, 5.0);
        assert_eq!(a.crossing_params(&b), Some((0.5, 0.5)));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let c = seg(20.0, 0.0, 20.0, 5.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn touching_endpoints_count_as_intersection() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn parallel_and_collinear_segments_never_intersect() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        assert!(!a.intersects(&seg(0.0, 5.0, 10.0, 5.0)));
        assert!(!a.intersects(&seg(5.0, 0.0, 15.0, 0.0)));
        assert!(a.crossing_params(&seg(5.0, 0.0, 15.0, 0.0)).is_none());
    }

    #[test]
    fn zero_length_segment_never_intersects() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let dot = Segment::starting_at(Point::new(5.0, 0.0), Direction::Up);
        assert!(!a.intersects(&dot));
    }

    #[test]
    fn opposite_reverses_delta() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(dir.dot(dir.opposite()), -1.0);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn perpendicular_directions() {
        assert!(Direction::Right.is_perpendicular(Direction::Down));
        assert!(Direction::Up.is_perpendicular(Direction::Left));
        assert!(!Direction::Right.is_perpendicular(Direction::Left));
        assert!(!Direction::Right.is_perpendicular(Direction::Right));
    }

    #[test]
    fn advanced_moves_along_heading() {
        let p = Point::new(100.0, 100.0);
        assert_eq!(p.advanced(Direction::Up, 5.0), Point::new(100.0, 95.0));
        assert_eq!(p.advanced(Direction::Right, 5.0), Point::new(105.0, 100.0));
    }

    #[test]
    fn distance_to_clamps_to_endpoints() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(a.distance_to(Point::new(5.0, 3.0)), 3.0);
        assert_eq!(a.distance_to(Point::new(13.0, 4.0)), 5.0);
    }
}
