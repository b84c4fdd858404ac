use crate::border::Bounds;
use crate::geometry::{Direction, Point, Segment};

/// Whether the head segment was created by a turn and has not moved yet.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SnakeState {
    Steady,
    TurnPending,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TurnOutcome {
    /// A fresh zero-length head segment was inserted.
    Started,
    /// The pending head segment was re-aimed before it grew.
    Redirected,
    /// The pending turn was withdrawn; the snake keeps its previous heading.
    Cancelled,
    Rejected,
}

/// Movement tuning shared by every segment of the body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion {
    pub speed: f32,
    pub extend_bonus: f32,
    pub shrink_threshold: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            speed: 5.0,
            extend_bonus: 5.0,
            shrink_threshold: 5.0,
        }
    }
}

/// Snake body as a chain of segments, segments[0] is the head.
///
/// The chain is never empty: the last remaining segment is kept no
/// matter how short it gets.
#[derive(Clone, Debug)]
pub struct Snake {
    segments: Vec<Segment>,
    motion: Motion,
    state: SnakeState,
}

impl Snake {
    pub fn new(head: Point, tail: Point, direction: Direction, motion: Motion) -> Snake {
        Snake {
            segments: vec![Segment::new(head, tail, direction)],
            motion,
            state: SnakeState::Steady,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn state(&self) -> SnakeState {
        self.state
    }

    pub fn head_segment(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail_segment(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// Leading point, used for every collision and consumption check.
    pub fn head(&self) -> Point {
        self.segments[0].p0
    }

    pub fn direction(&self) -> Direction {
        self.segments[0].dir()
    }

    /// Total path length over all segments.
    pub fn length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Starts a turn at the current head point if `dir` is perpendicular to
    /// the heading. Repeated turns before the next step re-aim the pending
    /// segment instead of stacking zero-length ones.
    pub fn turn(&mut self, dir: Direction) -> TurnOutcome {
        let current = self.direction();
        if dir == current {
            return TurnOutcome::Rejected;
        }

        if self.state == SnakeState::TurnPending && self.segments.len() > 1 {
            let travelling = self.segments[1].dir();
            if dir == travelling {
                self.segments.remove(0);
                self.state = SnakeState::Steady;
                return TurnOutcome::Cancelled;
            }
            if dir == travelling.opposite() {
                return TurnOutcome::Rejected;
            }
            self.segments[0] = Segment::starting_at(self.head(), dir);
            return TurnOutcome::Redirected;
        }

        if !current.is_perpendicular(dir) {
            return TurnOutcome::Rejected;
        }
        self.segments.insert(0, Segment::starting_at(self.head(), dir));
        self.state = SnakeState::TurnPending;
        TurnOutcome::Started
    }

    /// Advances the head along its heading and the tail end along the last
    /// segment's own heading, both by `speed`. A tail segment shorter than
    /// the shrink threshold is dropped unless it is the only one left.
    pub fn step(&mut self) {
        let speed = self.motion.speed;

        let head = &mut self.segments[0];
        head.p0 = head.p0.advanced(head.dir(), speed);

        let last = self.segments.len() - 1;
        let tail = &mut self.segments[last];
        tail.p1 = tail.p1.advanced(tail.dir(), speed);

        if last > 0 && self.segments[last].length() < self.motion.shrink_threshold {
            self.segments.pop();
        }
        self.state = SnakeState::Steady;
    }

    /// Pushes the head forward by the extend bonus, once per apple eaten.
    pub fn extend(&mut self) {
        let bonus = self.motion.extend_bonus;
        let head = &mut self.segments[0];
        head.p0 = head.p0.advanced(head.dir(), bonus);
        self.state = SnakeState::Steady;
    }

    pub fn inside(&self, bounds: &Bounds) -> bool {
        bounds.contains(self.head())
    }

    /// Head segment against everything from index 2 onward; the head and
    /// its immediate neighbour always touch and are skipped.
    pub fn self_intersects(&self) -> bool {
        let head = self.head_segment();
        self.segments.iter().skip(2).any(|seg| head.intersects(seg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_snake() -> Snake {
        Snake::new(
            Point::new(100.0, 100.0),
            Point::new(60.0, 100.0),
            Direction::Right,
            Motion::default(),
        )
    }

    #[test]
    fn turn_accepts_only_perpendicular_headings() {
        let mut snake = starting_snake();
        assert_eq!(snake.turn(Direction::Left), TurnOutcome::Rejected);
        assert_eq!(snake.turn(Direction::Right), TurnOutcome::Rejected);
        assert_eq!(snake.segments().len(), 1);

        assert_eq!(snake.turn(Direction::Down), TurnOutcome::Started);
        assert_eq!(snake.segments().len(), 2);
        assert_eq!(snake.state(), SnakeState::TurnPending);
    }

    #[test]
    fn turn_inserts_zero_length_head_at_head_point() {
        let mut snake = starting_snake();
        snake.turn(Direction::Up);
        let head = snake.head_segment();
        assert_eq!(head.p0, Point::new(100.0, 100.0));
        assert_eq!(head.p1, Point::new(100.0, 100.0));
        assert_eq!(head.dir(), Direction::Up);
        assert_eq!(head.length(), 0.0);
    }

    #[test]
    fn step_moves_head_and_tail_by_speed() {
        let mut snake = starting_snake();
        snake.step();
        assert_eq!(snake.head(), Point::new(105.0, 100.0));
        assert_eq!(snake.tail_segment().p1, Point::new(65.0, 100.0));
        assert_eq!(snake.length(), 40.0);
    }

    #[test]
    fn step_after_turn_grows_new_head_and_retracts_old_tail() {
        let mut snake = starting_snake();
        snake.turn(Direction::Up);
        snake.step();
        assert_eq!(snake.head(), Point::new(100.0, 95.0));
        assert_eq!(snake.tail_segment().p1, Point::new(65.0, 100.0));
        assert_eq!(snake.tail_segment().dir(), Direction::Right);
        assert_eq!(snake.state(), SnakeState::Steady);
    }

    #[test]
    fn tail_segment_is_removed_once_consumed() {
        let mut snake = Snake::new(
            Point::new(100.0, 100.0),
            Point::new(90.0, 100.0),
            Direction::Right,
            Motion::default(),
        );
        snake.turn(Direction::Down);
        snake.step();
        assert_eq!(snake.segments().len(), 2);
        assert_eq!(snake.tail_segment().length(), 5.0);

        snake.step();
        assert_eq!(snake.segments().len(), 1);
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn last_segment_is_never_removed() {
        let mut snake = Snake::new(
            Point::new(100.0, 100.0),
            Point::new(98.0, 100.0),
            Direction::Right,
            Motion::default(),
        );
        assert!(snake.tail_segment().length() < 5.0);
        for _ in 0..3 {
            snake.step();
        }
        assert_eq!(snake.segments().len(), 1);
        assert_eq!(snake.head(), Point::new(115.0, 100.0));
        assert_eq!(snake.length(), 2.0);
    }

    #[test]
    fn extend_pushes_head_forward_without_touching_tail() {
        let mut snake = starting_snake();
        snake.extend();
        assert_eq!(snake.head(), Point::new(105.0, 100.0));
        assert_eq!(snake.tail_segment().p1, Point::new(60.0, 100.0));
        assert_eq!(snake.length(), 45.0);
    }

    #[test]
    fn second_turn_before_step_redirects_pending_segment() {
        let mut snake = starting_snake();
        assert_eq!(snake.turn(Direction::Up), TurnOutcome::Started);
        assert_eq!(snake.turn(Direction::Down), TurnOutcome::Redirected);
        assert_eq!(snake.segments().len(), 2);
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn pending_turn_cannot_be_used_to_reverse() {
        let mut snake = starting_snake();
        snake.turn(Direction::Up);
        assert_eq!(snake.turn(Direction::Left), TurnOutcome::Rejected);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.segments().len(), 2);
    }

    #[test]
    fn turning_back_cancels_pending_turn() {
        let mut snake = starting_snake();
        snake.turn(Direction::Up);
        assert_eq!(snake.turn(Direction::Right), TurnOutcome::Cancelled);
        assert_eq!(snake.segments().len(), 1);
        assert_eq!(snake.state(), SnakeState::Steady);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn inside_uses_head_point() {
        let bounds = Bounds::new(105, 480);
        let mut snake = starting_snake();
        assert!(snake.inside(&bounds));
        snake.step();
        assert!(snake.inside(&bounds));
        snake.step();
        assert!(!snake.inside(&bounds));
    }

    #[test]
    fn head_crossing_own_body_is_detected() {
        let mut snake = Snake::new(
            Point::new(100.0, 100.0),
            Point::new(40.0, 100.0),
            Direction::Right,
            Motion::default(),
        );
        snake.turn(Direction::Up);
        snake.step();
        snake.step();
        snake.turn(Direction::Left);
        snake.step();
        snake.step();
        snake.turn(Direction::Down);
        snake.step();
        assert_eq!(snake.head(), Point::new(90.0, 95.0));
        assert!(!snake.self_intersects());
        snake.step();
        assert_eq!(snake.head(), Point::new(90.0, 100.0));
        assert!(snake.self_intersects());
    }

    #[test]
    fn straight_snake_does_not_intersect_itself() {
        let mut snake = starting_snake();
        for _ in 0..10 {
            snake.step();
            assert!(!snake.self_intersects());
        }
    }
}
