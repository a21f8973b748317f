//! Rules for grid snake: a bounded board, a snake that moves one cell per
//! tick, food, and the deterministic rules for growth, scoring, and death.
//!
//! Every transition is a pure function from one snapshot to the next. The only
//! source of nondeterminism is the [`RandomSource`] that callers thread through
//! [`Board::new`] and [`Board::update`]; given the same seed and the same
//! directions a game replays exactly.

#![deny(unsafe_code)]

use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    const fn into_pair(self) -> (i32, i32) {
        use Direction::*;

        match self {
            North => (0, -1),
            South => (0, 1),
            East => (1, 0),
            West => (-1, 0),
        }
    }

    /// The unit vector for this direction. `y` grows downwards.
    pub const fn as_point(self) -> Point {
        let (x, y) = self.into_pair();
        Point { x, y }
    }

    /// The direction whose unit vector is exactly `p`, if any.
    pub fn from_point(p: Point) -> Option<Direction> {
        Direction::ALL.iter().copied().find(|d| d.as_point() == p)
    }

    pub const fn complement(self) -> Direction {
        use Direction::*;

        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }

    /// Quarter turn counter-clockwise, as seen on screen.
    pub const fn turn_left(self) -> Direction {
        use Direction::*;

        match self {
            North => West,
            West => South,
            South => East,
            East => North,
        }
    }

    /// Quarter turn clockwise, as seen on screen.
    pub const fn turn_right(self) -> Direction {
        self.turn_left().complement()
    }
}

impl Display for Direction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use Direction::*;

        write!(fmt, "{}", match self {
            North => "NORTH",
            South => "SOUTH",
            East => "EAST",
            West => "WEST",
        })
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub const fn add_xy(self, dx: i32, dy: i32) -> Self {
        Point { x: self.x + dx, y: self.y + dy }
    }

    /// Applies `f` to both coordinates.
    pub fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Point { x: f(self.x), y: f(self.y) }
    }

    /// Manhattan distance. Two cells are adjacent exactly when this is 1.
    pub fn square_distance(self, other: Point) -> i32 {
        let Point { x, y } = (self + -other).map(i32::abs);
        x + y
    }

    /// Euclidean distance.
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);

        (dx * dx + dy * dy).sqrt()
    }

    /// The direction of a single step from `self` to `to`, if `to` is one of
    /// the four neighbours.
    pub fn direction_to(self, to: Point) -> Option<Direction> {
        Direction::from_point(to + -self)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.add_xy(rhs.x, rhs.y)
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, rhs: Direction) -> Point {
        let (Δx, Δy) = rhs.into_pair();
        self.add_xy(Δx, Δy)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, c: i32) -> Point {
        Point { x: self.x * c, y: self.y * c }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self * -1
    }
}

impl Display for Point {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "p({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Alive,
    Dead,
    /// The snake filled every cell; there is nowhere left to put food.
    Won,
}

impl Status {
    pub fn is_live(self) -> bool {
        matches!(self, Status::Alive)
    }
}

pub mod board;
pub mod brain;
pub mod error;
pub mod rng;
pub mod simulation;
pub mod snake;

pub use board::{place_food, Board};
pub use brain::{Brain, RandomBrain};
pub use error::BoardError;
pub use rng::{Lcg48, RandomSource};
pub use simulation::Simulation;
pub use snake::Snake;

#[cfg(test)]
mod tests {
    use super::*;
    use super::Direction::*;

    #[test]
    fn unit_vectors() {
        assert_eq!(North.as_point(), Point::new(0, -1));
        assert_eq!(South.as_point(), Point::new(0, 1));
        assert_eq!(West.as_point(), Point::new(-1, 0));
        assert_eq!(East.as_point(), Point::new(1, 0));
    }

    #[test]
    fn direction_to_neighbours_only() {
        let p = Point::new(2, 3);

        assert_eq!(p.direction_to(Point::new(2, 2)), Some(North));
        assert_eq!(p.direction_to(Point::new(2, 4)), Some(South));
        assert_eq!(p.direction_to(Point::new(1, 3)), Some(West));
        assert_eq!(p.direction_to(Point::new(3, 3)), Some(East));
        assert_eq!(p.direction_to(Point::new(5, 3)), None);
        assert_eq!(p.direction_to(Point::new(3, 4)), None);
        assert_eq!(p.direction_to(p), None);
    }

    #[test]
    fn complement_and_turns() {
        for d in Direction::ALL.iter().copied() {
            assert_eq!(d.complement().complement(), d);
            assert_eq!(d.as_point() + d.complement().as_point(), Point::default());
            assert_eq!(d.turn_left().turn_right(), d);
            assert_eq!(d.turn_left().turn_left(), d.complement());
        }

        assert_eq!(East.turn_left(), North);
        assert_eq!(East.turn_right(), South);
        assert_eq!(North.turn_right(), East);
    }

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -3);

        assert_eq!(a.square_distance(b), 7);
        assert_eq!(b.square_distance(a), 7);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.map(|v| v * 10), Point::new(10, 10));
    }

    #[test]
    fn status_liveness() {
        assert!(Status::Alive.is_live());
        assert!(!Status::Dead.is_live());
        assert!(!Status::Won.is_live());
    }
}
