//! The snake: a head, a chain of tail cells, and the way it is facing.
//!
//! A [`Snake`] can only be obtained through a constructor that checks its
//! shape, and every movement returns a new value. Movements that would make the
//! snake overlap itself return `None`; to a board that means the game is lost.

use super::{Direction, Point};

use std::collections::{HashSet, VecDeque};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snake {
    head: Point,
    // Nearest to the head first.
    tail: VecDeque<Point>,
    direction: Direction,
}

impl Snake {
    /// A straight snake of `length` cells with its head at `head`, trailing
    /// away from `direction`. A `length` of zero is treated as one.
    pub fn straight(head: Point, length: usize, direction: Direction) -> Self {
        let behind = direction.complement().as_point();
        let tail = (1..length.max(1) as i32).map(|i| head + behind * i).collect();

        Snake { head, tail, direction }
    }

    /// Builds a snake from explicit cells, inferring the direction it faces
    /// from the first tail cell.
    ///
    /// Returns `None` if the cells overlap, are not a connected chain starting
    /// at `head`, or if `tail` is empty (a lone head faces nowhere in
    /// particular; use [`Snake::with_direction`] for that).
    pub fn from_cells(head: Point, tail: impl IntoIterator<Item = Point>) -> Option<Self> {
        let tail: VecDeque<Point> = tail.into_iter().collect();
        let direction = tail.front()?.direction_to(head)?;

        Self::validated(head, tail, direction)
    }

    /// Like [`Snake::from_cells`], but with the facing direction supplied. It
    /// must agree with the first tail cell when there is one.
    pub fn with_direction(
        head: Point,
        tail: impl IntoIterator<Item = Point>,
        direction: Direction,
    ) -> Option<Self> {
        Self::validated(head, tail.into_iter().collect(), direction)
    }

    fn validated(head: Point, tail: VecDeque<Point>, direction: Direction) -> Option<Self> {
        let snake = Snake { head, tail, direction };

        if snake.is_well_formed() {
            Some(snake)
        } else {
            None
        }
    }

    fn is_well_formed(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.len());
        if !self.cells().all(|p| seen.insert(p)) {
            return false;
        }

        let chained = self
            .cells()
            .zip(self.tail.iter().copied())
            .all(|(ahead, behind)| ahead.square_distance(behind) == 1);

        let facing = match self.tail.front() {
            Some(neck) => neck.direction_to(self.head) == Some(self.direction),
            None => true,
        };

        chained && facing
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn tail(&self) -> &VecDeque<Point> {
        &self.tail
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Every occupied cell, head first.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.tail.iter().copied())
    }

    pub fn contains(&self, p: Point) -> bool {
        self.head == p || self.tail.contains(&p)
    }

    /// Moves one cell in `dir`: every cell takes the place of the one ahead of
    /// it.
    ///
    /// The head may not enter any cell the tail occupies *before* the move,
    /// including the last one that is about to be vacated.
    pub fn step(&self, dir: Direction) -> Option<Snake> {
        let new_head = self.head + dir;

        if self.tail.contains(&new_head) {
            return None;
        }

        let mut tail = self.tail.clone();
        tail.push_front(self.head);
        tail.pop_back();

        Self::validated(new_head, tail, dir)
    }

    /// Applies `step` for each direction in turn, giving up at the first
    /// failure.
    pub fn step_all(&self, dirs: impl IntoIterator<Item = Direction>) -> Option<Snake> {
        dirs.into_iter()
            .try_fold(self.clone(), |snake, dir| snake.step(dir))
    }

    /// Moves one cell in `dir` and gets one cell longer.
    ///
    /// The last cell is doubled up before stepping, so the longer body is the
    /// one checked for collisions.
    pub fn grow(&self, dir: Direction) -> Option<Snake> {
        let last = self.tail.back().copied().unwrap_or(self.head);

        let mut tail = self.tail.clone();
        tail.push_back(last);

        Snake { head: self.head, tail, direction: dir }.step(dir)
    }
}

impl Display for Snake {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Snake(head: {}, tail: [", self.head)?;
        for (i, p) in self.tail.iter().enumerate() {
            if i > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{}", p)?;
        }
        write!(fmt, "])")
    }
}
