//! The board: one snake, one piece of food, and the rules for a tick.

use super::{Direction, Point, Status};
use crate::brain::Brain;
use crate::error::BoardError;
use crate::rng::RandomSource;
use crate::snake::Snake;

use std::fmt::{self, Display};

use tracing::{debug, trace};

/// An immutable snapshot of a game.
///
/// Boards are derived from one another with [`Board::update`]; nothing mutates
/// a board in place. Once the status leaves [`Status::Alive`] no further update
/// changes anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: i32,
    width: i32,
    food: Point,
    snake: Snake,
    score: u32,
    moves: u32,
    status: Status,
}

impl Board {
    /// A fresh game: an east-facing snake of (at most) three cells centered on
    /// the board, and food on a random free cell.
    pub fn new<R>(height: i32, width: i32, rng: &mut R) -> Result<Self, BoardError>
    where
        R: RandomSource + ?Sized,
    {
        let center = Point::new(width / 2, height / 2);
        if center.x < 1 || center.y < 1 {
            return Err(BoardError::TooSmall { height, width });
        }

        let snake = Snake::straight(center, center.x.min(3) as usize, Direction::East);
        let food = place_food(height, width, &snake, rng)?;

        debug!(height, width, %food, "new board");

        Ok(Board { height, width, food, snake, score: 0, moves: 0, status: Status::Alive })
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Advances the game by one tick in `dir`.
    ///
    /// Moving onto the food is judged by the growth rules before anything
    /// else. Otherwise leaving the board or running into the tail ends the
    /// game. The move counter goes up on every tick of a live board, including
    /// the one that ends it.
    pub fn update<R>(&self, dir: Direction, rng: &mut R) -> Board
    where
        R: RandomSource + ?Sized,
    {
        if !self.is_live() {
            return self.clone();
        }

        let new_head = self.snake.head() + dir;
        trace!(moves = self.moves, %dir, %new_head, "tick");

        let mut next = if new_head == self.food {
            match self.snake.grow(dir) {
                Some(grown) => self.eat(grown, rng),
                None => self.kill("grew into itself"),
            }
        } else if !self.in_bounds(new_head) {
            self.kill("left the board")
        } else {
            match self.snake.step(dir) {
                Some(snake) => Board { snake, ..self.clone() },
                None => self.kill("ran into itself"),
            }
        };

        next.moves += 1;
        next
    }

    /// Applies [`Board::update`] for each direction in order, drawing from the
    /// same `rng` throughout.
    pub fn update_all<R>(&self, dirs: impl IntoIterator<Item = Direction>, rng: &mut R) -> Board
    where
        R: RandomSource + ?Sized,
    {
        dirs.into_iter()
            .fold(self.clone(), |board, dir| board.update(dir, rng))
    }

    /// Lets `brain` play until the game ends or `max_moves` more ticks have
    /// been applied.
    pub fn run<B>(&self, brain: &mut B, rng: &mut dyn RandomSource, max_moves: u32) -> Board
    where
        B: Brain + ?Sized,
    {
        let mut board = self.clone();

        for _ in 0..max_moves {
            if !board.is_live() {
                break;
            }

            let dir = brain.next_move(&board, rng);
            board = board.update(dir, rng);
        }

        board
    }

    fn kill(&self, cause: &'static str) -> Board {
        debug!(cause, score = self.score, moves = self.moves + 1, "snake died");

        Board { status: Status::Dead, ..self.clone() }
    }

    fn eat<R>(&self, grown: Snake, rng: &mut R) -> Board
    where
        R: RandomSource + ?Sized,
    {
        let head = grown.head();
        let score = self.score + 1;

        // Candidates are the cells that were free before this tick. The cell
        // the head just took is one of them and gets drawn again.
        let candidates = free_cells(self.height, self.width, &self.snake);
        if candidates.len() <= 1 {
            debug!(score, moves = self.moves + 1, "board filled");
            return Board { snake: grown, score, status: Status::Won, ..self.clone() };
        }

        let food = loop {
            let pick = candidates[rng.below(candidates.len())];
            if pick != head {
                break pick;
            }
        };

        debug!(score, %food, "ate food");

        Board { snake: grown, food, score, ..self.clone() }
    }
}

/// Every cell not covered by `snake`, x outer and y inner.
///
/// The order is part of the contract: it decides which cell a given random
/// draw lands on.
fn free_cells(height: i32, width: i32, snake: &Snake) -> Vec<Point> {
    (0..width)
        .flat_map(|x| (0..height).map(move |y| Point::new(x, y)))
        .filter(|p| !snake.contains(*p))
        .collect()
}

/// Picks a uniformly random cell on a `height` by `width` board that `snake`
/// does not cover.
pub fn place_food<R>(height: i32, width: i32, snake: &Snake, rng: &mut R) -> Result<Point, BoardError>
where
    R: RandomSource + ?Sized,
{
    let candidates = free_cells(height, width, snake);
    if candidates.is_empty() {
        return Err(BoardError::Full);
    }

    Ok(candidates[rng.below(candidates.len())])
}

impl Display for Board {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let status = match self.status {
            Status::Alive => "live",
            Status::Dead => "dead",
            Status::Won => "won",
        };
        writeln!(fmt, "Board(status: {})", status)?;

        write!(fmt, "┏")?;
        for _ in 0..self.width { write!(fmt, "━")? }
        writeln!(fmt, "┓")?;

        for y in 0..self.height {
            write!(fmt, "┃")?;
            for x in 0..self.width {
                let p = Point::new(x, y);
                let cell = if p == self.snake.head() {
                    'H'
                } else if self.snake.contains(p) {
                    'X'
                } else if p == self.food {
                    'O'
                } else {
                    '.'
                };
                write!(fmt, "{}", cell)?;
            }
            writeln!(fmt, "┃")?;
        }

        write!(fmt, "┗")?;
        for _ in 0..self.width { write!(fmt, "━")? }
        writeln!(fmt, "┛")?;

        write!(fmt, "Score: {}, Moves: {}", self.score, self.moves)
    }
}
