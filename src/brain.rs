//! Direction sources: whatever decides where the snake goes next.

use super::Direction;
use crate::board::Board;
use crate::rng::RandomSource;

pub trait Brain {
    /// Chooses the next direction for the snake on `board`.
    fn next_move(&mut self, board: &Board, rng: &mut dyn RandomSource) -> Direction;
}

impl<B: Brain + ?Sized> Brain for &mut B {
    fn next_move(&mut self, board: &Board, rng: &mut dyn RandomSource) -> Direction {
        (**self).next_move(board, rng)
    }
}

impl<B: Brain + ?Sized> Brain for Box<B> {
    fn next_move(&mut self, board: &Board, rng: &mut dyn RandomSource) -> Direction {
        (**self).next_move(board, rng)
    }
}

/// A [`Brain`] backed by a closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnBrain<F>(F);

/// Wraps a closure as a [`Brain`].
pub fn from_fn<F>(f: F) -> FnBrain<F>
where
    F: FnMut(&Board, &mut dyn RandomSource) -> Direction,
{
    FnBrain(f)
}

impl<F> Brain for FnBrain<F>
where
    F: FnMut(&Board, &mut dyn RandomSource) -> Direction,
{
    fn next_move(&mut self, board: &Board, rng: &mut dyn RandomSource) -> Direction {
        (self.0)(board, rng)
    }
}

/// Rolls three numbers (keep going, turn left, turn right) and follows the
/// largest. Ties go to the earlier choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomBrain;

impl Brain for RandomBrain {
    fn next_move(&mut self, board: &Board, rng: &mut dyn RandomSource) -> Direction {
        let facing = board.snake_direction();
        let choices = [facing, facing.turn_left(), facing.turn_right()];

        let mut best = 0;
        let mut best_roll = rng.unit();
        for i in 1..choices.len() {
            let roll = rng.unit();
            if roll > best_roll {
                best = i;
                best_roll = roll;
            }
        }

        choices[best]
    }
}
