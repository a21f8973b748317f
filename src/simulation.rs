//! Many independent games advanced side by side.
//!
//! Each lane owns its board, its brain, and its own random stream, so lanes
//! never observe one another and can be stepped in parallel without changing
//! any result.

use crate::board::Board;
use crate::brain::{Brain, RandomBrain};
use crate::error::BoardError;
use crate::rng::Lcg48;

use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct Lane<B> {
    board: Board,
    brain: B,
    rng: Lcg48,
}

impl<B: Brain> Lane<B> {
    fn tick(&mut self) {
        if !self.board.is_live() {
            return;
        }

        let dir = self.brain.next_move(&self.board, &mut self.rng);
        self.board = self.board.update(dir, &mut self.rng);
    }
}

#[derive(Debug, Clone)]
pub struct Simulation<B = RandomBrain> {
    lanes: Vec<Lane<B>>,
    ticks: u32,
}

impl Simulation<RandomBrain> {
    /// `count` games of random play. Lane `i` draws from a stream seeded with
    /// `seed + i`.
    pub fn new(height: i32, width: i32, count: usize, seed: i64) -> Result<Self, BoardError> {
        Self::with_brains(height, width, count, seed, |_| RandomBrain)
    }
}

impl<B: Brain + Send> Simulation<B> {
    /// Like [`Simulation::new`], with `make_brain(i)` steering lane `i`.
    pub fn with_brains(
        height: i32,
        width: i32,
        count: usize,
        seed: i64,
        mut make_brain: impl FnMut(usize) -> B,
    ) -> Result<Self, BoardError> {
        let lanes = (0..count)
            .map(|i| {
                let mut rng = Lcg48::new(seed.wrapping_add(i as i64));
                let board = Board::new(height, width, &mut rng)?;

                Ok(Lane { board, brain: make_brain(i), rng })
            })
            .collect::<Result<Vec<_>, BoardError>>()?;

        debug!(height, width, count, seed, "simulation ready");

        Ok(Simulation { lanes, ticks: 0 })
    }

    /// Advances every live lane by one move.
    pub fn tick(&mut self) {
        self.lanes.par_iter_mut().for_each(Lane::tick);
        self.ticks += 1;
    }

    /// Ticks until every game is over or `max_ticks` ticks have run. Returns
    /// the number of ticks taken.
    pub fn run(&mut self, max_ticks: u32) -> u32 {
        let mut taken = 0;

        while taken < max_ticks && self.is_live() {
            self.tick();
            taken += 1;
        }

        info!(
            ticks = self.ticks,
            live = self.live_count(),
            best = self.best().map(Board::score).unwrap_or(0),
            "simulation stopped"
        );

        taken
    }

    pub fn is_live(&self) -> bool {
        self.lanes.iter().any(|lane| lane.board.is_live())
    }

    pub fn live_count(&self) -> usize {
        self.lanes.iter().filter(|lane| lane.board.is_live()).count()
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.lanes.iter().map(|lane| &lane.board)
    }

    /// The highest scoring board; fewer moves wins a tie, then the earlier
    /// lane.
    pub fn best(&self) -> Option<&Board> {
        self.boards()
            .enumerate()
            .min_by_key(|(i, board)| (std::cmp::Reverse(board.score()), board.moves(), *i))
            .map(|(_, board)| board)
    }
}
