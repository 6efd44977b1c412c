//! Optimal solver for sliding-tile boards.
//!
//! The solver runs two informed searches in lock-step: one from the initial
//! board and one from its twin. Exactly one of the two can reach the goal, so
//! whichever gets there first settles solvability without any parity
//! arithmetic. Each round expands one node from the main search, then one from
//! the twin search, which keeps the doomed search from running ahead and
//! holding far more memory than the successful one.
//!
//! Manhattan distance never overestimates the moves left and changes by at
//! most one per move, so the first goal extracted from the main frontier is
//! reached in the fewest possible moves.

use log::{debug, info};
use std::rc::Rc;

use crate::board::{Board, Move};
use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::search::{Search, SearchNode, Step};

/// Rounds between progress messages.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Which of the two searches reached the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The initial board reached the goal: it is solvable.
    SolvedMain,
    /// The twin reached the goal: the initial board is unsolvable.
    SolvedTwin,
}

/// Work done by one of the two searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: u64,
    pub generated: u64,
    pub peak_frontier: usize,
}

impl SearchStats {
    fn of(search: &Search<Board>) -> Self {
        Self {
            expanded: search.expanded(),
            generated: search.generated(),
            peak_frontier: search.frontier().peak_len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub rounds: u64,
    pub main: SearchStats,
    pub twin: SearchStats,
}

#[derive(Debug, Clone)]
pub struct Solver {
    outcome: Outcome,
    solution: Option<Vec<Board>>,
    stats: SolveStats,
}

impl Solver {
    /// Solves `initial` with no round budget.
    ///
    /// # Panics
    ///
    /// Panics if a frontier runs dry before either search reaches the goal.
    /// Every board has at least one neighbor besides the one it came from, so
    /// a board frontier never empties, and without a budget or cancel flag
    /// there is no other way for the solve to stop early.
    pub fn new(initial: &Board) -> Self {
        Self::with_config(initial, &SolverConfig::default())
            .unwrap_or_else(|err| unreachable!("an unbounded solve cannot fail: {err}"))
    }

    /// Solves `initial`, giving up when `config` says so.
    pub fn with_config(initial: &Board, config: &SolverConfig) -> Result<Self, SolveError> {
        debug!(
            "solving {n}x{n} board (manhattan {}, hamming {})",
            initial.manhattan(),
            initial.hamming(),
            n = initial.dimension()
        );

        // A 1x1 board is the blank alone, already solved, and has no twin.
        let Some(twin) = initial.twin() else {
            debug!("1x1 board is trivially solved");
            return Ok(Self {
                outcome: Outcome::SolvedMain,
                solution: Some(vec![initial.clone()]),
                stats: SolveStats::default(),
            });
        };

        let mut main = Search::new(initial.clone());
        let mut mirror = Search::new(twin);
        let mut rounds = 0u64;

        let (outcome, goal) = loop {
            config.check(rounds)?;
            rounds += 1;

            if let Some(goal) = advance(&mut main)? {
                break (Outcome::SolvedMain, goal);
            }
            if let Some(goal) = advance(&mut mirror)? {
                break (Outcome::SolvedTwin, goal);
            }

            if rounds % PROGRESS_INTERVAL == 0 {
                debug!(
                    "round {rounds}: main frontier {}, twin frontier {}",
                    main.frontier().len(),
                    mirror.frontier().len()
                );
            }
        };

        let stats = SolveStats {
            rounds,
            main: SearchStats::of(&main),
            twin: SearchStats::of(&mirror),
        };
        let solution = match outcome {
            Outcome::SolvedMain => Some(goal.path()),
            Outcome::SolvedTwin => None,
        };

        match &solution {
            Some(path) => info!(
                "solved in {} moves after {rounds} rounds ({} nodes expanded)",
                path.len() - 1,
                stats.main.expanded
            ),
            None => info!(
                "twin reached the goal after {rounds} rounds: board is unsolvable"
            ),
        }

        Ok(Self {
            outcome,
            solution,
            stats,
        })
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_solvable(&self) -> bool {
        self.outcome == Outcome::SolvedMain
    }

    /// Minimum number of moves to the goal, `None` when unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial board to the goal, both included.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// The slides that walk the solution, one per move.
    ///
    /// ```
    /// use slider_solver::{Board, Solver};
    ///
    /// let board: Board = "2\n1 2\n0 3".parse().unwrap();
    /// let slides = Solver::new(&board).slides().unwrap();
    /// assert_eq!(slides.len(), 1);
    /// assert_eq!(slides[0].to_string(), "left");
    /// ```
    pub fn slides(&self) -> Option<Vec<Move>> {
        let path = self.solution.as_ref()?;
        path.windows(2)
            .map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
}

fn advance(search: &mut Search<Board>) -> Result<Option<Rc<SearchNode<Board>>>, SolveError> {
    match search.step() {
        Step::Expanded => Ok(None),
        Step::Goal(node) => Ok(Some(node)),
        Step::Exhausted => Err(SolveError::FrontierExhausted),
    }
}
