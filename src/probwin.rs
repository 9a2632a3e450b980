//! Probability that a side wins a best-of-N series, given separate home
//! and road per-game win probabilities and the series' home/road schedule.

use log::debug;

use crate::error::{Error, Result};
use crate::table::{Table, INFINITY};

/// Series win-probability context.
///
/// `w[i][j]` is the probability that side A still wins the series from the
/// state where A needs `i` more wins and side B needs `j` more. Row 0 is
/// seeded with 1 (A has clinched) and column 0 stays 0 (B has clinched);
/// the unused corner `w[0][0]` holds the sentinel.
///
/// The game decided at state `(i, j)` is game `2·games_to_win − i − j`
/// (zero-based): both sides start needing `games_to_win` wins, and every
/// game played so far lowered exactly one of the two counters, so
/// `(games_to_win − i) + (games_to_win − j)` games are already done.
/// That index selects the home or road probability from the schedule.
///
/// # Examples
///
/// ```
/// use dynprog::probwin::SeriesProbability;
///
/// // A fair best-of-3 is a coin flip no matter where it is played.
/// let mut series =
///     SeriesProbability::new(3, 0.5, 0.5, vec![true, false, true]).unwrap();
/// series.run();
/// assert!((series.prob_side_a() - 0.5).abs() < 1e-9);
/// ```
///
/// # Complexity
/// * Time: O(games_to_win²)
/// * Space: O(games_to_win²)
#[derive(Debug, Clone)]
pub struct SeriesProbability {
    games: usize,
    games_to_win: usize,
    /// Probability A wins a single home game.
    pub ph: f64,
    /// Probability A wins a single road game.
    pub pr: f64,
    /// Per-game schedule, true where A plays at home.
    pub schedule: Vec<bool>,
    /// Win-probability table W, (games_to_win + 1) squared.
    pub w: Table<f64>,
}

impl SeriesProbability {
    /// Creates a context for a best-of-`games` series.
    ///
    /// Returns `Error::InvalidInput` when `games` is even (no series winner
    /// would be guaranteed) or zero, or when the schedule length does not
    /// match the game count.
    pub fn new(games: usize, ph: f64, pr: f64, schedule: Vec<bool>) -> Result<Self> {
        if games == 0 || games % 2 == 0 {
            return Err(Error::invalid_input(
                "series game count must be odd and positive",
            ));
        }
        if schedule.len() != games {
            return Err(Error::invalid_input(
                "schedule must have one entry per game",
            ));
        }

        let games_to_win = (games + 1) / 2;
        let size = games_to_win + 1;
        let mut w = Table::new(size, size, 0.0)?;
        w.set(0, 0, INFINITY);
        for j in 1..=games_to_win {
            w.set(0, j, 1.0);
        }

        Ok(Self {
            games,
            games_to_win,
            ph,
            pr,
            schedule,
            w,
        })
    }

    /// Total games in the series.
    pub fn games(&self) -> usize {
        self.games
    }

    /// Wins required to take the series.
    pub fn games_to_win(&self) -> usize {
        self.games_to_win
    }

    /// Fills the table row by row.
    ///
    /// Each cell mixes the two already-filled neighbors: with probability
    /// `p` A wins the current game (one fewer win needed, row above), else
    /// B does (column to the left).
    pub fn run(&mut self) {
        for i in 1..=self.games_to_win {
            for j in 1..=self.games_to_win {
                let game = 2 * self.games_to_win - i - j;
                let p = if self.schedule[game] { self.ph } else { self.pr };
                let cell = p * self.w.get(i - 1, j) + (1.0 - p) * self.w.get(i, j - 1);
                self.w.set(i, j, cell);
            }
        }
        debug!(
            "probwin: best-of-{} series, P(A) = {}",
            self.games,
            self.prob_side_a()
        );
    }

    /// Probability that side A wins the series.
    pub fn prob_side_a(&self) -> f64 {
        self.w.get(self.games_to_win, self.games_to_win)
    }

    /// Probability that side B wins the series.
    pub fn prob_side_b(&self) -> f64 {
        1.0 - self.prob_side_a()
    }
}
