//! Equipment replacement planning: minimum total cost of buying, holding
//! and reselling equipment over a fixed horizon, with no holding interval
//! allowed to exceed the equipment's lifetime.

use log::debug;

use crate::error::{Error, Result};
use crate::table::{Table, INFINITY};

/// Equipment replacement context.
///
/// Phase 1 fills `costs`, where `costs[i][j]` is the cost of buying at
/// year `i` and selling at year `j + 1` (purchase cost plus accumulated
/// maintenance minus resale value). Phase 2 runs a backward recursion over
/// decision years: `minimum_cost[i]` is the cheapest way to cover years
/// `i..Y`, with `decision[i]` recording the sell year that achieved it
/// (the forward-reconstruction mirror of Floyd's predecessor table).
///
/// # Examples
///
/// ```
/// use dynprog::replacement::ReplacementPlan;
///
/// let mut plan = ReplacementPlan::new(
///     5,
///     3,
///     500.0,
///     vec![30.0, 40.0, 60.0],
///     vec![400.0, 300.0, 250.0],
/// )
/// .unwrap();
/// plan.run();
///
/// assert_eq!(plan.min_total_cost(), 640.0);
/// assert_eq!(plan.plan(), vec![0, 1, 2, 5]);
/// ```
///
/// # Complexity
/// * Time: O(Y·L) for the cost table, O(Y²) for the recursion
/// * Space: O(Y²)
#[derive(Debug, Clone)]
pub struct ReplacementPlan {
    years_plan: usize,
    lifetime: usize,
    /// Purchase cost of a new piece of equipment.
    pub equipment_cost: f64,
    /// Maintenance cost for each year of ownership, length `lifetime`.
    pub maintenance: Vec<f64>,
    /// Resale value after each year of ownership, length `lifetime`.
    pub resale: Vec<f64>,
    /// Buy-at/sell-at cost table C, years_plan squared.
    pub costs: Table<f64>,
    /// Cheapest completion cost per decision year, length years_plan + 1.
    pub minimum_cost: Vec<f64>,
    /// Optimal sell year per decision year, 0 = terminus.
    pub decision: Vec<usize>,
}

impl ReplacementPlan {
    /// Creates a context for a `years_plan`-year horizon and equipment
    /// usable for at most `lifetime` years.
    ///
    /// Returns `Error::InvalidInput` when either horizon or lifetime is
    /// zero, or when a cost schedule does not cover the whole lifetime.
    pub fn new(
        years_plan: usize,
        lifetime: usize,
        equipment_cost: f64,
        maintenance: Vec<f64>,
        resale: Vec<f64>,
    ) -> Result<Self> {
        if years_plan < 1 || lifetime < 1 {
            return Err(Error::invalid_input(
                "replacement plan requires a positive horizon and lifetime",
            ));
        }
        if maintenance.len() != lifetime || resale.len() != lifetime {
            return Err(Error::invalid_input(
                "maintenance and resale schedules must cover the lifetime",
            ));
        }

        let costs = Table::new(years_plan, years_plan, 0.0)?;
        let mut minimum_cost = vec![INFINITY; years_plan + 1];
        minimum_cost[years_plan] = 0.0; // nothing left to cover at the horizon
        let decision = vec![0; years_plan + 1];

        Ok(Self {
            years_plan,
            lifetime,
            equipment_cost,
            maintenance,
            resale,
            costs,
            minimum_cost,
            decision,
        })
    }

    /// Planning horizon in years.
    pub fn years_plan(&self) -> usize {
        self.years_plan
    }

    /// Maximum holding duration in years.
    pub fn lifetime(&self) -> usize {
        self.lifetime
    }

    /// Runs both phases: cost-table fill, then the backward recursion.
    ///
    /// A candidate covering years `i..j` is admissible only when the
    /// holding span `j − i` fits the lifetime; strict less-than keeps the
    /// earliest minimizing sell year.
    pub fn run(&mut self) {
        // Phase 1: cost of every feasible (buy year, sell year) pair.
        for j in 0..self.lifetime {
            let held: f64 = self.maintenance[..=j].iter().sum();
            let cost = self.equipment_cost - self.resale[j] + held;
            for i in 1..=self.years_plan.saturating_sub(j) {
                self.costs.set(i - 1, i + j - 1, cost);
            }
        }

        // Phase 2: backward over decision years.
        for i in (0..self.years_plan).rev() {
            for j in i + 1..=self.years_plan {
                if j - i > self.lifetime {
                    break;
                }
                let candidate = self.costs.get(i, j - 1) + self.minimum_cost[j];
                if candidate < self.minimum_cost[i] {
                    self.minimum_cost[i] = candidate;
                    self.decision[i] = j;
                }
            }
        }
        debug!(
            "replacement: {} year horizon, minimum cost {}",
            self.years_plan,
            self.min_total_cost()
        );
    }

    /// Minimum total cost to cover the whole horizon.
    pub fn min_total_cost(&self) -> f64 {
        self.minimum_cost[0]
    }

    /// The optimal sequence of purchase years, from 0 up to the horizon.
    ///
    /// Walks the decision array forward; each entry points strictly later,
    /// so the walk terminates at the horizon.
    pub fn plan(&self) -> Vec<usize> {
        let mut years = vec![0];
        let mut year = 0;
        while year < self.years_plan {
            let next = self.decision[year];
            if next == 0 {
                break; // run() not called yet
            }
            years.push(next);
            year = next;
        }
        years
    }
}
