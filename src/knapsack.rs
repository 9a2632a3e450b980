//! Bounded knapsack: each item type may be taken up to a per-item maximum
//! number of times. Solved by iterating explicit unit counts per cell so
//! the bound is honored directly, with a decision table for reconstruction.

use log::debug;

use crate::error::{Error, Result};
use crate::table::Table;

/// One knapsack item type.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Display name used by report consumers.
    pub name: String,
    /// Value gained per unit taken.
    pub value: f64,
    /// Capacity consumed per unit taken.
    pub weight: f64,
    /// Maximum number of units of this item that may be taken.
    pub amount: usize,
}

impl Item {
    /// Creates an item.
    pub fn new(name: impl Into<String>, value: f64, weight: f64, amount: usize) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
            amount,
        }
    }
}

/// Bounded knapsack context.
///
/// `values[i][j]` is the best value achievable with capacity `i` using only
/// items `0..=j`; `decisions[i][j]` is the number of units of item `j` taken
/// in that optimum. Item order affects only column indexing, never the
/// optimal value.
///
/// # Examples
///
/// ```
/// use dynprog::knapsack::{BoundedKnapsack, Item};
///
/// let items = vec![Item::new("gold", 10.0, 2.0, 5)];
/// let mut ks = BoundedKnapsack::new(10, items).unwrap();
/// ks.run();
///
/// assert_eq!(ks.best_value(), 50.0); // 5 units fit exactly
/// assert_eq!(ks.selection(), vec![(0, 5)]);
/// ```
///
/// # Complexity
/// * Time: O(C · n · q_max) for capacity C, n items, per-item bound q_max
/// * Space: O(C · n)
#[derive(Debug, Clone)]
pub struct BoundedKnapsack {
    capacity: usize,
    /// Item types, in the order that fixes column indexing.
    pub items: Vec<Item>,
    /// Value table, (capacity + 1) rows by one column per item.
    pub values: Table<f64>,
    /// Units of each item taken at the optimum of each cell.
    pub decisions: Table<usize>,
}

impl BoundedKnapsack {
    /// Creates a context for the given capacity and item list.
    ///
    /// Returns `Error::InvalidInput` if `capacity < 1` or no items are given.
    pub fn new(capacity: usize, items: Vec<Item>) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::invalid_input("knapsack capacity must be at least 1"));
        }
        if items.is_empty() {
            return Err(Error::invalid_input("knapsack requires at least one item"));
        }

        let values = Table::new(capacity + 1, items.len(), 0.0)?;
        let decisions = Table::new(capacity + 1, items.len(), 0)?;

        Ok(Self {
            capacity,
            items,
            values,
            decisions,
        })
    }

    /// Knapsack capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fills the value and decision tables column by column.
    ///
    /// For each cell the maximum feasible unit count is bounded both by the
    /// item's own limit and by how many units fit in the row's capacity
    /// (weightless items are bounded by their limit alone). Candidates are
    /// compared with strict greater-than, so the smallest winning unit
    /// count is recorded.
    pub fn run(&mut self) {
        for i in 0..=self.capacity {
            for j in 0..self.items.len() {
                let item = &self.items[j];

                // Units that fit by weight alone, capped by the item bound.
                let q = if item.weight > 0.0 {
                    let fit = (i as f64 / item.weight).floor();
                    if fit >= item.amount as f64 {
                        item.amount
                    } else {
                        fit as usize
                    }
                } else {
                    item.amount
                };

                // Baseline: take none, inherit the column to the left.
                let mut taken = 0;
                let mut value = if j > 0 { self.values.get(i, j - 1) } else { 0.0 };

                for t in 1..=q {
                    let used = (t as f64 * item.weight).ceil() as usize;
                    let mut pay = t as f64 * item.value;
                    if j > 0 && used <= i {
                        pay += self.values.get(i - used, j - 1);
                    }
                    if pay > value {
                        value = pay;
                        taken = t;
                    }
                }

                self.values.set(i, j, value);
                self.decisions.set(i, j, taken);
            }
        }
        debug!(
            "knapsack: capacity {} over {} items, best value {}",
            self.capacity,
            self.items.len(),
            self.best_value()
        );
    }

    /// Optimal total value, read from the bottom-right cell.
    pub fn best_value(&self) -> f64 {
        self.values.get(self.capacity, self.items.len() - 1)
    }

    /// Recovers `(item index, units taken)` pairs from the decision table.
    ///
    /// Walks the columns right to left from the full-capacity row,
    /// subtracting the capacity each taken item occupies. Items with zero
    /// units are omitted; the result is in ascending item order.
    pub fn selection(&self) -> Vec<(usize, usize)> {
        let mut picks = Vec::new();
        let mut row = self.capacity;
        for j in (0..self.items.len()).rev() {
            let t = self.decisions.get(row, j);
            if t > 0 {
                picks.push((j, t));
                let used = (t as f64 * self.items[j].weight).ceil() as usize;
                row -= used.min(row);
            }
        }
        picks.reverse();
        picks
    }
}
