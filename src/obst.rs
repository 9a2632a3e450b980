//! Optimal binary search tree construction: minimum expected search cost
//! for ordered keys with known access probabilities, filled diagonal by
//! diagonal with a root table for tree reconstruction.

use log::debug;

use crate::error::{Error, Result};
use crate::table::{Table, INFINITY};

/// A node of the reconstructed optimal tree. Keys are zero-based indices
/// into the probability list the context was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BstNode {
    pub key: usize,
    pub left: Option<Box<BstNode>>,
    pub right: Option<Box<BstNode>>,
}

/// Optimal BST context.
///
/// `a[i][j]` holds the minimum expected cost of an optimal subtree over
/// keys `i+1..=j` (1-based key numbering, so `a[0][K]` spans all keys and
/// the diagonal is the empty subtree at cost zero). `r[i][j]` holds the
/// 1-based key chosen as root for that range, 0 where the range is empty.
///
/// Probabilities are taken as given: callers are responsible for making
/// them sum to 1 if they want true expected costs.
///
/// # Examples
///
/// ```
/// use dynprog::obst::OptimalBst;
///
/// let mut bst = OptimalBst::new(vec![0.4, 0.6]).unwrap();
/// bst.run();
///
/// // Root the more likely key: 0.6 at depth 1, 0.4 at depth 2.
/// assert!((bst.min_cost() - 1.4).abs() < 1e-9);
/// assert_eq!(bst.r.get(0, 2), 2);
/// ```
///
/// # Complexity
/// * Time: O(K³) plus the range-probability sums
/// * Space: O(K²)
#[derive(Debug, Clone)]
pub struct OptimalBst {
    keys: usize,
    /// Access probability per key, in key order.
    pub probabilities: Vec<f64>,
    /// Subtree cost table A, (K+1) x (K+1), zero diagonal.
    pub a: Table<f64>,
    /// Chosen-root table R, same shape.
    pub r: Table<usize>,
    /// Display names, one per key. Defaults to "k1".."kK".
    pub names: Vec<String>,
}

impl OptimalBst {
    /// Creates a context for the given access probabilities.
    ///
    /// Returns `Error::InvalidInput` for an empty probability list.
    pub fn new(probabilities: Vec<f64>) -> Result<Self> {
        if probabilities.is_empty() {
            return Err(Error::invalid_input("optimal BST requires at least 1 key"));
        }

        let keys = probabilities.len();
        let size = keys + 1;
        let mut a = Table::new(size, size, INFINITY)?;
        for i in 0..size {
            a.set(i, i, 0.0);
        }
        let r = Table::new(size, size, 0)?;
        let names = (1..=keys).map(|i| format!("k{i}")).collect();

        Ok(Self {
            keys,
            probabilities,
            a,
            r,
            names,
        })
    }

    /// Number of keys.
    pub fn keys(&self) -> usize {
        self.keys
    }

    /// Fills the cost and root tables by increasing range length.
    ///
    /// Single-key subtrees are seeded first, then every longer range
    /// considers each key in it as root; strict less-than keeps the first
    /// (lowest) minimizing root.
    pub fn run(&mut self) {
        for i in 0..self.keys {
            self.a.set(i, i + 1, self.probabilities[i]);
            self.r.set(i, i + 1, i + 1);
        }

        for j in 1..self.keys {
            for i in 1..=self.keys - j {
                // Total access probability of the range i..=i+j (1-based),
                // paid once per level the range sinks below the root.
                let p: f64 = self.probabilities[i - 1..i + j].iter().sum();

                for k in i..=i + j {
                    let t = self.a.get(i - 1, k - 1) + self.a.get(k, i + j) + p;
                    if t < self.a.get(i - 1, i + j) {
                        self.a.set(i - 1, i + j, t);
                        self.r.set(i - 1, i + j, k);
                    }
                }
            }
        }
        debug!(
            "obst: {} keys, minimum expected cost {}",
            self.keys,
            self.min_cost()
        );
    }

    /// Minimum expected search cost over all keys.
    pub fn min_cost(&self) -> f64 {
        self.a.get(0, self.keys)
    }

    /// Reconstructs the optimal tree shape from the root table.
    pub fn tree(&self) -> Option<BstNode> {
        self.subtree(0, self.keys)
    }

    /// Optimal subtree over the key range `(i, j]` in table coordinates.
    ///
    /// Root entries always split into strictly smaller ranges, so the
    /// recursion bottoms out at empty ranges (entry 0).
    fn subtree(&self, i: usize, j: usize) -> Option<BstNode> {
        let root = self.r.get(i, j);
        if root == 0 {
            return None;
        }
        Some(BstNode {
            key: root - 1,
            left: self.subtree(i, root - 1).map(Box::new),
            right: self.subtree(root, j).map(Box::new),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_empty_keys() {
        assert!(matches!(OptimalBst::new(vec![]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_single_key() {
        let mut bst = OptimalBst::new(vec![1.0]).unwrap();
        bst.run();
        assert_relative_eq!(bst.min_cost(), 1.0);
        assert_eq!(bst.r.get(0, 1), 1);
        let tree = bst.tree().unwrap();
        assert_eq!(tree.key, 0);
        assert!(tree.left.is_none() && tree.right.is_none());
    }

    #[test]
    fn test_two_keys_roots_the_likelier_one() {
        let mut bst = OptimalBst::new(vec![0.4, 0.6]).unwrap();
        bst.run();
        // Root key 2: 0.6 at depth 1 plus 0.4 at depth 2.
        assert_relative_eq!(bst.min_cost(), 1.4, epsilon = 1e-9);
        assert_eq!(bst.r.get(0, 2), 2);

        let tree = bst.tree().unwrap();
        assert_eq!(tree.key, 1);
        assert_eq!(tree.left.as_ref().unwrap().key, 0);
        assert!(tree.right.is_none());
    }

    #[test]
    fn test_zero_diagonal_after_run() {
        let mut bst = OptimalBst::new(vec![0.18, 0.32, 0.39, 0.11]).unwrap();
        bst.run();
        for i in 0..=4 {
            assert_eq!(bst.a.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_four_key_fixture() {
        // Fixture from the desktop tool's self-test.
        let p = vec![0.18, 0.32, 0.39, 0.11];
        let mut bst = OptimalBst::new(p.clone()).unwrap();
        bst.run();

        // Reference: evaluate the recurrence independently, top down.
        fn cost(p: &[f64], i: usize, j: usize) -> f64 {
            if i == j {
                return 0.0;
            }
            let range: f64 = p[i..j].iter().sum();
            (i + 1..=j)
                .map(|k| cost(p, i, k - 1) + cost(p, k, j) + range)
                .fold(f64::MAX, f64::min)
        }
        assert_relative_eq!(bst.min_cost(), cost(&p, 0, 4), epsilon = 1e-9);

        // The chosen root must actually achieve the optimum.
        let k = bst.r.get(0, 4);
        let total: f64 = p.iter().sum();
        assert_relative_eq!(
            bst.min_cost(),
            bst.a.get(0, k - 1) + bst.a.get(k, 4) + total,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_range_cost_monotone_in_length() {
        let mut bst = OptimalBst::new(vec![0.18, 0.32, 0.39, 0.11]).unwrap();
        bst.run();
        // Extending a range can only add cost.
        for i in 0..4 {
            for j in i + 1..4 {
                assert!(bst.a.get(i, j) <= bst.a.get(i, j + 1) + 1e-12);
            }
        }
    }

    #[test]
    fn test_uniform_probabilities_balance_the_tree() {
        let mut bst = OptimalBst::new(vec![0.25; 4]).unwrap();
        bst.run();
        let tree = bst.tree().unwrap();
        // Strict less-than keeps the first minimizing root; for four
        // uniform keys that is key 2 of 4 (index 1).
        assert_eq!(tree.key, 1);
    }

    #[test]
    fn test_determinism() {
        let p = vec![0.18, 0.32, 0.39, 0.11];
        let mut a = OptimalBst::new(p.clone()).unwrap();
        let mut b = OptimalBst::new(p).unwrap();
        a.run();
        b.run();
        assert_eq!(a.a, b.a);
        assert_eq!(a.r, b.r);
    }
}
