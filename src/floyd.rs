//! All-pairs shortest paths via the Floyd–Warshall algorithm, with
//! predecessor bookkeeping for full path reconstruction.

use log::debug;

use crate::error::{Error, Result};
use crate::table::{Table, INFINITY};

/// Floyd–Warshall context: a distance table, a predecessor table and the
/// node names used by report consumers.
///
/// The distance table starts sentinel-filled with a forced zero diagonal;
/// callers populate direct edges with [`set_edge`](FloydWarshall::set_edge)
/// and then call [`run`](FloydWarshall::run). Afterwards `dist` holds the
/// shortest distance for every ordered pair (the sentinel where no path
/// exists) and `pred` holds, for each pair, the 1-based intermediate node
/// the optimal path goes through (0 = direct edge or no path).
///
/// # Examples
///
/// ```
/// use dynprog::floyd::FloydWarshall;
///
/// let mut fw = FloydWarshall::new(3).unwrap();
/// fw.set_edge(0, 1, 5.0);
/// fw.set_edge(1, 2, 3.0);
/// fw.set_edge(0, 2, 10.0);
/// fw.run();
///
/// assert_eq!(fw.distance(0, 2), 8.0); // 0 -> 1 -> 2 beats the direct edge
/// assert_eq!(fw.path(0, 2), Some(vec![0, 1, 2]));
/// ```
///
/// # Complexity
/// * Time: O(N³) where N is the number of nodes
/// * Space: O(N²)
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    nodes: usize,
    /// Shortest-distance table D. Mutated in place by `run`.
    pub dist: Table<f64>,
    /// Predecessor table P: 1-based "via" node, 0 for direct/none.
    pub pred: Table<usize>,
    /// Display names, one per node. Defaults to "1".."N".
    pub names: Vec<String>,
}

impl FloydWarshall {
    /// Creates a context for `nodes` nodes.
    ///
    /// Every off-diagonal distance starts at the sentinel ("no edge");
    /// every self-distance is fixed at zero.
    ///
    /// Returns `Error::InvalidInput` if `nodes < 2`.
    pub fn new(nodes: usize) -> Result<Self> {
        if nodes < 2 {
            return Err(Error::invalid_input(
                "Floyd-Warshall requires at least 2 nodes",
            ));
        }

        let mut dist = Table::new(nodes, nodes, INFINITY)?;
        for i in 0..nodes {
            dist.set(i, i, 0.0);
        }
        let pred = Table::new(nodes, nodes, 0)?;
        let names = (1..=nodes).map(|i| i.to_string()).collect();

        Ok(Self {
            nodes,
            dist,
            pred,
            names,
        })
    }

    /// Number of nodes.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Sets the direct edge weight from `from` to `to`.
    ///
    /// Self-edges are ignored: the diagonal is pinned to zero.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: f64) {
        if from == to {
            return;
        }
        self.dist.set(from, to, weight);
    }

    /// Runs the algorithm, mutating `dist` and `pred` in place.
    ///
    /// A candidate path through intermediate node `k` replaces the current
    /// distance only when strictly shorter, so among equal-cost paths the
    /// one found first (lowest `k`) is kept. Legs equal to the sentinel are
    /// skipped outright; two sentinels never sum into a spurious minimum.
    pub fn run(&mut self) {
        for k in 0..self.nodes {
            for i in 0..self.nodes {
                let ik = self.dist.get(i, k);
                if ik == INFINITY {
                    continue;
                }
                for j in 0..self.nodes {
                    let kj = self.dist.get(k, j);
                    if kj == INFINITY {
                        continue;
                    }
                    let candidate = ik + kj;
                    if candidate < self.dist.get(i, j) {
                        self.dist.set(i, j, candidate);
                        self.pred.set(i, j, k + 1);
                    }
                }
            }
        }
        debug!("floyd-warshall: completed over {} nodes", self.nodes);
    }

    /// Shortest distance from `from` to `to` (the sentinel if unreachable).
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.dist.get(from, to)
    }

    /// Whether any path from `from` to `to` exists.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.dist.get(from, to) != INFINITY
    }

    /// Reconstructs the full shortest path from `from` to `to`, endpoints
    /// included, or `None` if `to` is unreachable.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(from, to) {
            return None;
        }
        let mut nodes = vec![from];
        self.expand(from, to, &mut nodes);
        if from != to {
            nodes.push(to);
        }
        Some(nodes)
    }

    /// Appends the intermediate nodes of the optimal `i` -> `j` path.
    ///
    /// Each predecessor entry references strictly shorter subpaths, so the
    /// recursion always terminates at direct edges (entry 0).
    fn expand(&self, i: usize, j: usize, out: &mut Vec<usize>) {
        let via = self.pred.get(i, j);
        if via == 0 {
            return;
        }
        let via = via - 1;
        self.expand(i, via, out);
        out.push(via);
        self.expand(via, j, out);
    }
}
