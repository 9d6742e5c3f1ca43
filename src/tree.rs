//! # Random Weighted Tree
//!
//! Rejection sampling over random vertex pairs: a draw is kept only if it
//! joins two different components, so exactly `n - 1` draws are kept and
//! the result is a spanning tree.

use crate::apsp::DistanceMatrix;
use crate::dsu::Dsu;
use crate::error::SamplingError;
use crate::rng::Xorshift;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeParams {
    /// Number of vertices.
    pub n: usize,
    /// Edge weights are drawn from `1..=max_weight`.
    pub max_weight: u64,
    /// Upper bound on sampled `(u, v, w)` triples, kept or not.
    pub max_attempts: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            n: 10,
            max_weight: 10,
            max_attempts: 1_000_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedTree {
    pub n: usize,
    /// Edges `(u, v, w)` in the order they were accepted.
    pub edges: Vec<(usize, usize, i64)>,
    /// Number of triples drawn, including rejected ones.
    pub attempts: usize,
}

impl WeightedTree {
    /// Samples a random spanning tree.
    ///
    /// Every attempt draws `u`, `v` and the weight, in that order, before
    /// deciding whether to keep the edge.
    pub fn random(rng: &mut Xorshift, params: &TreeParams) -> Result<Self, SamplingError> {
        let n = params.n;
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut attempts = 0;
        if n == 0 {
            return Ok(Self { n, edges, attempts });
        }
        let mut uf = Dsu::new(n);
        while uf.size(0) < n {
            if attempts >= params.max_attempts {
                return Err(SamplingError::AttemptsExhausted { attempts });
            }
            attempts += 1;
            let u = rng.index(n);
            let v = rng.index(n);
            let w = rng.draw(params.max_weight) as i64 + 1;
            if u == v || uf.same(u, v) {
                continue;
            }
            uf.merge(u, v);
            edges.push((u, v, w));
        }
        Ok(Self { n, edges, attempts })
    }

    /// Adjacency lists `(neighbor, weight)`.
    pub fn adjacency(&self) -> Vec<Vec<(usize, i64)>> {
        let mut adj = vec![vec![]; self.n];
        for &(u, v, w) in &self.edges {
            adj[u].push((v, w));
            adj[v].push((u, w));
        }
        adj
    }

    /// Edge weights written into a fresh matrix, not yet relaxed.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_edges(self.n, &self.edges)
    }

    /// Fully relaxed all-pairs distances.
    pub fn all_pairs(&self) -> DistanceMatrix {
        let mut dist = self.distance_matrix();
        dist.relax();
        dist
    }
}
