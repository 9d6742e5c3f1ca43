use crate::*;

/// Distance of an unreachable pair before relaxation.
pub const INF: i64 = 1_000_000_000;

/// Dense `n x n` distance table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    dist: Vec<Vec<i64>>,
}

impl DistanceMatrix {
    /// Every pair at `INF`, diagonal at zero.
    pub fn new(n: usize) -> Self {
        let mut dist = mat![INF; n; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0;
        }
        Self { dist }
    }

    /// Builds the matrix from an undirected edge list `(u, v, w)`.
    pub fn from_edges(n: usize, edges: &[(usize, usize, i64)]) -> Self {
        let mut m = Self::new(n);
        for &(u, v, w) in edges {
            m.set_edge(u, v, w);
        }
        m
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Writes `w` on both `(u, v)` and `(v, u)`.
    pub fn set_edge(&mut self, u: usize, v: usize, w: i64) {
        self.dist[u][v] = w;
        self.dist[v][u] = w;
    }

    pub fn get(&self, u: usize, v: usize) -> i64 {
        self.dist[u][v]
    }

    /// Floyd–Warshall. `k` must stay the outermost loop.
    pub fn relax(&mut self) {
        let n = self.len();
        for k in 0..n {
            for i in 0..n {
                let dik = self.dist[i][k];
                for j in 0..n {
                    let via = dik + self.dist[k][j];
                    self.dist[i][j].setmin(via);
                }
            }
        }
    }

    /// Maximum of `dist[i][j]` over `i < j`; zero for fewer than two vertices.
    pub fn diameter(&self) -> i64 {
        let n = self.len();
        let mut ans = 0i64;
        for i in 0..n {
            for j in i + 1..n {
                ans.setmax(self.dist[i][j]);
            }
        }
        ans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path4() -> DistanceMatrix {
        // 0 -3- 1 -4- 2 -5- 3
        DistanceMatrix::from_edges(4, &[(0, 1, 3), (1, 2, 4), (2, 3, 5)])
    }

    #[test]
    fn fresh_matrix_has_zero_diagonal() {
        let m = DistanceMatrix::new(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), if i == j { 0 } else { INF });
            }
        }
    }

    #[test]
    fn relax_computes_path_sums() {
        let mut m = path4();
        m.relax();
        assert_eq!(m.get(0, 3), 12);
        assert_eq!(m.get(3, 0), 12);
        assert_eq!(m.get(1, 3), 9);
        assert_eq!(m.get(2, 2), 0);
        assert_eq!(m.diameter(), 12);
    }

    #[test]
    fn relax_is_idempotent() {
        let mut m = path4();
        m.relax();
        let once = m.clone();
        m.relax();
        assert_eq!(m, once);
    }

    #[test]
    fn shorter_detour_wins() {
        let mut m = DistanceMatrix::from_edges(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 5)]);
        m.relax();
        assert_eq!(m.get(0, 2), 2);
    }

    #[test]
    fn diameter_of_tiny_graphs() {
        assert_eq!(DistanceMatrix::new(0).diameter(), 0);
        assert_eq!(DistanceMatrix::new(1).diameter(), 0);
    }
}
