use std::fmt;

/// Disjoint-set-union over `0..n`.
///
/// `parent_or_size[v]` is the parent of `v`, or `-size` when `v` is a leader.
#[derive(Clone)]
pub struct Dsu {
    parent_or_size: Vec<isize>,
    components: usize,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self {
            parent_or_size: vec![-1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent_or_size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent_or_size.is_empty()
    }

    /// Representative of `v`'s component, compressing the path on the way.
    pub fn leader(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent_or_size[root] >= 0 {
            root = self.parent_or_size[root] as usize;
        }
        let mut u = v;
        while self.parent_or_size[u] >= 0 {
            let next = self.parent_or_size[u] as usize;
            self.parent_or_size[u] = root as isize;
            u = next;
        }
        root
    }

    /// Unites the components of `u` and `v`, the smaller under the larger.
    /// Returns `false` if they were already the same component.
    pub fn merge(&mut self, u: usize, v: usize) -> bool {
        let mut a = self.leader(u);
        let mut b = self.leader(v);
        if a == b {
            return false;
        }
        if -self.parent_or_size[a] < -self.parent_or_size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent_or_size[a] += self.parent_or_size[b];
        self.parent_or_size[b] = a as isize;
        self.components -= 1;
        true
    }

    pub fn same(&mut self, u: usize, v: usize) -> bool {
        self.leader(u) == self.leader(v)
    }

    /// Number of vertices in `v`'s component.
    pub fn size(&mut self, v: usize) -> usize {
        let r = self.leader(v);
        (-self.parent_or_size[r]) as usize
    }

    /// Number of disjoint components.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Components as sorted vertex lists, ordered by their smallest vertex.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.len();
        let mut by_leader = vec![vec![]; n];
        for v in 0..n {
            let r = self.leader(v);
            by_leader[r].push(v);
        }
        let mut groups: Vec<_> = by_leader.into_iter().filter(|g| !g.is_empty()).collect();
        groups.sort_unstable_by_key(|g| g[0]);
        groups
    }
}

impl fmt::Debug for Dsu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dsu = self.clone();
        f.debug_set().entries(dsu.groups()).finish()
    }
}
