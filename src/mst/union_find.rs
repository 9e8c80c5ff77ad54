//! Union-find (disjoint-set union) over a fixed range of vertex ids.

/// A union-find structure with iterative path compression and union by rank.
///
/// Elements are `usize` ids in `[0, n)`. The parent and rank tables are flat
/// arrays indexed by id; there is no pointer graph. Each spanning tree builder
/// constructs its own instance, uses it for one call, and discards it.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Return the representative (root) of the set containing `x`.
    ///
    /// Compression is a two-pass walk: locate the root, then relink every
    /// node on the walked path directly to it. No recursion, so a
    /// pathological parent chain cannot exhaust the call stack.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Union by rank: the lower-rank root is attached under the higher-rank
    /// root; on equal ranks `x`'s root becomes the parent and its rank is
    /// incremented. Returns `false` (and does nothing) if `x` and `y`
    /// already share a root.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);

        if rx == ry {
            return false;
        }

        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }

        true
    }

    /// Whether `x` and `y` are in the same set.
    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}
