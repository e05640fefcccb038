/// Sentinel distance for vertices with no finite path from the source.
pub const UNREACHABLE: u64 = u64::MAX;

/// Dense weighted adjacency matrix, row-major.
///
/// `w[i * n + j]` is the edge weight from `i` to `j`; a weight of 0 means
/// "no edge", not a zero-cost edge. Entries never change after construction,
/// so concurrent reads during an engine run need no locking.
#[derive(Debug, Clone)]
pub struct DenseGraph {
    pub n: usize,
    pub w: Vec<u32>, // len = n * n
}

impl DenseGraph {
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of edges (nonzero entries).
    pub fn m(&self) -> usize {
        self.w.iter().filter(|&&x| x > 0).count()
    }

    pub fn weight(&self, i: usize, j: usize) -> u32 {
        self.w[i * self.n + j]
    }

    /// Outgoing weight row of vertex `u`.
    pub fn row(&self, u: usize) -> &[u32] {
        let start = u * self.n;
        &self.w[start..start + self.n]
    }
}
