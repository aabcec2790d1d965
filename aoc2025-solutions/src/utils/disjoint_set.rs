//! Union-find over `0..n` with path compression and union by rank

/// Partition of `0..n` into disjoint sets.
///
/// ```
/// use aoc2025_solutions::utils::disjoint_set::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.count(), 3);
/// assert_eq!(sets.size_of(1), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct sets
    pub fn count(&self) -> usize {
        self.count
    }

    /// Representative of `x`'s set. Every node on the walked path is
    /// re-pointed straight at the root.
    ///
    /// # Panics
    ///
    /// If `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        self.check(x);

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`; `false` if they were already one set.
    ///
    /// The lower-rank root goes under the higher-rank one. On a tie `y`'s
    /// root goes under `x`'s and `x`'s rank grows.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }

        let (winner, loser) = if self.rank[rx] < self.rank[ry] {
            (ry, rx)
        } else {
            (rx, ry)
        };
        if self.rank[winner] == self.rank[loser] {
            self.rank[winner] += 1;
        }
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        self.count -= 1;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the set containing `x`.
    pub fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Size of every distinct set, in order of their representatives.
    pub fn circuit_sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .map(|(i, _)| self.size[i])
            .collect()
    }

    fn check(&self, x: usize) {
        assert!(
            x < self.len(),
            "element {} out of range for a disjoint set of {} elements",
            x,
            self.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_as_singletons() {
        let mut sets = DisjointSet::new(5);
        assert_eq!(sets.count(), 5);
        assert_eq!(sets.circuit_sizes(), vec![1; 5]);
        assert!(!sets.connected(0, 4));
    }

    #[test]
    fn path_is_compressed_to_root() {
        let mut sets = DisjointSet::new(4);
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(0, 2);
        let root = sets.find(3);
        assert!((0..4).all(|i| sets.parent[i] == root || i == root));
    }

    #[test]
    fn empty_set_has_no_circuits() {
        let sets = DisjointSet::new(0);
        assert!(sets.is_empty());
        assert!(sets.circuit_sizes().is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn find_out_of_range_panics() {
        DisjointSet::new(3).find(3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn union_out_of_range_panics() {
        DisjointSet::new(3).union(0, 7);
    }

    /// Connected components by flood fill over the same unions
    fn reference_components(n: usize, unions: &[(usize, usize)]) -> Vec<usize> {
        let mut label: Vec<usize> = (0..n).collect();
        loop {
            let mut changed = false;
            for &(a, b) in unions {
                let low = label[a].min(label[b]);
                for node in [a, b] {
                    if label[node] != low {
                        label[node] = low;
                        changed = true;
                    }
                }
            }
            if !changed {
                return label;
            }
        }
    }

    fn unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (1usize..24).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..40)))
    }

    proptest! {
        #[test]
        fn find_agrees_with_transitive_connectivity((n, pairs) in unions()) {
            let mut sets = DisjointSet::new(n);
            for &(a, b) in &pairs {
                sets.union(a, b);
            }
            let labels = reference_components(n, &pairs);
            for x in 0..n {
                for y in 0..n {
                    prop_assert_eq!(sets.connected(x, y), labels[x] == labels[y]);
                }
            }
        }

        #[test]
        fn sizes_always_total_n((n, pairs) in unions()) {
            let mut sets = DisjointSet::new(n);
            for &(a, b) in &pairs {
                sets.union(a, b);
                let sizes = sets.circuit_sizes();
                prop_assert_eq!(sizes.iter().sum::<usize>(), n);
                prop_assert_eq!(sizes.len(), sets.count());
            }
        }

        #[test]
        fn repeated_union_is_a_no_op((n, pairs) in unions()) {
            let mut sets = DisjointSet::new(n);
            for &(a, b) in &pairs {
                sets.union(a, b);
                let count = sets.count();
                prop_assert!(!sets.union(a, b));
                prop_assert_eq!(sets.count(), count);
            }
        }
    }
}
