//! Sub-problem structure of a memoized computation

use std::marker::PhantomData;

/// Dependencies and combination step of a DP over indices `I` with values `K`.
pub trait DpProblem<I, K> {
    /// Indices `index` depends on; empty for a base case.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value of `index` from the values of `deps(index)`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// A [`DpProblem`] made from a pair of closures
///
/// ```rust
/// use aoc2025_solutions::utils::dp_cache::{ClosureProblem, DpCache, VecBackend};
///
/// let factorial = ClosureProblem::new(
///     |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &usize, deps: Vec<u64>| if *n == 0 { 1 } else { *n as u64 * deps[0] },
/// );
/// let cache = DpCache::with_problem(VecBackend::new(), factorial);
/// assert_eq!(cache.get(&5), 120);
/// ```
pub struct ClosureProblem<I, K, D, C> {
    deps: D,
    compute: C,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, D, C> ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    pub fn new(deps: D, compute: C) -> Self {
        Self {
            deps,
            compute,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.deps)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute)(index, deps)
    }
}
