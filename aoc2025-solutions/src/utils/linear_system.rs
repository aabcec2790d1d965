//! Minimum non-negative integer solutions of `A·x = b`
//!
//! `A` is reduced to reduced row-echelon form over exact rationals. The
//! non-pivot columns are free variables; every assignment to them within
//! their bounds fixes the pivot variables, and the cheapest assignment
//! whose pivot values are non-negative integers wins.
//!
//! The search is exponential in the number of free variables, with each
//! one bounded by the smallest target it touches. That is fine for systems
//! with a handful of free columns and small targets, and nothing more is
//! promised.

use num_rational::Rational64;
use num_traits::{Signed, Zero};

/// `coefficients[row][column]`, one row per constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSystem {
    coefficients: Vec<Vec<u32>>,
    targets: Vec<u64>,
}

/// A minimal solution: `values[column]` and their sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub values: Vec<u64>,
    pub total: u64,
}

/// `[A|b]` in reduced row-echelon form
#[derive(Debug, Clone)]
struct Reduced {
    /// `rank` rows, each `columns + 1` wide; row `r` has its pivot at
    /// `pivots[r]`
    rows: Vec<Vec<Rational64>>,
    pivots: Vec<usize>,
    consistent: bool,
}

impl LinearSystem {
    /// # Panics
    ///
    /// If the rows differ in length or there is not one target per row.
    pub fn new(coefficients: Vec<Vec<u32>>, targets: Vec<u64>) -> Self {
        assert_eq!(
            coefficients.len(),
            targets.len(),
            "one target per constraint row"
        );
        if let Some(first) = coefficients.first() {
            assert!(
                coefficients.iter().all(|row| row.len() == first.len()),
                "coefficient rows must all have the same length"
            );
        }
        Self {
            coefficients,
            targets,
        }
    }

    /// Incidence system: column `j` adds 1 to every row listed in `columns[j]`.
    ///
    /// # Panics
    ///
    /// If a column lists a row outside `0..targets.len()`.
    pub fn from_incidence(columns: &[Vec<usize>], targets: &[u64]) -> Self {
        let mut coefficients = vec![vec![0; columns.len()]; targets.len()];
        for (col, rows) in columns.iter().enumerate() {
            for &row in rows {
                coefficients[row][col] = 1;
            }
        }
        Self::new(coefficients, targets.to_vec())
    }

    pub fn rows(&self) -> usize {
        self.targets.len()
    }

    pub fn columns(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    /// `A·x`
    pub fn apply(&self, x: &[u64]) -> Vec<u64> {
        self.coefficients
            .iter()
            .map(|row| row.iter().zip(x).map(|(&a, &v)| a as u64 * v).sum())
            .collect()
    }

    /// Smallest `Σx` over non-negative integer `x` with `A·x = b`, or `None`
    /// when no such `x` exists.
    pub fn min_total(&self) -> Option<u64> {
        self.solve().map(|s| s.total)
    }

    /// A non-negative integer solution minimising `Σx`.
    pub fn solve(&self) -> Option<Solution> {
        let reduced = self.reduce();
        if !reduced.consistent {
            return None;
        }

        let free: Vec<usize> = (0..self.columns())
            .filter(|c| !reduced.pivots.contains(c))
            .collect();
        let bounds = free.iter().map(|&c| self.bound(c)).collect();

        let mut search = FreeSearch {
            reduced: &reduced,
            columns: self.columns(),
            free: &free,
            bounds,
            assignment: vec![0; free.len()],
            best: None,
        };
        search.descend(0, 0);
        search.best
    }

    /// Coefficients are non-negative, so `x[column] * a <= target` on every
    /// row the column touches. A column touching no row only adds cost.
    fn bound(&self, column: usize) -> u64 {
        self.coefficients
            .iter()
            .zip(&self.targets)
            .filter(|(row, _)| row[column] != 0)
            .map(|(row, &t)| t / row[column] as u64)
            .min()
            .unwrap_or(0)
    }

    fn reduce(&self) -> Reduced {
        let (rows, columns) = (self.rows(), self.columns());
        let mut m: Vec<Vec<Rational64>> = self
            .coefficients
            .iter()
            .zip(&self.targets)
            .map(|(row, &t)| {
                row.iter()
                    .map(|&a| Rational64::from_integer(a as i64))
                    .chain(std::iter::once(Rational64::from_integer(t as i64)))
                    .collect()
            })
            .collect();

        let mut pivots = Vec::new();
        let mut pivot_row = 0;
        for col in 0..columns {
            if pivot_row == rows {
                break;
            }
            let Some(found) = (pivot_row..rows).find(|&r| !m[r][col].is_zero()) else {
                continue;
            };
            m.swap(pivot_row, found);

            let scale = m[pivot_row][col];
            for v in m[pivot_row].iter_mut() {
                *v /= scale;
            }
            for r in 0..rows {
                let factor = m[r][col];
                if r == pivot_row || factor.is_zero() {
                    continue;
                }
                for c in col..=columns {
                    let delta = factor * m[pivot_row][c];
                    m[r][c] -= delta;
                }
            }

            pivots.push(col);
            pivot_row += 1;
        }

        let consistent = m[pivot_row..].iter().all(|row| row[columns].is_zero());
        m.truncate(pivot_row);
        Reduced {
            rows: m,
            pivots,
            consistent,
        }
    }
}

struct FreeSearch<'r> {
    reduced: &'r Reduced,
    columns: usize,
    free: &'r [usize],
    bounds: Vec<u64>,
    assignment: Vec<u64>,
    best: Option<Solution>,
}

impl FreeSearch<'_> {
    fn descend(&mut self, k: usize, partial: u64) {
        if self.best.as_ref().is_some_and(|b| partial >= b.total) {
            return;
        }
        if k == self.free.len() {
            // leaves are not visited in order of total: pivots can grow as free values shrink
            if let Some(solution) = self.complete(partial)
                && self.best.as_ref().is_none_or(|b| solution.total < b.total)
            {
                self.best = Some(solution);
            }
            return;
        }

        for value in 0..=self.bounds[k] {
            self.assignment[k] = value;
            self.descend(k + 1, partial + value);
        }
        self.assignment[k] = 0;
    }

    /// Back-substitute the free assignment; `None` unless every pivot value
    /// is a non-negative integer.
    fn complete(&self, free_total: u64) -> Option<Solution> {
        let mut values = vec![0; self.columns];
        for (&col, &value) in self.free.iter().zip(&self.assignment) {
            values[col] = value;
        }

        let mut total = free_total;
        for (row, &pivot) in self.reduced.rows.iter().zip(&self.reduced.pivots) {
            let mut v = row[self.columns];
            for (&col, &value) in self.free.iter().zip(&self.assignment) {
                v -= row[col] * Rational64::from_integer(value as i64);
            }
            if v.is_negative() || !v.is_integer() {
                return None;
            }
            let v = v.to_integer() as u64;
            values[pivot] = v;
            total += v;
        }

        Some(Solution { values, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unique_solution_without_free_columns() {
        let system = LinearSystem::from_incidence(&[vec![0, 1]], &[5, 5]);
        assert_eq!(system.min_total(), Some(5));
    }

    #[test]
    fn free_columns_are_searched() {
        let buttons = [
            vec![3],
            vec![1, 3],
            vec![2],
            vec![2, 3],
            vec![0, 2],
            vec![0, 1],
        ];
        let system = LinearSystem::from_incidence(&buttons, &[3, 5, 4, 7]);
        let solution = system.solve().unwrap();
        assert_eq!(solution.total, 10);
        assert_eq!(system.apply(&solution.values), vec![3, 5, 4, 7]);
    }

    #[test]
    fn cheaper_early_leaf_is_not_overwritten() {
        // x0 + x1 = 3, x1 + x2 = 1; raising the free x2 lowers x1 and raises x0
        let system = LinearSystem::from_incidence(&[vec![0], vec![0, 1], vec![1]], &[3, 1]);
        let solution = system.solve().unwrap();
        assert_eq!(solution.total, 3);
        assert_eq!(solution.values, vec![2, 1, 0]);
    }

    #[test]
    fn machines_with_several_free_columns() {
        let buttons = [
            vec![0, 2, 3, 4],
            vec![2, 3],
            vec![0, 4],
            vec![0, 1, 2],
            vec![1, 2, 3, 4],
        ];
        let system = LinearSystem::from_incidence(&buttons, &[7, 5, 12, 7, 2]);
        assert_eq!(system.min_total(), Some(12));

        let buttons = [
            vec![0, 1, 2, 3, 4],
            vec![0, 3, 4],
            vec![0, 1, 2, 4, 5],
            vec![1, 2],
        ];
        let system = LinearSystem::from_incidence(&buttons, &[10, 11, 11, 5, 10, 5]);
        assert_eq!(system.min_total(), Some(11));
    }

    #[test]
    fn shared_column_prefers_fewer_presses() {
        let system = LinearSystem::from_incidence(&[vec![0], vec![1], vec![0, 1]], &[3, 2]);
        assert_eq!(system.min_total(), Some(3));
    }

    #[test]
    fn inconsistent_system_has_no_solution() {
        let system = LinearSystem::from_incidence(&[vec![0, 1]], &[5, 4]);
        assert_eq!(system.min_total(), None);
    }

    #[test]
    fn fractional_solution_is_rejected() {
        // x0 + x1 = 1, x1 + x2 = 1, x0 + x2 = 1 forces every x to 1/2
        let system =
            LinearSystem::from_incidence(&[vec![0, 2], vec![0, 1], vec![1, 2]], &[1, 1, 1]);
        assert_eq!(system.min_total(), None);
    }

    #[test]
    fn untouched_column_stays_zero() {
        let system = LinearSystem::from_incidence(&[vec![0], vec![]], &[4]);
        assert_eq!(system.solve().unwrap().values, vec![4, 0]);
    }

    #[test]
    fn empty_system_costs_nothing() {
        assert_eq!(LinearSystem::new(vec![], vec![]).min_total(), Some(0));
    }

    /// Exhaustive minimum over `0..=limit` per column
    fn brute_force(system: &LinearSystem, limit: u64) -> Option<u64> {
        let columns = system.columns();
        let mut x = vec![0u64; columns];
        let mut best: Option<u64> = None;
        loop {
            if system.apply(&x) == system.targets {
                let total = x.iter().sum();
                best = Some(best.map_or(total, |b: u64| b.min(total)));
            }
            let mut i = 0;
            while i < columns && x[i] == limit {
                x[i] = 0;
                i += 1;
            }
            if i == columns {
                return best;
            }
            x[i] += 1;
        }
    }

    fn small_system() -> impl Strategy<Value = LinearSystem> {
        (1usize..=3, 1usize..=5).prop_flat_map(|(rows, cols)| {
            (
                prop::collection::vec(prop::collection::vec(0u32..=1, cols), rows),
                prop::collection::vec(0u64..=6, rows),
            )
                .prop_map(|(coefficients, targets)| LinearSystem::new(coefficients, targets))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn matches_exhaustive_search(system in small_system()) {
            prop_assert_eq!(system.min_total(), brute_force(&system, 6));
        }

        #[test]
        fn solutions_reproduce_targets(system in small_system()) {
            if let Some(solution) = system.solve() {
                prop_assert_eq!(system.apply(&solution.values), system.targets.clone());
                prop_assert_eq!(solution.values.iter().sum::<u64>(), solution.total);
            }
        }

        #[test]
        fn zero_targets_cost_nothing(system in small_system()) {
            let zeroed = LinearSystem::new(system.coefficients.clone(), vec![0; system.rows()]);
            prop_assert_eq!(zeroed.min_total(), Some(0));
        }
    }
}
