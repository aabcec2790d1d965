use std::cell::Cell;
use std::rc::Rc;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// 0 depends on 1 and 2, which both depend on 3
struct Diamond {
    computed: Rc<Cell<usize>>,
}

impl DpProblem<usize, i32> for Diamond {
    fn deps(&self, n: &usize) -> Vec<usize> {
        match *n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        }
    }

    fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
        self.computed.set(self.computed.get() + 1);
        match *n {
            0 => deps[0] + deps[1],
            1 => deps[0] * 2,
            2 => deps[0] * 3,
            _ => 5,
        }
    }
}

#[test]
fn fibonacci_chain() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn shared_dependency_is_computed_once() {
    let computed = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::with_capacity(4),
        Diamond {
            computed: Rc::clone(&computed),
        },
    );

    assert_eq!(cache.get(&0), 25);
    assert_eq!(computed.get(), 4);

    assert_eq!(cache.get(&0), 25);
    assert_eq!(cache.get(&3), 5);
    assert_eq!(computed.get(), 4);
}

#[test]
fn hashmap_backend_takes_composite_keys() {
    // lattice paths from (0, 0) to (r, c)
    let paths = ClosureProblem::new(
        |&(r, c): &(usize, usize)| {
            let mut deps = Vec::new();
            if r > 0 {
                deps.push((r - 1, c));
            }
            if c > 0 {
                deps.push((r, c - 1));
            }
            deps
        },
        |_: &(usize, usize), deps: Vec<u64>| {
            if deps.is_empty() { 1 } else { deps.iter().sum() }
        },
    );
    let cache = DpCache::with_problem(HashMapBackend::new(), paths);
    assert_eq!(cache.get(&(4, 4)), 70);
    assert_eq!(cache.get(&(16, 16)), 601_080_390);
}

#[test]
fn backend_keeps_first_value() {
    let mut backend = VecBackend::new();
    assert_eq!(backend.get(&3), None);
    assert_eq!(*backend.get_or_insert(3, || 'a'), 'a');
    assert_eq!(*backend.get_or_insert(3, || 'b'), 'a');
    assert_eq!(backend.get(&1), None);

    let mut backend = HashMapBackend::new();
    assert_eq!(*backend.get_or_insert("x", || 1), 1);
    assert_eq!(*backend.get_or_insert("x", || 2), 1);
    assert_eq!(backend.get(&"y"), None);
}
