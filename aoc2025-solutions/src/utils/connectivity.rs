//! Shortest-first connection of 3D points
//!
//! All point pairs are ranked by straight-line distance and fed, closest
//! first, into a [`DisjointSet`]. Distances are compared as exact integer
//! squares; pairs at equal distance keep their generation order
//! (`(0, 1), (0, 2), .., (1, 2), ..`) because the sort is stable.

use super::disjoint_set::DisjointSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point3 {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_squared(&self, other: &Point3) -> u64 {
        let d = |a: i64, b: i64| a.abs_diff(b).pow(2);
        d(self.x, other.x) + d(self.y, other.y) + d(self.z, other.z)
    }
}

/// A candidate connection between points `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance_squared: u64,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectivityError {
    /// Fewer than two points: nothing ever needs connecting
    #[error("need at least two points to connect, got {0}")]
    TooFewPoints(usize),
    /// Every edge was processed and more than one circuit is left
    #[error("{circuits} circuits remain after all {edges} connections")]
    Disconnected { circuits: usize, edges: usize },
}

/// Every pair of points, closest first.
pub fn sorted_edges(points: &[Point3]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);
    for (a, p) in points.iter().enumerate() {
        for (b, q) in points.iter().enumerate().skip(a + 1) {
            edges.push(Edge {
                a,
                b,
                distance_squared: p.distance_squared(q),
            });
        }
    }
    edges.sort_by_key(|e| e.distance_squared);
    edges
}

/// Process the `connections` closest pairs, merged or not, and return the
/// product of the `top` largest circuit sizes.
///
/// Asking for more connections than there are pairs processes them all.
/// With fewer than `top` circuits the product covers those that exist.
pub fn largest_circuits_product(
    points: &[Point3],
    edges: &[Edge],
    connections: usize,
    top: usize,
) -> u64 {
    let mut sets = DisjointSet::new(points.len());
    for edge in edges.iter().take(connections) {
        sets.union(edge.a, edge.b);
    }

    let mut sizes = sets.circuit_sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(top).map(|&s| s as u64).product()
}

/// The edge whose merge leaves a single circuit.
pub fn bridging_edge(points: &[Point3], edges: &[Edge]) -> Result<Edge, ConnectivityError> {
    if points.len() < 2 {
        return Err(ConnectivityError::TooFewPoints(points.len()));
    }

    let mut sets = DisjointSet::new(points.len());
    edges
        .iter()
        .find(|edge| sets.union(edge.a, edge.b) && sets.count() == 1)
        .copied()
        .ok_or_else(|| ConnectivityError::Disconnected {
            circuits: sets.count(),
            edges: edges.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(xs: &[i64]) -> Vec<Point3> {
        xs.iter().map(|&x| Point3::new(x, 0, 0)).collect()
    }

    #[test]
    fn equal_distances_keep_generation_order() {
        let points = line(&[0, 1, 2]);
        let edges = sorted_edges(&points);
        let pairs: Vec<_> = edges.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (0, 2)]);
    }

    #[test]
    fn redundant_connections_still_count() {
        // the three closest sides of a unit square join all four corners
        let points = vec![
            Point3::new(0, 0, 0),
            Point3::new(1, 0, 0),
            Point3::new(0, 1, 0),
            Point3::new(1, 1, 0),
        ];
        let edges = sorted_edges(&points);
        assert_eq!(largest_circuits_product(&points, &edges, 3, 3), 4);

        // a triangle spends its third connection on an existing circuit
        let points = line(&[0, 1, 2, 100]);
        let edges = sorted_edges(&points);
        assert_eq!(largest_circuits_product(&points, &edges, 3, 3), 3);
    }

    #[test]
    fn product_uses_available_circuits() {
        let points = line(&[0, 1]);
        let edges = sorted_edges(&points);
        assert_eq!(largest_circuits_product(&points, &edges, 1000, 3), 2);
    }

    #[test]
    fn bridging_edge_is_last_merge() {
        let points = line(&[0, 1, 10]);
        let edges = sorted_edges(&points);
        let edge = bridging_edge(&points, &edges).unwrap();
        assert_eq!((edge.a, edge.b), (1, 2));
    }

    #[test]
    fn unbridgeable_inputs_are_errors() {
        let points = line(&[5]);
        assert_eq!(
            bridging_edge(&points, &sorted_edges(&points)),
            Err(ConnectivityError::TooFewPoints(1))
        );

        let points = line(&[0, 1, 2]);
        let edges = sorted_edges(&points);
        assert_eq!(
            bridging_edge(&points, &edges[..1]),
            Err(ConnectivityError::Disconnected {
                circuits: 2,
                edges: 1
            })
        );
    }
}
