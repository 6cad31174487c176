//! Dijkstra's algorithm with a binary heap and lazy deletion

use super::Graph;
use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Single-source shortest path tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    /// `None` for unreachable vertices
    distances: Vec<Option<u64>>,
    /// Predecessor on a shortest path; `None` for the source and unreachable vertices
    previous: Vec<Option<usize>>,
}

impl ShortestPaths {
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Shortest distance to `destination`, if reachable
    #[must_use]
    pub fn distance_to(&self, destination: usize) -> Option<u64> {
        self.distances.get(destination).copied().flatten()
    }

    #[must_use]
    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    /// Vertices from the source to `destination`, or empty if unreachable
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::{Graph, dijkstra};
    ///
    /// let graph = Graph::parse("3\n0 1 1\n1 2 1\n0 2 5").unwrap();
    /// let paths = dijkstra(&graph, 0);
    /// assert_eq!(paths.path_to(2), [0, 1, 2]);
    /// assert_eq!(paths.distance_to(2), Some(2));
    /// ```
    #[must_use]
    pub fn path_to(&self, destination: usize) -> Vec<usize> {
        if self.distance_to(destination).is_none() {
            return Vec::new();
        }

        let mut path = vec![destination];
        let mut cursor = destination;
        while let Some(prev) = self.previous[cursor] {
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        path
    }
}

/// Shortest paths from `source` to every vertex of `graph`
///
/// A `source` outside the graph yields no reachable vertices.
#[must_use]
pub fn dijkstra(graph: &Graph, source: usize) -> ShortestPaths {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];

    if source >= n {
        return ShortestPaths {
            source,
            distances,
            previous,
        };
    }

    distances[source] = Some(0);
    let mut heap = BinaryHeap::from([Reverse((0u64, source))]);
    let mut settled_count = 0usize;

    while let Some(Reverse((dist, u))) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        settled_count += 1;

        for edge in graph.edges(u) {
            let v = edge.dst;
            if settled[v] {
                continue;
            }
            let candidate = dist + u64::from(edge.weight);
            if distances[v].is_none_or(|d| candidate < d) {
                distances[v] = Some(candidate);
                previous[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    debug!("dijkstra from {source}: settled {settled_count}/{n} vertices");

    ShortestPaths {
        source,
        distances,
        previous,
    }
}
