//! Weighted shortest path command

use super::CommandError;
use crate::graph::{Graph, dijkstra};
use std::path::Path;

/// Result of a single-source shortest path query
pub struct PathResult {
    pub source: usize,
    pub destination: usize,
    /// Empty if the destination is unreachable
    pub path: Vec<usize>,
    pub total_cost: Option<u64>,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Load a graph file and find the cheapest path from `source` to `destination`
///
/// # Errors
///
/// Returns an error if the graph file cannot be read or parsed, or if either
/// vertex is outside the graph.
pub fn find_path<P: AsRef<Path>>(
    graph_file: P,
    source: usize,
    destination: usize,
) -> Result<PathResult, CommandError> {
    let graph = Graph::from_file(graph_file)?;
    shortest_path(&graph, source, destination)
}

/// Cheapest path within an already-loaded graph
///
/// # Errors
///
/// Returns an error if either vertex is outside the graph.
pub fn shortest_path(
    graph: &Graph,
    source: usize,
    destination: usize,
) -> Result<PathResult, CommandError> {
    let vertex_count = graph.vertex_count();
    for vertex in [source, destination] {
        if vertex >= vertex_count {
            return Err(CommandError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
    }

    let paths = dijkstra(graph, source);

    Ok(PathResult {
        source,
        destination,
        path: paths.path_to(destination),
        total_cost: paths.distance_to(destination),
        vertex_count,
        edge_count: graph.edge_count(),
    })
}
