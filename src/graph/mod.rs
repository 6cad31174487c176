//! Weighted directed graphs and single-source shortest paths
//!
//! Independent of the word ladder code. Graph files are plain text: the vertex
//! count, then any number of whitespace-separated `src dst weight` triples.

mod dijkstra;

pub use dijkstra::{ShortestPaths, dijkstra};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub weight: u32,
}

/// Errors from reading a graph file
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("graph file is missing the vertex count")]
    MissingVertexCount,
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("incomplete edge: expected `src dst weight` triples")]
    IncompleteEdge,
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    #[error("cannot allocate a graph with {0} vertices")]
    TooManyVertices(usize),
}

/// Adjacency-list graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Graph with `vertex_count` vertices and no edges
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] if the adjacency lists cannot be allocated.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooManyVertices(vertex_count))?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self { adjacency })
    }

    /// Add a directed edge
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint does not exist.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: u32) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [src, dst] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        self.adjacency[src].push(Edge { src, dst, weight });
        Ok(())
    }

    /// Parse the text format described in the module docs
    ///
    /// # Errors
    /// Returns a [`GraphError`] for a missing count, non-numeric tokens, a
    /// trailing partial triple, an endpoint outside `0..vertex_count` or a vertex
    /// count too large to allocate.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::Graph;
    ///
    /// let graph = Graph::parse("3\n0 1 5\n1 2 2\n").unwrap();
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edges(0).len(), 1);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let mut tokens = text.split_whitespace();

        let vertex_count = tokens
            .next()
            .ok_or(GraphError::MissingVertexCount)
            .and_then(parse_number::<usize>)?;
        let mut graph = Self::new(vertex_count)?;

        while let Some(src) = tokens.next() {
            let (Some(dst), Some(weight)) = (tokens.next(), tokens.next()) else {
                return Err(GraphError::IncompleteEdge);
            };
            graph.add_edge(
                parse_number(src)?,
                parse_number(dst)?,
                parse_number(weight)?,
            )?;
        }

        Ok(graph)
    }

    /// Read and parse a graph file
    ///
    /// # Errors
    /// Returns [`GraphError::Io`] if the file cannot be read, or any parse error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing edges of `vertex` (empty if it does not exist)
    #[must_use]
    pub fn edges(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, GraphError> {
    token
        .parse()
        .map_err(|_| GraphError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edges() {
        let graph = Graph::parse("4\n0 1 3\n0 2 1\n2 3 7").unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.edges(0),
            &[
                Edge {
                    src: 0,
                    dst: 1,
                    weight: 3
                },
                Edge {
                    src: 0,
                    dst: 2,
                    weight: 1
                }
            ]
        );
        assert!(graph.edges(3).is_empty());
        assert!(graph.edges(99).is_empty());
    }

    #[test]
    fn empty_text_is_missing_count() {
        assert!(matches!(
            Graph::parse("  \n"),
            Err(GraphError::MissingVertexCount)
        ));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            Graph::parse("two"),
            Err(GraphError::InvalidNumber(t)) if t == "two"
        ));
        assert!(matches!(
            Graph::parse("2\n0 1 -4"),
            Err(GraphError::InvalidNumber(_))
        ));
    }

    #[test]
    fn rejects_partial_edge() {
        assert!(matches!(
            Graph::parse("2\n0 1"),
            Err(GraphError::IncompleteEdge)
        ));
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        assert!(matches!(
            Graph::parse("2\n0 2 1"),
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        ));
    }

    #[test]
    fn rejects_unallocatable_vertex_count() {
        assert!(matches!(
            Graph::parse("18446744073709551615"),
            Err(GraphError::TooManyVertices(usize::MAX))
        ));
    }

    #[test]
    fn new_graph_has_isolated_vertices() {
        let mut graph = Graph::new(3).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        graph.add_edge(2, 0, 1).unwrap();
        assert_eq!(graph.edges(2).len(), 1);
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.txt");
        std::fs::write(&path, "2\n0 1 4\n").unwrap();

        let graph = Graph::from_file(&path).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Graph::from_file(dir.path().join("nope.txt")),
            Err(GraphError::Io(_))
        ));
    }
}
