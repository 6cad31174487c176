//! Command error type

use crate::core::WordError;
use crate::graph::GraphError;
use thiserror::Error;

/// Errors surfaced by command implementations
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid word {input:?}: {source}")]
    InvalidWord {
        input: String,
        #[source]
        source: WordError,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

impl CommandError {
    pub(crate) fn invalid_word(input: &str, source: WordError) -> Self {
        Self::InvalidWord {
            input: input.to_string(),
            source,
        }
    }
}
