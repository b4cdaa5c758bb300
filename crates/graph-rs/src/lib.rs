use thiserror::Error;

pub use types::Vertex;

pub mod algorithms;
pub mod builder;
pub mod graph;
pub mod input;
pub mod types;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("vertex {0} not found in graph")]
    VertexNotFound(V),

    /// An edge points from a higher to a lower (or equal) vertex while the
    /// vertex order is taken to be the integer order.
    #[error("edge ({start}, {end}) does not point to a higher vertex")]
    DescendingEdge { start: V, end: V },

    #[error("graph contains a cycle, {remaining} vertices could not be ordered")]
    Cycle { remaining: usize },

    /// The path count of `vertex` does not fit the counter type.
    #[error("path count of vertex {vertex} overflows the counter type")]
    CountOverflow { vertex: V },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub trait DirectedGraph {
    type Vertex: Vertex;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn contains(&self, vertex: Self::Vertex) -> bool;

    fn vertexes(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    fn out_neighbors(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_;

    fn out_degree(&self, vertex: Self::Vertex) -> usize;

    fn min_vertex(&self) -> Option<Self::Vertex> {
        self.vertexes().min()
    }

    fn max_vertex(&self) -> Option<Self::Vertex> {
        self.vertexes().max()
    }
}
