use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Vertex identifier.
///
/// The `Ord` implementation is significant: counting in
/// [`VertexOrder::Ascending`](crate::algorithms::params::VertexOrder::Ascending)
/// treats it as a topological order of the graph.
pub trait Vertex: Copy + Ord + Hash + Debug + Display + Send + Sync {}

impl<T> Vertex for T where T: Copy + Ord + Hash + Debug + Display + Send + Sync {}
