use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::{DirectedGraph, GraphError, Vertex, input::edgelist::EdgeList};

pub mod csr;

/// Adjacency representation of a directed graph.
///
/// `vertexes` holds every endpoint of every edge. `edges` maps a start vertex
/// to the set of vertices it connects to directly; vertices without an
/// outgoing edge have no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<V: Vertex> {
    vertexes: FxHashSet<V>,
    edges: FxHashMap<V, FxHashSet<V>>,
}

impl<V: Vertex> Graph<V> {
    /// A graph made of a single vertex and no edges.
    pub fn singleton(vertex: V) -> Self {
        let mut vertexes = FxHashSet::default();
        vertexes.insert(vertex);

        Self {
            vertexes,
            edges: FxHashMap::default(),
        }
    }

    pub fn successors(&self, vertex: V) -> Option<&FxHashSet<V>> {
        self.edges.get(&vertex)
    }

    pub fn edges(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.edges
            .iter()
            .flat_map(|(start, ends)| ends.iter().map(move |end| (*start, *end)))
    }
}

impl<V: Vertex> DirectedGraph for Graph<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|ends| ends.len()).sum()
    }

    fn contains(&self, vertex: V) -> bool {
        self.vertexes.contains(&vertex)
    }

    fn vertexes(&self) -> impl Iterator<Item = V> + '_ {
        self.vertexes.iter().copied()
    }

    fn out_neighbors(&self, vertex: V) -> impl Iterator<Item = V> + '_ {
        self.edges
            .get(&vertex)
            .into_iter()
            .flat_map(|ends| ends.iter().copied())
    }

    fn out_degree(&self, vertex: V) -> usize {
        self.edges.get(&vertex).map_or(0, |ends| ends.len())
    }
}

/// Groups the edges by start vertex. The order of `edge_list` does not matter
/// and duplicate edges collapse into one.
impl<V: Vertex> TryFrom<EdgeList<V>> for Graph<V> {
    type Error = GraphError<V>;

    fn try_from(edge_list: EdgeList<V>) -> Result<Self, Self::Error> {
        if edge_list.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut vertexes = FxHashSet::default();
        let mut edges: FxHashMap<V, FxHashSet<V>> = FxHashMap::default();

        edge_list.edges().for_each(|(start, end)| {
            vertexes.insert(start);
            vertexes.insert(end);
            edges.entry(start).or_default().insert(end);
        });

        let g = Self { vertexes, edges };

        info!(
            "Created graph (vertex_count: {:?}, edge_count = {:?})",
            g.vertex_count(),
            g.edge_count()
        );

        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    fn setup() -> Graph<u32> {
        let edges = EdgeList::new(vec![(4, 5), (4, 6), (4, 7), (5, 6), (6, 7), (7, 10)]);

        Graph::try_from(edges).unwrap()
    }

    #[test]
    fn from_edgelist() {
        let graph = setup();

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(
            graph.successors(4),
            Some(&FxHashSet::from_iter([5, 6, 7])),
            "Successors of vertex 4."
        );
        assert_eq!(graph.successors(10), None, "Vertex 10 has no entry.");
        assert_eq!(graph.out_degree(10), 0);
        assert_eq!(graph.min_vertex(), Some(4));
        assert_eq!(graph.max_vertex(), Some(10));
    }

    #[test]
    fn vertexes_are_edge_endpoints() {
        let graph = setup();

        let mut vertexes = graph.vertexes().collect::<Vec<u32>>();
        vertexes.sort();

        assert_eq!(vertexes, vec![4, 5, 6, 7, 10]);
        assert!(!graph.contains(8));
    }

    #[test]
    fn edge_order_is_irrelevant() {
        let mut edges = vec![(4, 5), (5, 6), (4, 6), (6, 7), (4, 7), (7, 10), (4, 6)];
        let graph = Graph::try_from(EdgeList::new(edges.clone())).unwrap();

        edges.reverse();
        let reversed = Graph::try_from(EdgeList::new(edges)).unwrap();

        assert_eq!(graph, reversed);
        assert_eq!(graph, setup());
    }

    #[test]
    fn empty_edgelist() {
        let result = Graph::<u32>::try_from(EdgeList::new(vec![]));

        assert_eq!(result, Err(GraphError::EmptyGraph));
    }

    #[test]
    fn singleton() {
        let graph = Graph::singleton(3i64);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertexes().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn edges_iter() {
        let graph = setup();

        let mut edges = graph.edges().collect::<Vec<_>>();
        edges.sort();

        assert_eq!(
            edges,
            vec![(4, 5), (4, 6), (4, 7), (5, 6), (6, 7), (7, 10)]
        );
    }

    #[test]
    fn serde_roundtrip() {
        let graph = setup();

        let json = serde_json::to_string(&graph).unwrap();
        let deserialized: Graph<u32> = serde_json::from_str(&json).unwrap();

        assert_eq!(graph, deserialized);
    }
}
