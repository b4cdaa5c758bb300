use std::{fmt::Display, str::FromStr};

use crate::{GraphError, Vertex, graph::Graph, input::edgelist::EdgeList};

pub struct Uninitialized {}

pub struct FromEdgeList<V> {
    edges: EdgeList<V>,
}

#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
        }
    }

    pub fn edges<V, I>(self, edges: I) -> GraphBuilder<FromEdgeList<V>>
    where
        V: Vertex,
        I: IntoIterator<Item = (V, V)>,
    {
        GraphBuilder {
            state: FromEdgeList {
                edges: edges.into_iter().collect(),
            },
        }
    }

    pub fn string<V>(self, s: &str) -> Result<GraphBuilder<FromEdgeList<V>>, GraphError<V>>
    where
        V: Vertex + FromStr,
        <V as FromStr>::Err: Display,
    {
        Ok(GraphBuilder {
            state: FromEdgeList {
                edges: EdgeList::try_from(s)?,
            },
        })
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> GraphBuilder<FromEdgeList<V>> {
    pub fn build(self) -> Result<Graph<V>, GraphError<V>> {
        Graph::try_from(self.state.edges)
    }
}

/// Builds a [`Graph`] from `(start, end)` pairs.
///
/// Fails with [`GraphError::EmptyGraph`] when `edges` is empty.
pub fn make_graph<V, I>(edges: I) -> Result<Graph<V>, GraphError<V>>
where
    V: Vertex,
    I: IntoIterator<Item = (V, V)>,
{
    GraphBuilder::new().edges(edges).build()
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::DirectedGraph;

    #[test]
    fn make_graph_groups_by_start() {
        let graph = make_graph([(4, 5), (4, 6), (4, 7), (5, 7), (6, 7)]).unwrap();

        assert_eq!(graph.successors(4), Some(&FxHashSet::from_iter([5, 6, 7])));
        assert_eq!(graph.vertex_count(), 4);
    }

    #[test]
    fn make_graph_order_independent() {
        let edges = vec![(1, 2), (0, 1), (1, 3), (0, 2), (2, 3)];
        let mut shuffled = edges.clone();
        shuffled.rotate_left(2);
        shuffled.swap(0, 3);

        let a = make_graph(edges.clone()).unwrap();
        let b = make_graph(edges).unwrap();
        let c = make_graph(shuffled).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn make_graph_empty() {
        assert_eq!(
            make_graph::<u64, _>(Vec::new()),
            Err(GraphError::EmptyGraph)
        );
    }

    #[test]
    fn builder_from_string() {
        let graph = GraphBuilder::new()
            .string::<u16>("0 1\n0 2\n1 3\n2 3\n")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(graph, make_graph([(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap());
    }

    #[test]
    fn builder_from_bad_string() {
        let result = GraphBuilder::new().string::<u16>("0 1\n0 -2\n");

        assert!(matches!(result, Err(GraphError::Parse { line: 2, .. })));
    }
}
