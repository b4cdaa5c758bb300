use std::{cmp::Reverse, collections::BinaryHeap};

use log::debug;
use rustc_hash::FxHashMap;

use crate::{DirectedGraph, GraphError, Vertex};

struct KahnData<V> {
    in_degrees: FxHashMap<V, usize>,
    ready: BinaryHeap<Reverse<V>>,
    order: Vec<V>,
}

impl<V: Vertex> KahnData<V> {
    fn new() -> Self {
        KahnData {
            in_degrees: FxHashMap::default(),
            ready: BinaryHeap::new(),
            order: Vec::new(),
        }
    }

    fn run<G: DirectedGraph<Vertex = V>>(&mut self, g: &G) -> Result<(), GraphError<V>> {
        debug!("Topological sort for graph with {} vertices", g.vertex_count());
        self.in_degrees.clear();
        self.ready.clear();
        self.order.clear();

        for v in g.vertexes() {
            self.in_degrees.entry(v).or_insert(0);
            for w in g.out_neighbors(v) {
                *self.in_degrees.entry(w).or_insert(0) += 1;
            }
        }

        // Smallest ready vertex first, so graphs whose edges all point upwards
        // come out in ascending order.
        self.ready.extend(
            self.in_degrees
                .iter()
                .filter(|(_, degree)| **degree == 0)
                .map(|(v, _)| Reverse(*v)),
        );

        while let Some(Reverse(v)) = self.ready.pop() {
            self.order.push(v);

            for w in g.out_neighbors(v) {
                if let Some(degree) = self.in_degrees.get_mut(&w) {
                    *degree -= 1;
                    if *degree == 0 {
                        self.ready.push(Reverse(w));
                    }
                }
            }
        }

        let remaining = self.in_degrees.len() - self.order.len();
        if remaining > 0 {
            debug!("{remaining} vertices are part of or behind a cycle");
            return Err(GraphError::Cycle { remaining });
        }

        Ok(())
    }
}

pub trait TopologicalSort: DirectedGraph {
    /// Orders the vertices so that every edge points to a later vertex.
    fn topological_order(&self) -> Result<Vec<Self::Vertex>, GraphError<Self::Vertex>>;

    /// All vertices sorted by value. With `validate`, fails on the first edge
    /// that does not point to a higher vertex.
    fn ascending_order(
        &self,
        validate: bool,
    ) -> Result<Vec<Self::Vertex>, GraphError<Self::Vertex>>;

    /// Partitions the vertices into antichains by their height, the length of
    /// the longest path to a sink. `levels[0]` holds the sinks and all
    /// successors of a vertex in `levels[h]` are in lower levels.
    fn antichains(&self) -> Result<Vec<Vec<Self::Vertex>>, GraphError<Self::Vertex>>;
}

impl<G> TopologicalSort for G
where
    G: DirectedGraph,
{
    fn topological_order(&self) -> Result<Vec<G::Vertex>, GraphError<G::Vertex>> {
        let mut kahn = KahnData::new();

        kahn.run(self)?;

        Ok(kahn.order)
    }

    fn ascending_order(&self, validate: bool) -> Result<Vec<G::Vertex>, GraphError<G::Vertex>> {
        if validate {
            for start in self.vertexes() {
                if let Some(end) = self.out_neighbors(start).find(|end| *end <= start) {
                    return Err(GraphError::DescendingEdge { start, end });
                }
            }
        }

        let mut order = Vec::from_iter(self.vertexes());
        order.sort_unstable();

        Ok(order)
    }

    fn antichains(&self) -> Result<Vec<Vec<G::Vertex>>, GraphError<G::Vertex>> {
        let order = self.topological_order()?;

        let mut heights: FxHashMap<G::Vertex, usize> = FxHashMap::default();
        let mut levels: Vec<Vec<G::Vertex>> = Vec::new();

        for v in order.into_iter().rev() {
            let height = self
                .out_neighbors(v)
                .filter_map(|w| heights.get(&w))
                .map(|h| h + 1)
                .max()
                .unwrap_or(0);

            heights.insert(v, height);
            if levels.len() <= height {
                levels.resize_with(height + 1, Vec::new);
            }
            levels[height].push(v);
        }

        levels.iter_mut().for_each(|level| level.sort_unstable());

        Ok(levels)
    }
}

#[cfg(test)]
mod test {
    use crate::{GraphError, builder::make_graph};

    use super::TopologicalSort;

    #[test]
    fn topological_order_ascending_graph() {
        let graph = make_graph([(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();

        assert_eq!(graph.topological_order().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn topological_order_arbitrary_labels() {
        let graph = make_graph([(5, 9), (9, 1), (5, 1), (1, 0)]).unwrap();

        assert_eq!(graph.topological_order().unwrap(), vec![5, 9, 1, 0]);
    }

    #[test]
    fn topological_order_cycle() {
        let graph = make_graph([(0, 1), (1, 2), (2, 3), (3, 1)]).unwrap();

        assert_eq!(
            graph.topological_order(),
            Err(GraphError::Cycle { remaining: 3 })
        );
    }

    #[test]
    fn ascending_order_validation() {
        let graph = make_graph([(0, 1), (1, 2), (2, 1)]).unwrap();

        assert_eq!(graph.ascending_order(false).unwrap(), vec![0, 1, 2]);
        assert_eq!(
            graph.ascending_order(true),
            Err(GraphError::DescendingEdge { start: 2, end: 1 })
        );
    }

    #[test]
    fn antichains() {
        let graph = make_graph([(0, 1), (0, 2), (1, 3), (2, 3), (0, 4)]).unwrap();

        let levels = graph.antichains().unwrap();

        assert_eq!(levels, vec![vec![3, 4], vec![1, 2], vec![0]]);
    }
}
