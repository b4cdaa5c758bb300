use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::DirectedGraph;

/// Compressed sparse row adjacency over dense node indices.
///
/// Node `i` is the `i`-th vertex of the order the `Csr` was built from, its
/// direct successors are `targets[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Csr {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl Csr {
    /// Create a `CSR` from `offsets` and `targets`.
    ///
    /// Returns a new `CSR` where `offsets[i]` contains the index of the first
    /// target node in `targets`.
    pub fn new(offsets: Vec<usize>, targets: Vec<usize>) -> Csr {
        Self { offsets, targets }
    }

    /// Builds the adjacency of `graph` with node `i` standing for `order[i]`.
    ///
    /// Edges to vertices missing from `order` are dropped.
    pub fn from_order<G: DirectedGraph>(graph: &G, order: &[G::Vertex]) -> Csr {
        let index: FxHashMap<G::Vertex, usize> = order
            .iter()
            .enumerate()
            .map(|(i, vertex)| (*vertex, i))
            .collect();

        let mut offsets = Vec::with_capacity(order.len() + 1);
        let mut targets = Vec::with_capacity(graph.edge_count());
        offsets.push(0);

        for vertex in order {
            targets.extend(
                graph
                    .out_neighbors(*vertex)
                    .filter_map(|successor| index.get(&successor).copied()),
            );
            offsets.push(targets.len());
        }

        Csr::new(offsets, targets)
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn degree(&self, i: usize) -> usize {
        self.offsets[i + 1] - self.offsets[i]
    }

    pub fn targets(&self, i: usize) -> &[usize] {
        &self.targets[self.offsets[i]..self.offsets[i + 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::Graph, input::edgelist::EdgeList};

    #[test]
    fn csr_from_vectors() {
        let offsets = vec![0, 2, 3, 4];
        let targets = vec![2, 3, 1, 0];
        let csr = Csr::new(offsets.clone(), targets.clone());
        assert_eq!(csr.targets(1), targets.get(offsets[1]..offsets[2]).unwrap());
        assert_eq!(csr.node_count(), 3);
        assert_eq!(csr.edge_count(), 4, "Edgecount should be 4.");
    }

    #[test]
    fn csr_degrees() {
        let csr = Csr::new(vec![0, 2, 3, 4], vec![2, 3, 1, 0]);
        assert_eq!(csr.degree(0), 2);
        assert_eq!(csr.degree(2), 1);
    }

    #[test]
    fn from_order() {
        let graph =
            Graph::try_from(EdgeList::new(vec![(10, 20), (10, 30), (20, 30), (30, 40)])).unwrap();

        let csr = Csr::from_order(&graph, &[40, 30, 20, 10]);

        assert_eq!(csr.node_count(), 4);
        assert_eq!(csr.edge_count(), 4);
        assert_eq!(csr.degree(0), 0, "Vertex 40 is a sink.");
        assert_eq!(csr.targets(1), &[0]);
        assert_eq!(csr.targets(2), &[1]);

        let mut targets = csr.targets(3).to_vec();
        targets.sort();
        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn from_partial_order() {
        let graph = Graph::try_from(EdgeList::new(vec![(1, 2), (2, 3)])).unwrap();

        let csr = Csr::from_order(&graph, &[1, 2]);

        assert_eq!(csr.node_count(), 2);
        assert_eq!(csr.targets(0), &[1]);
        assert_eq!(csr.degree(1), 0, "Edge to the unlisted vertex 3 is dropped.");
    }
}
