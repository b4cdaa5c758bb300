use std::fmt::Debug;

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{CheckedAdd, Num};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    DirectedGraph, GraphError, Vertex,
    algorithms::{
        params::{CountOptions, SinkPolicy, VertexOrder},
        topo_sort::TopologicalSort,
    },
    graph::{Graph, csr::Csr},
};

/// Counts distinct directed paths between two vertices of an acyclic graph.
///
/// The count of a vertex is the sum of the counts of its direct successors,
/// so the vertices are visited in reverse topological order and every count is
/// stored in a table local to the call. `C` is the counter type, counts grow
/// exponentially with the width of the graph so [`BigUint`] is the safe
/// choice. A fixed width counter fails with [`GraphError::CountOverflow`]
/// instead of wrapping.
pub trait PathCount: DirectedGraph {
    fn count_paths_with<C>(
        &self,
        start: Self::Vertex,
        end: Self::Vertex,
        options: CountOptions,
    ) -> Result<C, GraphError<Self::Vertex>>
    where
        C: Num + CheckedAdd + Clone + Debug;

    /// Same result as [`count_paths_with`](PathCount::count_paths_with), but
    /// computes each antichain of the graph in parallel. The vertex order of
    /// `options` only decides whether edges are validated.
    fn par_count_paths_with<C>(
        &self,
        start: Self::Vertex,
        end: Self::Vertex,
        options: CountOptions,
    ) -> Result<C, GraphError<Self::Vertex>>
    where
        C: Num + CheckedAdd + Clone + Debug + Send + Sync;

    fn count_paths<C>(
        &self,
        start: Self::Vertex,
        end: Self::Vertex,
    ) -> Result<C, GraphError<Self::Vertex>>
    where
        C: Num + CheckedAdd + Clone + Debug,
    {
        self.count_paths_with(start, end, CountOptions::default())
    }

    /// Number of paths from the lowest to the highest vertex.
    fn paths_to_end<C>(&self) -> Result<C, GraphError<Self::Vertex>>
    where
        C: Num + CheckedAdd + Clone + Debug,
    {
        self.paths_to_end_with(CountOptions::default())
    }

    fn paths_to_end_with<C>(&self, options: CountOptions) -> Result<C, GraphError<Self::Vertex>>
    where
        C: Num + CheckedAdd + Clone + Debug,
    {
        let (start, end) = endpoints(self)?;
        self.count_paths_with(start, end, options)
    }
}

impl<G> PathCount for G
where
    G: DirectedGraph,
{
    fn count_paths_with<C>(
        &self,
        start: G::Vertex,
        end: G::Vertex,
        options: CountOptions,
    ) -> Result<C, GraphError<G::Vertex>>
    where
        C: Num + CheckedAdd + Clone + Debug,
    {
        check_endpoints(self, start, end)?;

        let order = match options.order {
            VertexOrder::Ascending => self.ascending_order(options.validate)?,
            VertexOrder::Topological => self.topological_order()?,
        };
        let dense = DenseGraph::new(self, &order, start, end)?;

        debug!(
            "Counting paths {start} -> {end} over {} vertices, {} edges ({:?})",
            dense.csr.node_count(),
            dense.csr.edge_count(),
            options
        );

        // Edges point to higher indices, nothing before `start` is reachable
        // from it.
        let mut paths = vec![C::zero(); dense.csr.node_count()];
        for i in (dense.start..order.len()).rev() {
            let count = vertex_paths(&dense.csr, &paths, i, dense.end, options.sink_policy)
                .ok_or(GraphError::CountOverflow { vertex: order[i] })?;
            trace!("paths[{}] = {:?}", order[i], count);
            paths[i] = count;
        }

        Ok(paths.swap_remove(dense.start))
    }

    fn par_count_paths_with<C>(
        &self,
        start: G::Vertex,
        end: G::Vertex,
        options: CountOptions,
    ) -> Result<C, GraphError<G::Vertex>>
    where
        C: Num + CheckedAdd + Clone + Debug + Send + Sync,
    {
        check_endpoints(self, start, end)?;

        if options.validate && options.order == VertexOrder::Ascending {
            self.ascending_order(true)?;
        }

        let levels = self.antichains()?;
        // Highest level first, so every edge points to a higher index and
        // `levels[0]` fills the tail of the table.
        let order: Vec<G::Vertex> = levels.iter().rev().flatten().copied().collect();
        let dense = DenseGraph::new(self, &order, start, end)?;

        debug!(
            "Counting paths {start} -> {end} over {} antichains ({} vertices)",
            levels.len(),
            order.len()
        );

        let mut paths = vec![C::zero(); dense.csr.node_count()];
        let mut upper = order.len();
        for level in levels.iter() {
            let lower = upper - level.len();

            let counts: Vec<C> = (lower..upper)
                .into_par_iter()
                .map(|i| {
                    vertex_paths(&dense.csr, &paths, i, dense.end, options.sink_policy)
                        .ok_or(GraphError::CountOverflow { vertex: order[i] })
                })
                .collect::<Result<Vec<C>, GraphError<G::Vertex>>>()?;

            for (slot, count) in paths[lower..upper].iter_mut().zip(counts) {
                *slot = count;
            }
            upper = lower;
        }

        Ok(paths.swap_remove(dense.start))
    }
}

/// Number of paths from the lowest to the highest vertex of `graph`.
pub fn paths_to_end<V: Vertex>(graph: &Graph<V>) -> Result<BigUint, GraphError<V>> {
    graph.paths_to_end()
}

/// `graph` relabelled to positions in a topological order.
struct DenseGraph {
    csr: Csr,
    start: usize,
    end: usize,
}

impl DenseGraph {
    fn new<G: DirectedGraph>(
        graph: &G,
        order: &[G::Vertex],
        start: G::Vertex,
        end: G::Vertex,
    ) -> Result<Self, GraphError<G::Vertex>> {
        let position = |vertex: G::Vertex| {
            order
                .iter()
                .position(|v| *v == vertex)
                .ok_or(GraphError::VertexNotFound(vertex))
        };

        Ok(Self {
            start: position(start)?,
            end: position(end)?,
            csr: Csr::from_order(graph, order),
        })
    }
}

/// `None` if the sum overflows `C`.
fn vertex_paths<C: Num + CheckedAdd + Clone>(
    csr: &Csr,
    paths: &[C],
    i: usize,
    end: usize,
    sink_policy: SinkPolicy,
) -> Option<C> {
    if i == end {
        return Some(C::one());
    }

    if csr.degree(i) == 0 {
        return match sink_policy {
            SinkPolicy::EndOnly => Some(C::zero()),
            SinkPolicy::AnySink => Some(C::one()),
        };
    }

    csr.targets(i)
        .iter()
        .try_fold(C::zero(), |sum, target| sum.checked_add(&paths[*target]))
}

fn check_endpoints<G: DirectedGraph>(
    graph: &G,
    start: G::Vertex,
    end: G::Vertex,
) -> Result<(), GraphError<G::Vertex>> {
    if graph.vertex_count() == 0 {
        return Err(GraphError::EmptyGraph);
    }

    for vertex in [start, end] {
        if !graph.contains(vertex) {
            return Err(GraphError::VertexNotFound(vertex));
        }
    }

    Ok(())
}

fn endpoints<G: DirectedGraph + ?Sized>(
    graph: &G,
) -> Result<(G::Vertex, G::Vertex), GraphError<G::Vertex>> {
    match (graph.min_vertex(), graph.max_vertex()) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(GraphError::EmptyGraph),
    }
}
