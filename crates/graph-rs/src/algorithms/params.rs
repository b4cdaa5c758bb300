/// Order in which the path counter visits the vertices.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum VertexOrder {
    /// Vertex value order. Correct only if every edge points to a higher
    /// vertex.
    #[default]
    Ascending,
    /// Explicit topological order, works for any vertex labels.
    Topological,
}

/// Paths counted from a vertex without outgoing edges.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SinkPolicy {
    /// Only the end vertex ends a path, other sinks are dead ends.
    #[default]
    EndOnly,
    /// Every sink counts as one path, as if it were the end vertex.
    AnySink,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CountOptions {
    pub order: VertexOrder,
    pub sink_policy: SinkPolicy,
    /// Reject edges that contradict [`VertexOrder::Ascending`].
    pub validate: bool,
}

impl CountOptions {
    pub fn with_order(mut self, order: VertexOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_sink_policy(mut self, sink_policy: SinkPolicy) -> Self {
        self.sink_policy = sink_policy;
        self
    }

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            order: VertexOrder::default(),
            sink_policy: SinkPolicy::default(),
            validate: true,
        }
    }
}
