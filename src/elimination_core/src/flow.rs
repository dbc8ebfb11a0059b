use std::collections::VecDeque;

use crate::constants::SOLVER_ITERATION_SLACK;
use crate::error::{EliminationError, Result};

/// Capacity, flow value and vertex ids are plain integers.
pub type Capacity = i64;

#[derive(Clone, Copy, Debug)]
struct FlowEdge {
    to: usize,
    capacity: Capacity,
    flow: Capacity,
}

impl FlowEdge {
    fn residual(&self) -> Capacity {
        self.capacity - self.flow
    }
}

/// Directed capacitated graph stored as a flat arena.
///
/// Every edge `e` added through [`FlowNetwork::add_edge`] is paired with a
/// zero-capacity reverse edge at `e ^ 1`, so residual updates never search.
#[derive(Clone, Debug)]
pub struct FlowNetwork {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<FlowEdge>,
}

impl FlowNetwork {
    pub fn new(vertices: usize) -> Self {
        FlowNetwork {
            adjacency: vec![Vec::new(); vertices],
            edges: Vec::new(),
        }
    }

    /// Create a network with room reserved for `edges` forward edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        FlowNetwork {
            adjacency: vec![Vec::new(); vertices],
            edges: Vec::with_capacity(2 * edges),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of forward edges (reverse twins not counted).
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Add `from -> to` with the given capacity; returns the edge id.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Capacity) -> usize {
        debug_assert!(capacity >= 0, "negative capacity on {} -> {}", from, to);
        let id = self.edges.len();
        self.edges.push(FlowEdge { to, capacity, flow: 0 });
        self.edges.push(FlowEdge {
            to: from,
            capacity: 0,
            flow: 0,
        });
        self.adjacency[from].push(id);
        self.adjacency[to].push(id + 1);
        id
    }

    /// Current flow on a forward edge.
    pub fn flow(&self, edge: usize) -> Capacity {
        self.edges[edge].flow
    }

    /// Sum of capacities leaving `vertex`.
    pub fn outgoing_capacity(&self, vertex: usize) -> Capacity {
        self.adjacency[vertex]
            .iter()
            .map(|&e| self.edges[e].capacity)
            .sum()
    }

    /// Breadth-first search over residual edges.
    ///
    /// Returns, per vertex, the edge used to reach it (`None` if unreached)
    /// and the reachability marks.
    fn residual_search(&self, source: usize) -> (Vec<Option<usize>>, Vec<bool>) {
        let n = self.vertex_count();
        let mut via = vec![None; n];
        let mut seen = vec![false; n];
        let mut queue = VecDeque::new();

        seen[source] = true;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            for &e in &self.adjacency[v] {
                let edge = &self.edges[e];
                if edge.residual() > 0 && !seen[edge.to] {
                    seen[edge.to] = true;
                    via[edge.to] = Some(e);
                    queue.push_back(edge.to);
                }
            }
        }

        (via, seen)
    }

    /// Run Edmonds-Karp from `source` to `sink`.
    ///
    /// The network keeps the final flow, so edge flows can be inspected
    /// afterwards. Fails with `SolverInvariant` if the number of augmenting
    /// paths exceeds what the source capacity allows.
    pub fn max_flow(&mut self, source: usize, sink: usize) -> Result<MinCut> {
        let bound = self.outgoing_capacity(source).max(0) as u64 + SOLVER_ITERATION_SLACK;
        self.max_flow_within(source, sink, bound)
    }

    /// Edmonds-Karp with an explicit cap on augmenting paths.
    fn max_flow_within(&mut self, source: usize, sink: usize, bound: u64) -> Result<MinCut> {
        if source == sink {
            return Err(EliminationError::SolverInvariant(format!(
                "source and sink are both vertex {}",
                source
            )));
        }

        let mut value: Capacity = 0;
        let mut augmentations: u64 = 0;

        loop {
            let (via, seen) = self.residual_search(source);
            if !seen[sink] {
                log::trace!(
                    "max flow {} after {} augmenting paths ({} vertices, {} edges)",
                    value,
                    augmentations,
                    self.vertex_count(),
                    self.edge_count()
                );
                return Ok(MinCut {
                    value,
                    source_side: seen,
                });
            }

            augmentations += 1;
            if augmentations > bound {
                return Err(EliminationError::SolverInvariant(format!(
                    "no convergence after {} augmenting paths",
                    bound
                )));
            }

            // bottleneck along the path
            let mut delta = Capacity::MAX;
            let mut v = sink;
            while let Some(e) = via[v] {
                delta = delta.min(self.edges[e].residual());
                v = self.edges[e ^ 1].to;
            }

            let mut v = sink;
            while let Some(e) = via[v] {
                self.edges[e].flow += delta;
                self.edges[e ^ 1].flow -= delta;
                v = self.edges[e ^ 1].to;
            }

            value += delta;
        }
    }
}

/// Result of a max-flow run: the flow value and the source side of a
/// minimum cut.
#[derive(Clone, Debug)]
pub struct MinCut {
    value: Capacity,
    source_side: Vec<bool>,
}

impl MinCut {
    pub fn value(&self) -> Capacity {
        self.value
    }

    /// Is `vertex` reachable from the source in the final residual graph?
    pub fn in_cut(&self, vertex: usize) -> bool {
        self.source_side.get(vertex).copied().unwrap_or(false)
    }
}
