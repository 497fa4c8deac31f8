use alloc::collections::VecDeque;
use alloc::vec::Vec;

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::{VisitMap, Visitable};

use crate::algo::residual::ResidualNetwork;
use crate::algo::FlowPath;
use crate::capacity::Capacity;

/// A source-to-sink path through the residual network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<C> {
    nodes: Vec<NodeIndex>,
    edges: Vec<EdgeIndex>,
    bottleneck: C,
}

impl<C: Capacity> AugmentingPath<C> {
    /// Residual edges of the path, from source to sink.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    pub fn bottleneck(&self) -> C {
        self.bottleneck
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<C: Capacity> FlowPath for AugmentingPath<C> {
    type Node = NodeIndex;
    type Flow = C;
    type Iter = Vec<NodeIndex>;

    fn nodes(&self) -> Self::Iter {
        self.nodes.clone()
    }

    fn flow(&self) -> Self::Flow {
        self.bottleneck
    }
}

/// Finds a shortest path of positive residual capacity from `source` to `sink` with a
/// breadth-first search.
///
/// Outgoing edges are expanded in ascending order of their head's name. A node reached again
/// from another node of the same depth before it is expanded takes that node as its parent, so
/// among equally short paths the one through the last expanded predecessor wins. The search
/// stops when the sink is dequeued. Returns `None` when the sink is not reachable.
pub fn find_augmenting_path<C: Capacity>(
    residual: &ResidualNetwork<C>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<AugmentingPath<C>> {
    let network = residual.network();
    // node -> (parent, edge taken from the parent); lives for this search only
    let mut parents: Vec<Option<(NodeIndex, EdgeIndex)>> = Vec::new();
    parents.resize(network.node_count(), None);
    let mut depth: Vec<Option<usize>> = Vec::new();
    depth.resize(network.node_count(), None);

    let mut expanded = network.graph().visit_map();
    *depth.get_mut(source.index())? = Some(0);
    let mut queue = VecDeque::from([source]);

    while let Some(node) = queue.pop_front() {
        expanded.visit(node);
        if node == sink {
            return reconstruct(residual, &parents, source, sink);
        }

        let next = depth.get(node.index()).copied().flatten()? + 1;
        for &edge in residual.sorted_outgoing(node) {
            let Some((_, head)) = network.endpoints(edge) else {
                continue;
            };
            if residual.capacity(edge) <= C::zero() || expanded.is_visited(&head) {
                continue;
            }
            match depth[head.index()] {
                None => {
                    depth[head.index()] = Some(next);
                    parents[head.index()] = Some((node, edge));
                    queue.push_back(head);
                }
                Some(d) if d == next => parents[head.index()] = Some((node, edge)),
                Some(_) => {}
            }
        }
    }

    None
}

fn reconstruct<C: Capacity>(
    residual: &ResidualNetwork<C>,
    parents: &[Option<(NodeIndex, EdgeIndex)>],
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<AugmentingPath<C>> {
    let mut nodes = Vec::from([sink]);
    let mut edges = Vec::new();

    let mut current = sink;
    while current != source {
        let (parent, edge) = parents.get(current.index()).copied().flatten()?;
        edges.push(edge);
        nodes.push(parent);
        current = parent;
    }
    nodes.reverse();
    edges.reverse();

    // the bottleneck is fixed before any edge of the path is touched
    let bottleneck = edges.iter().map(|&e| residual.capacity(e)).min()?;

    Some(AugmentingPath {
        nodes,
        edges,
        bottleneck,
    })
}
