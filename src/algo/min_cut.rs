use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::{Bfs, EdgeFiltered};

use crate::algo::residual::ResidualNetwork;
use crate::capacity::Capacity;
use crate::error::Error;
use crate::network::Network;

/// A minimum s-t cut of a flow network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinCut<C> {
    source_side: BTreeSet<NodeIndex>,
    edges: Vec<EdgeIndex>,
    value: C,
}

impl<C: Capacity> MinCut<C> {
    /// Extracts the cut once no augmenting path is left.
    ///
    /// The source side consists of the nodes still reachable from `source` through residual
    /// edges of positive capacity. Cut edges are the flow network edges leaving that set, and
    /// the cut value is the sum of their original capacities.
    pub fn extract(
        flow: &Network<C>,
        residual: &ResidualNetwork<C>,
        source: NodeIndex,
    ) -> Result<Self, Error> {
        let open = EdgeFiltered::from_fn(residual.network().graph(), |edge| {
            edge.weight().capacity() > C::zero()
        });
        let mut bfs = Bfs::new(&open, source);
        let mut source_side = BTreeSet::new();
        while let Some(node) = bfs.next(&open) {
            source_side.insert(node);
        }

        let edges: BTreeSet<EdgeIndex> = source_side
            .iter()
            .flat_map(|&node| flow.outgoing(node))
            .filter(|(_, head, edge)| {
                !source_side.contains(head) && edge.capacity() > C::zero()
            })
            .map(|(index, _, _)| index)
            .collect();

        let value = edges.iter().try_fold(C::zero(), |acc, &e| {
            let capacity = flow.edge(e).map(|edge| edge.capacity()).unwrap_or_else(C::zero);
            acc.checked_add(&capacity).ok_or(Error::ArithmeticOverflow)
        })?;

        Ok(Self {
            source_side,
            edges: edges.into_iter().collect(),
            value,
        })
    }

    /// The nodes on the source side of the cut.
    pub fn source_side(&self) -> &BTreeSet<NodeIndex> {
        &self.source_side
    }

    /// The flow network edges crossing the cut, in index order.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    pub fn value(&self) -> C {
        self.value
    }

    pub fn contains_node(&self, node: NodeIndex) -> bool {
        self.source_side.contains(&node)
    }

    pub fn contains_edge(&self, edge: EdgeIndex) -> bool {
        self.edges.binary_search(&edge).is_ok()
    }
}
