use alloc::vec::Vec;

use itertools::Itertools;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::capacity::Capacity;
use crate::edge::Edge;
use crate::error::Error;
use crate::network::Network;

/// Where an original edge of the flow network lives in the residual network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeLink {
    pub original: EdgeIndex,
    pub forward: EdgeIndex,
    pub reverse: EdgeIndex,
}

/// The role of a residual edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arc {
    /// Copy of an original edge; carries the remaining capacity.
    Forward(EdgeIndex),
    /// Synthetic edge pointing back along an original edge; carries its current flow.
    Reverse(EdgeIndex),
}

impl Arc {
    pub fn original(&self) -> EdgeIndex {
        match *self {
            Arc::Forward(e) | Arc::Reverse(e) => e,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResidualNetwork<C> {
    network: Network<C>,
    links: Vec<EdgeLink>,
    arcs: Vec<Arc>,
    // outgoing residual edges per node, ordered by head name
    adjacency: Vec<Vec<EdgeIndex>>,
}

impl<C: Capacity> ResidualNetwork<C> {
    /// Copies `flow` and adds a zero-capacity reverse edge for every edge of it.
    pub fn build(flow: &Network<C>) -> Result<Self, Error> {
        let mut network = flow.clone();
        let original_count = flow.edge_count();
        let mut links = Vec::with_capacity(original_count);
        let mut arcs = Vec::with_capacity(2 * original_count);

        for (original, tail, head, _) in flow.edges() {
            for n in [tail, head] {
                if network.node(n).is_none() {
                    return Err(Error::MalformedGraph(n.index()));
                }
            }
            let reverse = network.insert_edge(head, tail, Edge::new(C::zero()));
            links.push(EdgeLink {
                original,
                forward: original,
                reverse,
            });
            arcs.push(Arc::Forward(original));
        }
        arcs.extend(links.iter().map(|link| Arc::Reverse(link.original)));

        let adjacency = network
            .nodes()
            .map(|(n, _)| {
                network
                    .outgoing(n)
                    .sorted_by(|(e1, h1, _), (e2, h2, _)| {
                        network
                            .name(*h1)
                            .cmp(&network.name(*h2))
                            .then(e1.cmp(e2))
                    })
                    .map(|(e, _, _)| e)
                    .collect()
            })
            .collect();

        log::trace!(
            "residual network: {} nodes, {} original + {} reverse edges",
            network.node_count(),
            original_count,
            links.len()
        );

        Ok(Self {
            network,
            links,
            arcs,
            adjacency,
        })
    }

    pub fn network(&self) -> &Network<C> {
        &self.network
    }

    /// The residual edges of original edge `original`.
    pub fn link(&self, original: EdgeIndex) -> Option<EdgeLink> {
        self.links.get(original.index()).copied()
    }

    pub fn links(&self) -> &[EdgeLink] {
        &self.links
    }

    pub fn arc(&self, edge: EdgeIndex) -> Option<Arc> {
        self.arcs.get(edge.index()).copied()
    }

    /// The residual edge running the other way along the same original edge.
    pub fn partner(&self, edge: EdgeIndex) -> Option<EdgeIndex> {
        self.arc(edge)
            .and_then(|arc| self.link(arc.original()))
            .map(|link| {
                if link.forward == edge {
                    link.reverse
                } else {
                    link.forward
                }
            })
    }

    /// Outgoing residual edges of `node` in ascending head-name order.
    pub fn sorted_outgoing(&self, node: NodeIndex) -> &[EdgeIndex] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Remaining capacity of a residual edge, zero for unknown edges.
    pub fn capacity(&self, edge: EdgeIndex) -> C {
        self.network
            .edge(edge)
            .map(Edge::capacity)
            .unwrap_or_else(C::zero)
    }

    pub(crate) fn edge_mut(&mut self, edge: EdgeIndex) -> &mut Edge<C> {
        self.network.edge_mut(edge)
    }
}
