use alloc::collections::BTreeMap;
use alloc::string::String;

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Direction, Graph};

use crate::capacity::Capacity;
use crate::edge::Edge;
use crate::error::Error;
use crate::input::CapacitatedEdge;
use crate::node::{normalize, Node};

pub type NetworkGraph<C> = Graph<Node, Edge<C>>;

/// A capacitated directed multigraph.
///
/// Nodes and edges live in a `petgraph` arena and are identified by their indices, which
/// stay stable for the lifetime of the network since nothing is ever removed. Cloning a
/// network therefore preserves every index.
#[derive(Clone, Debug)]
pub struct Network<C> {
    graph: NetworkGraph<C>,
    names: BTreeMap<Node, NodeIndex>,
}

impl<C: Capacity> Default for Network<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Capacity> Network<C> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            names: BTreeMap::new(),
        }
    }

    /// Builds a network from a list of edges, creating each named node once.
    pub fn from_edges<I>(edges: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: CapacitatedEdge<Capacity = C>,
    {
        edges.into_iter().try_fold(Self::new(), |mut acc, e| {
            let tail = acc.add_node(e.tail())?;
            let head = acc.add_node(e.head())?;
            acc.add_edge(tail, head, e.capacity())?;
            Ok(acc)
        })
    }

    /// Returns the node called `name`, creating it if needed.
    pub fn add_node(&mut self, name: &str) -> Result<NodeIndex, Error> {
        let node = Node::new(normalize(name));
        if node.name().is_empty() {
            return Err(Error::EmptyNodeName);
        }
        if let Some(&index) = self.names.get(&node) {
            return Ok(index);
        }

        let index = self.graph.add_node(node.clone());
        self.names.insert(node, index);
        Ok(index)
    }

    pub fn add_edge(
        &mut self,
        tail: NodeIndex,
        head: NodeIndex,
        capacity: C,
    ) -> Result<EdgeIndex, Error> {
        for n in [tail, head] {
            if self.graph.node_weight(n).is_none() {
                return Err(Error::MalformedGraph(n.index()));
            }
        }
        if tail == head {
            Err(Error::SelfLoop)
        } else if capacity <= C::zero() {
            Err(Error::InvalidCapacity)
        } else {
            Ok(self.insert_edge(tail, head, Edge::new(capacity)))
        }
    }

    /// Adds an edge without validating it; used for synthetic residual edges.
    pub(crate) fn insert_edge(
        &mut self,
        tail: NodeIndex,
        head: NodeIndex,
        edge: Edge<C>,
    ) -> EdgeIndex {
        self.graph.add_edge(tail, head, edge)
    }

    pub(crate) fn edge_mut(&mut self, index: EdgeIndex) -> &mut Edge<C> {
        &mut self.graph[index]
    }

    /// Looks up a node by its exact stored name.
    ///
    /// Stored names are lower-cased by `add_node`, so a node added as `"S"` is found by `"s"`
    /// only.
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.names.get(&Node::new(String::from(name))).copied()
    }

    /// Like `find`, but fails with `NodeNotFound` carrying the name as given.
    pub fn require(&self, name: &str) -> Result<NodeIndex, Error> {
        self.find(name)
            .ok_or_else(|| Error::NodeNotFound(String::from(name)))
    }

    pub fn graph(&self) -> &NetworkGraph<C> {
        &self.graph
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.graph.node_weight(index)
    }

    pub fn name(&self, index: NodeIndex) -> Option<&str> {
        self.node(index).map(Node::name)
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge<C>> {
        self.graph.edge_weight(index)
    }

    pub fn endpoints(&self, index: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(index)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
        self.graph.node_indices().map(move |n| (n, &self.graph[n]))
    }

    /// All edges as `(index, tail, head, weight)`, in index order.
    pub fn edges(
        &self,
    ) -> impl Iterator<Item = (EdgeIndex, NodeIndex, NodeIndex, &Edge<C>)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.id(), e.source(), e.target(), e.weight()))
    }

    /// Outgoing edges of `node` as `(index, head, weight)`.
    pub fn outgoing(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, NodeIndex, &Edge<C>)> + '_ {
        self.graph
            .edges(node)
            .map(|e| (e.id(), e.target(), e.weight()))
    }

    /// Sum of the flow on the outgoing edges of `node`.
    pub fn outflow(&self, node: NodeIndex) -> Result<C, Error> {
        self.outgoing(node).try_fold(C::zero(), |acc, (_, _, e)| {
            acc.checked_add(&e.flow).ok_or(Error::ArithmeticOverflow)
        })
    }

    pub fn inflow(&self, node: NodeIndex) -> Result<C, Error> {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .try_fold(C::zero(), |acc, e| {
                acc.checked_add(&e.weight().flow)
                    .ok_or(Error::ArithmeticOverflow)
            })
    }
}
