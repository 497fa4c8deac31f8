use petgraph::graph::NodeIndex;

use crate::algo::min_cut::MinCut;
use crate::algo::residual::ResidualNetwork;
use crate::capacity::Capacity;
use crate::history::GraphHistory;
use crate::network::Network;

/// The result of a max-flow run.
#[derive(Clone, Debug)]
pub struct Outcome<C> {
    pub(crate) source: NodeIndex,
    pub(crate) sink: NodeIndex,
    pub(crate) max_flow: C,
    pub(crate) min_cut: MinCut<C>,
    pub(crate) flow_network: Network<C>,
    pub(crate) residual_network: ResidualNetwork<C>,
    pub(crate) iterations: usize,
    pub(crate) history: GraphHistory<C>,
}

impl<C: Capacity> Outcome<C> {
    pub fn max_flow(&self) -> C {
        self.max_flow
    }

    pub fn min_cut(&self) -> &MinCut<C> {
        &self.min_cut
    }

    pub fn min_cut_value(&self) -> C {
        self.min_cut.value()
    }

    /// The flow network with the final flow on every edge.
    pub fn flow_network(&self) -> &Network<C> {
        &self.flow_network
    }

    pub fn residual_network(&self) -> &ResidualNetwork<C> {
        &self.residual_network
    }

    /// Number of augmenting paths that were pushed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn history(&self) -> &GraphHistory<C> {
        &self.history
    }

    pub fn into_history(self) -> GraphHistory<C> {
        self.history
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn sink(&self) -> NodeIndex {
        self.sink
    }
}
