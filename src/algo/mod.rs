use core::fmt::Debug;

pub mod augment;
pub mod edmonds_karp;
pub mod min_cut;
pub mod path;
pub mod residual;

pub trait FlowPath {
    type Node;
    type Flow;
    type Iter: IntoIterator<Item = Self::Node>;

    fn nodes(&self) -> Self::Iter;
    fn flow(&self) -> Self::Flow;
}

/// The maximum flow / minimum cut algorithm.
pub trait MaxFlowMinCut {
    type Network;
    type Outcome;
    type Error: Debug;

    /// Run the algorithm from the node named `source` to the node named `sink` and return the
    /// flow and cut values along with the recorded history of graph states.
    fn run(
        &mut self,
        network: &Self::Network,
        source: &str,
        sink: &str,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Verify the flow conservation and max-flow/min-cut invariants of an outcome.
    fn check(&self, outcome: &Self::Outcome) -> Result<(), Self::Error>;
}
