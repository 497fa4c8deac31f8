use alloc::vec::Vec;
use core::ops::Index;
use core::slice;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::algo::min_cut::MinCut;
use crate::capacity::Capacity;
use crate::network::Network;

/// The event after which a history step was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepKind {
    /// Both networks before any flow was pushed.
    Initial,
    /// An augmenting path was found; it is available through `marked_path`.
    PathFound,
    /// The bottleneck of the last path was pushed.
    Augmented,
    /// No augmenting path is left; the step carries the minimum cut and no residual network.
    Terminated,
}

/// A frozen copy of the networks at one point of a run.
///
/// Steps own deep copies of both networks, so later changes to the live networks never show
/// up in a recorded step.
#[derive(Clone, Debug)]
pub struct GraphHistoryStep<C> {
    kind: StepKind,
    flow_graph: Network<C>,
    residual_graph: Option<Network<C>>,
    marked_path: Vec<EdgeIndex>,
    min_cut: Option<MinCut<C>>,
}

impl<C: Capacity> GraphHistoryStep<C> {
    pub(crate) fn new(
        kind: StepKind,
        flow_graph: &Network<C>,
        residual_graph: Option<&Network<C>>,
    ) -> Self {
        Self {
            kind,
            flow_graph: flow_graph.clone(),
            residual_graph: residual_graph.cloned(),
            marked_path: Vec::new(),
            min_cut: None,
        }
    }

    pub(crate) fn with_marked_path(mut self, edges: &[EdgeIndex]) -> Self {
        self.marked_path = edges.to_vec();
        self
    }

    pub(crate) fn with_min_cut(mut self, min_cut: MinCut<C>) -> Self {
        self.min_cut = Some(min_cut);
        self
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn flow_graph(&self) -> &Network<C> {
        &self.flow_graph
    }

    /// The residual network, absent for the terminal step.
    pub fn residual_graph(&self) -> Option<&Network<C>> {
        self.residual_graph.as_ref()
    }

    /// Residual edges of the path found in this step, empty unless the kind is `PathFound`.
    pub fn marked_path(&self) -> &[EdgeIndex] {
        &self.marked_path
    }

    pub fn is_path_marked(&self, residual_edge: EdgeIndex) -> bool {
        self.marked_path.contains(&residual_edge)
    }

    pub fn min_cut(&self) -> Option<&MinCut<C>> {
        self.min_cut.as_ref()
    }

    pub fn is_min_cut_edge(&self, edge: EdgeIndex) -> bool {
        self.min_cut
            .as_ref()
            .is_some_and(|cut| cut.contains_edge(edge))
    }

    pub fn is_min_cut_node(&self, node: NodeIndex) -> bool {
        self.min_cut
            .as_ref()
            .is_some_and(|cut| cut.contains_node(node))
    }
}

/// The ordered, append-only list of steps recorded during one run.
#[derive(Clone, Debug, Default)]
pub struct GraphHistory<C> {
    steps: Vec<GraphHistoryStep<C>>,
}

impl<C: Capacity> GraphHistory<C> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: GraphHistoryStep<C>) {
        log::trace!("history step {}: {:?}", self.steps.len(), step.kind());
        self.steps.push(step);
    }

    pub fn get(&self, index: usize) -> Option<&GraphHistoryStep<C>> {
        self.steps.get(index)
    }

    pub fn first_step(&self) -> Option<usize> {
        (!self.steps.is_empty()).then_some(0)
    }

    pub fn last_step(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    pub fn first(&self) -> Option<&GraphHistoryStep<C>> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&GraphHistoryStep<C>> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, GraphHistoryStep<C>> {
        self.steps.iter()
    }
}

impl<C> Index<usize> for GraphHistory<C> {
    type Output = GraphHistoryStep<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a, C> IntoIterator for &'a GraphHistory<C> {
    type Item = &'a GraphHistoryStep<C>;
    type IntoIter = slice::Iter<'a, GraphHistoryStep<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
