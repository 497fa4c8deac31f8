use alloc::format;
use alloc::string::String;
use core::marker::PhantomData;

use itertools::Itertools;
use petgraph::graph::NodeIndex;

use crate::algo::augment::augment;
use crate::algo::min_cut::MinCut;
use crate::algo::path::{find_augmenting_path, AugmentingPath};
use crate::algo::residual::ResidualNetwork;
use crate::algo::{FlowPath, MaxFlowMinCut};
use crate::capacity::Capacity;
use crate::error::Error;
use crate::history::{GraphHistory, GraphHistoryStep, StepKind};
use crate::network::Network;
use crate::outcome::Outcome;

/// Ford-Fulkerson with breadth-first path search.
#[derive(Clone, Debug, Default)]
pub struct EdmondsKarp<C>(PhantomData<C>);

impl<C> EdmondsKarp<C> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<C: Capacity> MaxFlowMinCut for EdmondsKarp<C> {
    type Network = Network<C>;
    type Outcome = Outcome<C>;
    type Error = Error;

    fn run(
        &mut self,
        network: &Self::Network,
        source: &str,
        sink: &str,
    ) -> Result<Self::Outcome, Self::Error> {
        State::new(network, source, sink)?.run()
    }

    fn check(&self, outcome: &Self::Outcome) -> Result<(), Self::Error> {
        let flow = outcome.flow_network();
        let residual = outcome.residual_network();

        // capacity bounds, and residual capacities matching the flow of every edge
        for (index, _, _, edge) in flow.edges() {
            if edge.flow() < C::zero() || edge.flow() > edge.capacity() {
                return Err(Error::Inconsistent(format!(
                    "flow {edge} out of bounds on edge {}",
                    index.index()
                )));
            }
            let link = residual.link(index).ok_or_else(|| {
                Error::Inconsistent(format!("edge {} has no residual edges", index.index()))
            })?;
            if residual.capacity(link.forward) + edge.flow() != edge.capacity()
                || residual.capacity(link.reverse) != edge.flow()
            {
                return Err(Error::Inconsistent(format!(
                    "residual capacities of edge {} disagree with its flow {edge}",
                    index.index()
                )));
            }
        }

        // flow conservation, the terminals being off by exactly the max flow
        for (index, node) in flow.nodes() {
            let (inflow, outflow) = (flow.inflow(index)?, flow.outflow(index)?);
            let balanced = if index == outcome.source() {
                inflow.checked_add(&outcome.max_flow()) == Some(outflow)
            } else if index == outcome.sink() {
                outflow.checked_add(&outcome.max_flow()) == Some(inflow)
            } else {
                inflow == outflow
            };
            if !balanced {
                return Err(Error::Inconsistent(format!(
                    "flow is not conserved at node `{node}` (in {inflow}, out {outflow})"
                )));
            }
        }

        // max-flow == min-cut
        if outcome.max_flow() != outcome.min_cut_value() {
            return Err(Error::Inconsistent(format!(
                "max flow {} differs from min cut {}",
                outcome.max_flow(),
                outcome.min_cut_value()
            )));
        }

        let saturated = flow.edges().filter(|(_, _, _, e)| e.is_saturated()).count();
        let used = flow.edges().filter(|(_, _, _, e)| e.is_used()).count();

        log::debug!("     num of nodes: {}", flow.node_count());
        log::debug!("     num of edges: {}", flow.edge_count());
        log::debug!("       used edges: {used}");
        log::debug!("  saturated edges: {saturated}");
        log::debug!("        cut edges: {}", outcome.min_cut().edges().len());
        log::debug!("         max flow: {}", outcome.max_flow());
        log::debug!("          min cut: {}", outcome.min_cut_value());

        Ok(())
    }
}

enum Phase<C> {
    Searching,
    Augmenting(AugmentingPath<C>),
    Terminated,
}

/// The live networks of one run. Nothing here is shared with the caller or other runs.
struct State<C> {
    flow: Network<C>,
    residual: ResidualNetwork<C>,
    source: NodeIndex,
    sink: NodeIndex,
    max_flow: C,
    iterations: usize,
    history: GraphHistory<C>,
}

impl<C: Capacity> State<C> {
    fn new(network: &Network<C>, source: &str, sink: &str) -> Result<Self, Error> {
        let source = network.require(source)?;
        let sink = network.require(sink)?;
        if source == sink {
            return Err(Error::IdenticalTerminals);
        }

        let flow = network.clone();
        let residual = ResidualNetwork::build(&flow)?;

        Ok(Self {
            flow,
            residual,
            source,
            sink,
            max_flow: C::zero(),
            iterations: 0,
            history: GraphHistory::new(),
        })
    }

    fn snapshot(&self, kind: StepKind) -> GraphHistoryStep<C> {
        GraphHistoryStep::new(kind, &self.flow, Some(self.residual.network()))
    }

    fn step(&mut self, phase: Phase<C>) -> Result<Phase<C>, Error> {
        match phase {
            Phase::Searching => {
                match find_augmenting_path(&self.residual, self.source, self.sink) {
                    Some(path) => {
                        log::trace!(
                            "augmenting path {} (bottleneck {})",
                            self.describe(&path),
                            path.flow()
                        );
                        let step = self
                            .snapshot(StepKind::PathFound)
                            .with_marked_path(path.edges());
                        self.history.push(step);
                        Ok(Phase::Augmenting(path))
                    }
                    None => Ok(Phase::Terminated),
                }
            }
            Phase::Augmenting(path) => {
                augment(&mut self.flow, &mut self.residual, &path);
                let step = self.snapshot(StepKind::Augmented);
                self.history.push(step);

                self.max_flow = self
                    .max_flow
                    .checked_add(&path.bottleneck())
                    .ok_or(Error::ArithmeticOverflow)?;
                self.iterations += 1;
                Ok(Phase::Searching)
            }
            Phase::Terminated => Ok(Phase::Terminated),
        }
    }

    fn run(mut self) -> Result<Outcome<C>, Error> {
        let step = self.snapshot(StepKind::Initial);
        self.history.push(step);

        let mut phase = Phase::Searching;
        while !matches!(phase, Phase::Terminated) {
            phase = self.step(phase)?;
        }

        let min_cut = MinCut::extract(&self.flow, &self.residual, self.source)?;
        self.history.push(
            GraphHistoryStep::new(StepKind::Terminated, &self.flow, None)
                .with_min_cut(min_cut.clone()),
        );

        log::info!("----------------------------------");
        log::info!("     Max flow = {}", self.max_flow);
        log::info!("      Min cut = {}", min_cut.value());
        log::info!("   Iterations = {}", self.iterations);
        log::info!("History steps = {}", self.history.len());
        log::debug!(
            "min cut nodes: {}",
            min_cut
                .source_side()
                .iter()
                .filter_map(|&n| self.flow.name(n))
                .join(", ")
        );
        for &edge in min_cut.edges() {
            if let (Some((tail, head)), Some(weight)) =
                (self.flow.endpoints(edge), self.flow.edge(edge))
            {
                log::debug!(
                    "min cut edge: {} --{}--> {}",
                    self.flow.name(tail).unwrap_or_default(),
                    weight.capacity(),
                    self.flow.name(head).unwrap_or_default()
                );
            }
        }

        Ok(Outcome {
            source: self.source,
            sink: self.sink,
            max_flow: self.max_flow,
            min_cut,
            flow_network: self.flow,
            residual_network: self.residual,
            iterations: self.iterations,
            history: self.history,
        })
    }

    fn describe(&self, path: &AugmentingPath<C>) -> String {
        path.nodes()
            .into_iter()
            .filter_map(|n| self.flow.name(n))
            .join(" -> ")
    }
}
