#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
mod capacity;
mod edge;
mod error;
mod history;
mod input;
mod network;
mod node;
mod outcome;
mod sample;

pub use petgraph::graph::{EdgeIndex, NodeIndex};

pub use crate::algo::edmonds_karp::EdmondsKarp;
pub use crate::algo::min_cut::MinCut;
pub use crate::algo::path::AugmentingPath;
pub use crate::algo::residual::{Arc, EdgeLink, ResidualNetwork};
pub use crate::algo::{FlowPath, MaxFlowMinCut};
pub use crate::capacity::Capacity;
pub use crate::edge::Edge;
pub use crate::error::Error;
pub use crate::history::{GraphHistory, GraphHistoryStep, StepKind};
pub use crate::input::{CapacitatedEdge, RawEdge, SimpleEdge};
pub use crate::network::{Network, NetworkGraph};
pub use crate::node::Node;
pub use crate::outcome::Outcome;
pub use crate::sample::{sample_network, SAMPLE_EDGES, SAMPLE_SINK, SAMPLE_SOURCE};

/// Computes the maximum flow and minimum cut from `source` to `sink` with Edmonds-Karp.
///
/// `network` is copied, never modified. Names are matched exactly against the stored, lower-cased
/// node names; fails with `NodeNotFound` when either name is not a node of the network.
pub fn run<C: Capacity>(
    network: &Network<C>,
    source: &str,
    sink: &str,
) -> Result<Outcome<C>, Error> {
    EdmondsKarp::new().run(network, source, sink)
}
