use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Node `{0}` is not part of the network
    NodeNotFound(String),
    /// Edge references node index {0} which is not part of the network
    MalformedGraph(usize),
    /// Invalid edge capacity, expected positive value
    InvalidCapacity,
    /// Invalid edge where tail and head are the same node
    SelfLoop,
    /// Invalid node name, expected a non-empty name
    EmptyNodeName,
    /// Source and sink must be distinct nodes
    IdenticalTerminals,
    /// Arithmetic overflow while accumulating flow
    ArithmeticOverflow,
    /// Inconsistent flow network: {0}
    Inconsistent(String),
}
