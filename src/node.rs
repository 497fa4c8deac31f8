use alloc::string::String;
use core::fmt;

/// A named vertex of a flow network.
///
/// Names are lower-cased when the node is created, so `S` and `s` denote the same node.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Node {
    name: String,
}

impl Node {
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Normalizes a node name the way the network stores it.
pub(crate) fn normalize(name: &str) -> String {
    name.to_lowercase()
}
