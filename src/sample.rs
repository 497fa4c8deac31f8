use crate::error::Error;
use crate::network::Network;

/// The textbook network used as the built-in example; its maximum `s`-`t` flow is 28.
pub const SAMPLE_EDGES: [(&str, &str, i32); 15] = [
    ("s", "2", 10),
    ("s", "3", 5),
    ("s", "4", 15),
    ("2", "3", 4),
    ("2", "5", 9),
    ("2", "6", 15),
    ("3", "6", 8),
    ("3", "4", 4),
    ("4", "7", 30),
    ("5", "6", 15),
    ("5", "t", 10),
    ("6", "7", 15),
    ("6", "t", 10),
    ("7", "3", 6),
    ("7", "t", 10),
];

pub const SAMPLE_SOURCE: &str = "s";
pub const SAMPLE_SINK: &str = "t";

pub fn sample_network() -> Result<Network<i32>, Error> {
    Network::from_edges(SAMPLE_EDGES)
}
