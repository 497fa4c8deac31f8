use alloc::string::String;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::node::normalize;

/// A directed, capacitated edge description used to build a network.
pub trait CapacitatedEdge {
    type Capacity;

    fn tail(&self) -> &str;
    fn head(&self) -> &str;
    fn capacity(&self) -> Self::Capacity;
}

impl<'a, C: Copy> CapacitatedEdge for (&'a str, &'a str, C) {
    type Capacity = C;

    fn tail(&self) -> &str {
        self.0
    }

    fn head(&self) -> &str {
        self.1
    }

    fn capacity(&self) -> Self::Capacity {
        self.2
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(
    try_from = "RawEdge<C>",
    bound(deserialize = "C: Zero + PartialOrd + Deserialize<'de>")
)]
pub struct SimpleEdge<C> {
    from: String,
    to: String,
    capacity: C,
}

impl<C> SimpleEdge<C>
where
    C: Zero + PartialOrd,
{
    /// Creates an edge with lower-cased endpoint names.
    pub fn new(from: &str, to: &str, capacity: C) -> Result<Self, Error> {
        let (from, to) = (normalize(from), normalize(to));
        if from.is_empty() || to.is_empty() {
            Err(Error::EmptyNodeName)
        } else if from == to {
            Err(Error::SelfLoop)
        } else if capacity <= C::zero() {
            Err(Error::InvalidCapacity)
        } else {
            Ok(Self { from, to, capacity })
        }
    }
}

impl<C: Copy> CapacitatedEdge for SimpleEdge<C> {
    type Capacity = C;

    fn tail(&self) -> &str {
        &self.from
    }

    fn head(&self) -> &str {
        &self.to
    }

    fn capacity(&self) -> Self::Capacity {
        self.capacity
    }
}

/// An unvalidated `from,to,capacity` record, e.g. a CSV row.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RawEdge<C> {
    pub from: String,
    pub to: String,
    pub capacity: C,
}

impl<C> TryFrom<RawEdge<C>> for SimpleEdge<C>
where
    C: Zero + PartialOrd,
{
    type Error = Error;

    fn try_from(e: RawEdge<C>) -> Result<Self, Self::Error> {
        Self::new(&e.from, &e.to, e.capacity)
    }
}

impl<C> From<SimpleEdge<C>> for RawEdge<C> {
    fn from(e: SimpleEdge<C>) -> Self {
        Self {
            from: e.from,
            to: e.to,
            capacity: e.capacity,
        }
    }
}
