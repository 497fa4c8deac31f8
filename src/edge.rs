use core::fmt;

use crate::capacity::Capacity;

/// The weight of a network edge.
///
/// In a flow network `capacity` is the original capacity and `flow` the flow delivered so
/// far. In a residual network `capacity` is the remaining residual capacity and `flow` is
/// always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<C> {
    pub(crate) capacity: C,
    pub(crate) flow: C,
}

impl<C: Capacity> Edge<C> {
    pub(crate) fn new(capacity: C) -> Self {
        Self {
            capacity,
            flow: C::zero(),
        }
    }

    pub fn capacity(&self) -> C {
        self.capacity
    }

    pub fn flow(&self) -> C {
        self.flow
    }

    /// Capacity left over once the current flow is subtracted.
    pub fn residual(&self) -> C {
        self.capacity - self.flow
    }

    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }

    pub fn is_used(&self) -> bool {
        self.flow > C::zero()
    }
}

/// Renders the `flow/capacity` label shown next to an edge.
impl<C: fmt::Display> fmt::Display for Edge<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.flow, self.capacity)
    }
}
