use crate::algo::path::AugmentingPath;
use crate::algo::residual::{Arc, ResidualNetwork};
use crate::capacity::Capacity;
use crate::network::Network;

/// Pushes the bottleneck of `path` through the network.
///
/// Each residual edge on the path loses the bottleneck and its partner gains it. The flow of
/// the matching original edge grows when the path runs along it and shrinks when the path
/// cancels flow through its reverse edge, so that for every original edge the forward
/// residual capacity plus the flow stays equal to the capacity.
pub fn augment<C: Capacity>(
    flow: &mut Network<C>,
    residual: &mut ResidualNetwork<C>,
    path: &AugmentingPath<C>,
) {
    let amount = path.bottleneck();

    for &edge in path.edges() {
        match residual.arc(edge) {
            Some(Arc::Forward(original)) => flow.edge_mut(original).flow += amount,
            Some(Arc::Reverse(original)) => flow.edge_mut(original).flow -= amount,
            None => {}
        }

        residual.edge_mut(edge).capacity -= amount;
        if let Some(partner) = residual.partner(edge) {
            residual.edge_mut(partner).capacity += amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use petgraph::graph::EdgeIndex;

    use super::*;
    use crate::algo::path::find_augmenting_path;

    #[test]
    fn test_augment_keeps_residual_in_step_with_flow() {
        let mut flow = Network::from_edges([("s", "a", 4), ("a", "t", 3)]).unwrap();
        let mut residual = ResidualNetwork::build(&flow).unwrap();
        let (s, t) = (flow.find("s").unwrap(), flow.find("t").unwrap());

        let path = find_augmenting_path(&residual, s, t).unwrap();
        assert_eq!(path.bottleneck(), 3);
        augment(&mut flow, &mut residual, &path);

        for link in residual.links() {
            let edge = flow.edge(link.original).unwrap();
            assert_eq!(residual.capacity(link.forward) + edge.flow(), edge.capacity());
            assert_eq!(residual.capacity(link.reverse), edge.flow());
            assert_eq!(edge.flow(), 3);
        }
        assert!(find_augmenting_path(&residual, s, t).is_none());
    }

    #[test]
    fn test_reverse_edge_cancels_flow() {
        // s-x-b-t is found first; the second path s-c-b-x-d-e-t undoes the flow on x->b
        let mut flow = Network::from_edges([
            ("s", "x", 1),
            ("x", "b", 1),
            ("b", "t", 1),
            ("s", "c", 1),
            ("c", "b", 1),
            ("x", "d", 1),
            ("d", "e", 1),
            ("e", "t", 1),
        ])
        .unwrap();
        let mut residual = ResidualNetwork::build(&flow).unwrap();
        let (s, t) = (flow.find("s").unwrap(), flow.find("t").unwrap());

        let mut total = 0;
        let mut lengths = Vec::new();
        while let Some(path) = find_augmenting_path(&residual, s, t) {
            total += path.bottleneck();
            lengths.push(path.len());
            augment(&mut flow, &mut residual, &path);
        }

        assert_eq!(total, 2);
        assert_eq!(lengths, [3, 6]);
        assert_eq!(flow.edge(EdgeIndex::new(1)).unwrap().flow(), 0);
        for link in residual.links() {
            let edge = flow.edge(link.original).unwrap();
            assert!(edge.flow() >= 0 && edge.flow() <= edge.capacity());
            assert_eq!(residual.capacity(link.forward) + edge.flow(), edge.capacity());
            assert_eq!(residual.capacity(link.reverse), edge.flow());
        }
    }
}
