use flowcut::{
    run, sample_network, Capacity, EdgeIndex, EdmondsKarp, Error, MaxFlowMinCut, Network,
    SimpleEdge, StepKind, SAMPLE_EDGES, SAMPLE_SINK, SAMPLE_SOURCE,
};

fn cut_edge_names<C: Capacity>(
    network: &Network<C>,
    edges: &[EdgeIndex],
) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|&e| {
            let (tail, head) = network.endpoints(e).unwrap();
            (
                network.name(tail).unwrap().to_string(),
                network.name(head).unwrap().to_string(),
            )
        })
        .collect()
}

#[test]
fn test_diamond() {
    let network = Network::from_edges([
        ("s", "a", 10),
        ("s", "b", 10),
        ("a", "t", 10),
        ("b", "t", 10),
    ])
    .unwrap();

    let outcome = run(&network, "s", "t").unwrap();

    assert_eq!(outcome.max_flow(), 20);
    assert_eq!(outcome.min_cut_value(), 20);
    assert_eq!(outcome.iterations(), 2);
    assert_eq!(outcome.history().len(), 6);
}

#[test]
fn test_single_bottleneck() {
    let network = Network::from_edges([("s", "a", 5), ("a", "t", 100)]).unwrap();

    let outcome = run(&network, "s", "t").unwrap();

    assert_eq!(outcome.max_flow(), 5);
    assert_eq!(outcome.min_cut_value(), 5);
    assert_eq!(
        cut_edge_names(outcome.flow_network(), outcome.min_cut().edges()),
        [("s".to_string(), "a".to_string())]
    );
}

#[test]
fn test_no_path() {
    let mut network = Network::<i32>::new();
    network.add_node("s").unwrap();
    network.add_node("t").unwrap();

    let outcome = run(&network, "s", "t").unwrap();

    assert_eq!(outcome.max_flow(), 0);
    assert_eq!(outcome.min_cut_value(), 0);
    assert_eq!(outcome.iterations(), 0);
    assert_eq!(outcome.history().len(), 2);
    assert_eq!(outcome.history()[0].kind(), StepKind::Initial);
    assert_eq!(outcome.history()[1].kind(), StepKind::Terminated);
}

#[test]
fn test_no_path_between_disconnected_parts() {
    let network = Network::from_edges([("s", "a", 3), ("b", "t", 4)]).unwrap();

    let outcome = run(&network, "s", "t").unwrap();

    assert_eq!(outcome.max_flow(), 0);
    assert_eq!(outcome.min_cut_value(), 0);
    assert!(outcome.min_cut().edges().is_empty());
    assert_eq!(outcome.history().len(), 2);
}

#[test]
fn test_sample_network() {
    let network = sample_network().unwrap();

    let mut algo = EdmondsKarp::new();
    let outcome = algo.run(&network, SAMPLE_SOURCE, SAMPLE_SINK).unwrap();

    assert_eq!(outcome.max_flow(), 28);
    assert_eq!(outcome.min_cut_value(), 28);
    assert_eq!(outcome.history().len(), 2 + 2 * outcome.iterations());
    algo.check(&outcome).unwrap();
}

#[test]
fn test_sample_network_with_wide_capacities() {
    let edges: Vec<SimpleEdge<u64>> = SAMPLE_EDGES
        .iter()
        .map(|&(from, to, capacity)| SimpleEdge::new(from, to, u64::try_from(capacity).unwrap()))
        .collect::<Result<_, _>>()
        .unwrap();
    let network = Network::from_edges(edges).unwrap();

    let outcome = run(&network, "s", "t").unwrap();

    assert_eq!(outcome.max_flow(), 28u64);
}

#[test]
fn test_parallel_edges_add_up() {
    let network = Network::from_edges([("s", "t", 2), ("s", "t", 3), ("t", "s", 7)]).unwrap();

    let outcome = run(&network, "s", "t").unwrap();

    assert_eq!(outcome.max_flow(), 5);
    assert_eq!(outcome.min_cut().edges().len(), 2);
    EdmondsKarp::new().check(&outcome).unwrap();
}

#[test]
fn test_unknown_terminals() {
    let network = Network::from_edges([("s", "a", 1), ("a", "t", 1)]).unwrap();

    assert_eq!(
        run(&network, "x", "t").unwrap_err(),
        Error::NodeNotFound("x".to_string())
    );
    assert_eq!(
        run(&network, "s", "y").unwrap_err(),
        Error::NodeNotFound("y".to_string())
    );
}

#[test]
fn test_terminal_names_match_exactly() {
    let network = Network::from_edges([("s", "t", 3)]).unwrap();

    assert_eq!(
        run(&network, "S", "t").unwrap_err(),
        Error::NodeNotFound("S".to_string())
    );
    assert_eq!(
        run(&network, "s", "T").unwrap_err(),
        Error::NodeNotFound("T".to_string())
    );
    assert_eq!(run(&network, "s", "t").unwrap().max_flow(), 3);
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        Network::from_edges([("s", "a", 0)]).unwrap_err(),
        Error::InvalidCapacity
    );
    assert_eq!(
        Network::from_edges([("s", "a", -3)]).unwrap_err(),
        Error::InvalidCapacity
    );
    assert_eq!(
        Network::from_edges([("a", "A", 3)]).unwrap_err(),
        Error::SelfLoop
    );
    assert_eq!(
        Network::from_edges([("", "a", 3)]).unwrap_err(),
        Error::EmptyNodeName
    );
}

#[test]
fn test_total_flow_overflow_is_reported() {
    let network = Network::from_edges([
        ("s", "a", i32::MAX),
        ("s", "b", i32::MAX),
        ("a", "t", i32::MAX),
        ("b", "t", i32::MAX),
    ])
    .unwrap();

    assert_eq!(run(&network, "s", "t").unwrap_err(), Error::ArithmeticOverflow);
}

#[test]
fn test_input_is_not_modified() {
    let network = Network::from_edges([("s", "a", 4), ("a", "t", 4)]).unwrap();

    let outcome = run(&network, "s", "t").unwrap();

    assert_eq!(outcome.max_flow(), 4);
    assert_eq!(network.edge_count(), 2);
    assert!(network.edges().all(|(_, _, _, e)| e.flow() == 0));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::NodeNotFound("x".to_string()).to_string(),
        "Node `x` is not part of the network"
    );
    assert_eq!(
        Error::InvalidCapacity.to_string(),
        "Invalid edge capacity, expected positive value"
    );
}
