#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use csv::Writer;
use flowcut::{
    run, EdmondsKarp, MaxFlowMinCut, Network, Outcome, SimpleEdge, SAMPLE_EDGES, SAMPLE_SINK,
    SAMPLE_SOURCE,
};
use log::LevelFilter;
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Compute the maximum flow and minimum cut of a capacitated network
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file with `from,to,capacity` rows; the built-in sample network is used if omitted
    input: Option<PathBuf>,

    /// Name of the source node
    #[arg(short, long, default_value = SAMPLE_SOURCE)]
    source: String,

    /// Name of the sink node
    #[arg(short = 't', long, default_value = SAMPLE_SINK)]
    sink: String,

    /// Write the flow of every edge to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every recorded step of the run
    #[arg(long)]
    history: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct FlowRecord<'a> {
    from: &'a str,
    to: &'a str,
    capacity: i64,
    flow: i64,
    min_cut: bool,
}

// Function to read the edge list from a CSV file
fn read_edges_csv(filepath: &Path) -> Result<Network<i64>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(filepath)?;
    let edges: Vec<SimpleEdge<i64>> = rdr.deserialize().collect::<Result<_, _>>()?;
    Ok(Network::from_edges(edges).map_err(|e| e.to_string())?)
}

// Function to write the per-edge flows
fn write_csv(outcome: &Outcome<i64>, filepath: &Path) -> Result<(), Box<dyn Error>> {
    let network = outcome.flow_network();
    let mut wtr = Writer::from_path(filepath)?;
    for (index, tail, head, edge) in network.edges() {
        wtr.serialize(FlowRecord {
            from: network.name(tail).unwrap_or_default(),
            to: network.name(head).unwrap_or_default(),
            capacity: edge.capacity(),
            flow: edge.flow(),
            min_cut: outcome.min_cut().contains_edge(index),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_history(outcome: &Outcome<i64>) {
    for (i, step) in outcome.history().iter().enumerate() {
        let network = step.flow_graph();
        let flows: Vec<String> = network
            .edges()
            .map(|(index, tail, head, edge)| {
                let marker = if step.is_min_cut_edge(index) { "*" } else { "" };
                format!(
                    "{}->{} {edge}{marker}",
                    network.name(tail).unwrap_or_default(),
                    network.name(head).unwrap_or_default()
                )
            })
            .collect();
        println!("{i:>3} {:<10} {}", format!("{:?}", step.kind()), flows.join("  "));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let network = match &cli.input {
        Some(path) => read_edges_csv(path)?,
        None => {
            log::info!("no input given, using the sample network");
            Network::from_edges(
                SAMPLE_EDGES
                    .iter()
                    .map(|&(from, to, capacity)| (from, to, i64::from(capacity))),
            )
            .map_err(|e| e.to_string())?
        }
    };

    let outcome = run(&network, &cli.source, &cli.sink).map_err(|e| e.to_string())?;
    EdmondsKarp::new()
        .check(&outcome)
        .map_err(|e| e.to_string())?;

    println!("max flow: {}", outcome.max_flow());
    println!("min cut:  {}", outcome.min_cut_value());
    println!("steps:    {}", outcome.history().len());

    if cli.history {
        print_history(&outcome);
    }

    if let Some(path) = &cli.output {
        write_csv(&outcome, path)?;
        log::info!("flows written to {}", path.display());
    }

    Ok(())
}
