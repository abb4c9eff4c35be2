use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use wayfind;

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct GraphLoadError(PathBuf, #[source] wayfind::records::LoadError);

#[derive(Parser)]
struct Cli {
    /// The path to the graph JSON document
    graph_file: PathBuf,

    /// Identifier of the start node
    start: String,

    /// Identifier of the goal node
    goal: String,

    /// Cost dimension to optimize: distance, time or fuel
    #[arg(default_value_t = wayfind::Metric::Distance)]
    metric: wayfind::Metric,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let g = load_graph(&cli.graph_file)?;

    let route = wayfind::find_route(
        &g,
        &cli.start,
        &cli.goal,
        cli.metric,
        wayfind::DEFAULT_STEP_LIMIT,
    )?;

    let result = serde_json::json!({
        "path": route.path,
        "distance": route.totals.distance,
        "time": route.totals.time,
        "fuel": route.totals.fuel,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn load_graph<P: AsRef<Path>>(path: P) -> Result<wayfind::Graph, GraphLoadError> {
    let mut g = wayfind::Graph::new();
    match wayfind::records::add_records_from_file(&mut g, &wayfind::CAR_PROFILE, path.as_ref()) {
        Ok(()) => Ok(g),
        Err(e) => Err(GraphLoadError(PathBuf::from(path.as_ref()), e)),
    }
}
