//! Command-line route query.
//!
//! Loads a building, finds the shortest route from one cell to the nearest
//! exit and prints it.
//!
//! Usage:
//!   nirgama-route --start 0,4,7
//!   nirgama-route --config configs/config.yaml --start 1,0,0 --show
//!   nirgama-route --grid 0=maps/ground_floor_grid.json --grid 1=maps/first_floor_grid.json \
//!       --start 0,2,3 --json

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde::Serialize;

use nirgama::topology::TopologyStats;
use nirgama::{FloorId, GridStore, NavSession, NirgamaConfig, PathResult, Position};

/// Nearest-exit route query
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = nirgama::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Floor snapshot as FLOOR=PATH (repeatable, replaces configured floors)
    #[arg(short, long, value_parser = parse_grid_arg)]
    grid: Vec<(FloorId, PathBuf)>,

    /// Start cell as FLOOR,ROW,COL
    #[arg(short, long)]
    start: Position,

    /// Expansion cap (0 = unlimited), overrides the config file
    #[arg(short, long)]
    max_expansions: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print each visited floor with the route drawn as '*'
    #[arg(long)]
    show: bool,
}

/// JSON output
#[derive(Serialize)]
struct Report<'a> {
    start: Position,
    topology: TopologyStats,
    #[serde(flatten)]
    result: &'a PathResult,
}

fn parse_grid_arg(s: &str) -> Result<(FloorId, PathBuf), String> {
    let (floor, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FLOOR=PATH, got '{}'", s))?;
    let floor = floor
        .trim()
        .parse()
        .map_err(|e| format!("invalid floor index '{}': {}", floor, e))?;
    Ok((floor, PathBuf::from(path.trim())))
}

/// Build the session from --grid arguments, or from the config file.
fn load_session(args: &Args) -> Result<(NavSession, NirgamaConfig), String> {
    let config = if args.config.exists() {
        NirgamaConfig::load(&args.config).map_err(|e| e.to_string())?
    } else {
        info!(
            "Config file {} not found, using defaults",
            args.config.display()
        );
        NirgamaConfig::default()
    };

    if args.grid.is_empty() {
        let base_dir = args.config.parent().unwrap_or(Path::new(""));
        let session = NavSession::from_config(&config, base_dir).map_err(|e| e.to_string())?;
        return Ok((session, config));
    }

    let mut store = GridStore::new();
    for (floor, path) in &args.grid {
        store.load_file(*floor, path).map_err(|e| e.to_string())?;
    }
    Ok((NavSession::new(store), config))
}

fn print_text(session: &NavSession, start: Position, result: &PathResult, show: bool) {
    if !result.success {
        println!(
            "No path from {} ({:?}, {} nodes expanded)",
            start,
            result.failure_reason,
            result.nodes_expanded
        );
        return;
    }

    if let Some(goal) = result.goal {
        println!(
            "Route {} -> {}: {} steps, {} stair transitions, {} nodes expanded",
            start,
            goal,
            result.cost,
            result.portal_transitions(),
            result.nodes_expanded
        );
    }
    for (i, step) in result.path.iter().enumerate() {
        println!("  {:>4}  {}", i, step);
    }

    if show {
        for floor_id in result.floors_visited() {
            if let Some(floor) = session.store().floor(floor_id) {
                println!("\nFloor {}:", floor_id);
                print!("{}", floor.render_ascii(&result.path));
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let (session, config) = match load_session(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load building: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut planner_config = config.to_planner_config();
    if let Some(max) = args.max_expansions {
        planner_config.max_expansions = (max > 0).then_some(max);
    }

    let result = match session.planner(planner_config).find_path(args.start) {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        let report = Report {
            start: args.start,
            topology: session.topology().stats(),
            result: &result,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to encode result: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_text(&session, args.start, &result, args.show);
    }

    ExitCode::SUCCESS
}
