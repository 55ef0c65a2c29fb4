use clap::{Parser, Subcommand};
use serde::Serialize;

use portage::{
    error::Result,
    planner::{
        bfs::BreadthFirstPlanner,
        path::SolutionPath,
        stats::{render_stats_table, SearchStats},
    },
    puzzles::{
        hanoi::{Peg, RecursivePlanner},
        jugs::WaterJugs,
        river::{RiverCrossing, RiverKind},
    },
};

/// Solve a transport or transfer puzzle and print the plan.
#[derive(Parser)]
#[command(name = "portage")]
struct Cli {
    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the plan as JSON instead of a step listing.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// The classic wolf/goat/cabbage river crossing.
    Classic,
    /// A missionaries-and-cannibals river crossing.
    River {
        #[arg(long, default_value_t = 3)]
        missionaries: u8,
        #[arg(long, default_value_t = 3)]
        cannibals: u8,
        #[arg(long, default_value_t = 2)]
        boat_capacity: u8,
    },
    /// Water-jug measuring: reach `target` units in some jug.
    Jugs {
        /// Jug capacities, comma separated (e.g. 3,5).
        #[arg(long, value_delimiter = ',')]
        capacities: Vec<u32>,
        #[arg(long)]
        target: u32,
    },
    /// Tower of Hanoi, left peg to right peg.
    Hanoi {
        #[arg(long, default_value_t = 3)]
        disks: u8,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Classic => {
            let instance = RiverCrossing::new(RiverKind::Classic)?;
            let (path, stats) = BreadthFirstPlanner::new().solve(&instance)?;
            report(&cli, path, Some(stats));
        }
        Command::River {
            missionaries,
            cannibals,
            boat_capacity,
        } => {
            let instance = RiverCrossing::new(RiverKind::Counted {
                missionaries: *missionaries,
                cannibals: *cannibals,
                boat_capacity: *boat_capacity,
            })?;
            let (path, stats) = BreadthFirstPlanner::new().solve(&instance)?;
            report(&cli, path, Some(stats));
        }
        Command::Jugs { capacities, target } => {
            let instance = WaterJugs::new(capacities.clone(), *target)?;
            if !instance.feasible() {
                report::<(), ()>(&cli, None, None);
                return Ok(());
            }
            let (path, stats) = BreadthFirstPlanner::new().solve(&instance)?;
            report(&cli, path, Some(stats));
        }
        Command::Hanoi { disks } => {
            let path = RecursivePlanner::new().solve(*disks, Peg::Left, Peg::Right, Peg::Middle)?;
            report(&cli, Some(path), None);
        }
    }

    Ok(())
}

fn report<S, A>(cli: &Cli, path: Option<SolutionPath<S, A>>, stats: Option<SearchStats>)
where
    S: Serialize + std::fmt::Debug,
    A: Serialize + std::fmt::Debug,
{
    match path {
        None => println!("no solution"),
        Some(path) if cli.json => {
            let json = serde_json::to_string_pretty(&path).expect("plan serializes");
            println!("{json}");
        }
        Some(path) => {
            println!("plan with {} steps:", path.num_actions());
            for (i, step) in path.steps().iter().enumerate() {
                match &step.action {
                    None => println!("  start: {:?}", step.state),
                    Some(action) => println!("  {i}. {:?} -> {:?}", action, step.state),
                }
            }
        }
    }

    if cli.stats {
        if let Some(stats) = stats {
            println!("{}", render_stats_table(&stats));
        }
    }
}
