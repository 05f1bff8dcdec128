//! Layer-by-layer Rubik's cube solver.
//!
//! Reads a cube state as JSON, solves it with the beginner's method, and
//! prints the move sequence. Also generates scrambled states to feed it.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::{info, LevelFilter};

use layerwise::grid::CubeState;
use layerwise::moves::{parse_algorithm, random_scramble, render};
use layerwise::{persistence, solve_state};

/// Solves 3x3x3 Rubik's cubes layer by layer.
#[derive(Parser)]
#[command(name = "layerwise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a cube state stored as JSON.
    Solve {
        /// Cube state file.
        state: PathBuf,
        /// Also save the solution as JSON here, with a text report beside it.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the solution as JSON instead of plain notation.
        #[arg(long)]
        json: bool,
    },
    /// Apply a move sequence to the solved cube.
    Scramble {
        /// Moves in standard notation, e.g. "R U R' U'".
        moves: String,
        /// Save the resulting state here and print its net instead.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a seeded random scramble.
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 25)]
        length: usize,
        /// Save the resulting state here and print its net instead.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a stored cube state as an unfolded net.
    Show {
        state: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let result = match cli.command {
        Command::Solve {
            state,
            output,
            json,
        } => run_solve(&state, output.as_deref(), json),
        Command::Scramble { moves, output } => run_scramble(&moves, output.as_deref()),
        Command::Random {
            seed,
            length,
            output,
        } => run_random(seed, length, output.as_deref()),
        Command::Show { state } => run_show(&state),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Solves a stored state and prints the moves.
fn run_solve(path: &Path, output: Option<&Path>, json: bool) -> Result<(), Box<dyn Error>> {
    let state = persistence::load_state(path)?;
    let solution = solve_state(&state)?;
    info!("{} moves", solution.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{}", solution.sequence());
    }

    if let Some(output) = output {
        persistence::save_solution(output, &state, &solution)?;
    }
    Ok(())
}

/// Scrambles a solved cube with the given moves.
fn run_scramble(moves: &str, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let moves = parse_algorithm(moves)?;
    let mut state = CubeState::solved();
    state.apply_all(&moves);
    emit_state(&state, output)
}

/// Scrambles a solved cube with seeded random moves.
fn run_random(seed: u64, length: usize, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let scramble = random_scramble(&mut rng, length);
    info!("scramble: {}", render(&scramble));

    let mut state = CubeState::solved();
    state.apply_all(&scramble);
    emit_state(&state, output)
}

fn run_show(path: &Path) -> Result<(), Box<dyn Error>> {
    let state = persistence::load_state(path)?;
    print!("{}", state.format_net());
    Ok(())
}

fn emit_state(state: &CubeState, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            persistence::save_state(path, state)?;
            print!("{}", state.format_net());
        }
        None => println!("{}", persistence::state_to_json(state)?),
    }
    Ok(())
}
