//! Rubik's Cube Solver
//!
//! Scrambles a cube, computes a layer by layer solution and replays it,
//! either once with the full move list or over many runs to gather path
//! length statistics. Set `RUST_LOG=debug` to follow the solver's decisions.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rustc_hash::FxHashMap;

use rubiks::{format_moves, parse_moves, Puzzle};

/// Width of a path length bucket in the stats histogram.
const BUCKET: usize = 20;

/// Shuffles and solves Rubik's Cubes.
#[derive(Parser)]
#[command(name = "rubiks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge length of the cube.
    #[arg(long, default_value_t = 3)]
    size: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Shuffle a cube, solve it and replay the solution.
    Solve {
        /// Number of random moves to scramble with.
        #[arg(long, default_value_t = 20)]
        shuffle: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Optimize the solving path.
        #[arg(long)]
        optimize: bool,
    },
    /// Apply moves such as `PITCH@1` or `DOUBLE_YAW@*` to a solved cube, then solve it.
    Apply {
        #[arg(required = true)]
        moves: Vec<String>,
        /// Optimize the solving path.
        #[arg(long)]
        optimize: bool,
    },
    /// Solve many shuffled cubes and print a histogram of path lengths.
    Stats {
        /// Number of cubes to solve.
        #[arg(long, default_value_t = 100)]
        runs: usize,
        /// Number of random moves to scramble each cube with.
        #[arg(long, default_value_t = 20)]
        shuffle: usize,
        /// Seed for reproducible scrambles.
        #[arg(long)]
        seed: Option<u64>,
        /// Optimize the solving paths.
        #[arg(long)]
        optimize: bool,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve {
            shuffle,
            seed,
            optimize,
        }) => run_solve(cli.size, shuffle, seed, optimize),
        Some(Command::Apply { moves, optimize }) => run_apply(cli.size, &moves, optimize),
        Some(Command::Stats {
            runs,
            shuffle,
            seed,
            optimize,
        }) => run_stats(cli.size, runs, shuffle, seed, optimize),
        // default: solve one cube with the default scramble
        None => run_solve(cli.size, 20, None, false),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn rng(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}

/// Scrambles, solves and replays a single cube.
fn run_solve(size: usize, shuffle: usize, seed: Option<u64>, optimize: bool) -> Result<(), String> {
    let mut puzzle = Puzzle::new(size);
    puzzle.set_optimizer(optimize);

    let scramble = puzzle.shuffle_with(&mut rng(seed), shuffle);
    println!("Scramble ({} moves): {}", scramble.len(), format_moves(&scramble));

    solve_and_replay(&mut puzzle)
}

/// Applies the given moves to a solved cube, then solves it.
fn run_apply(size: usize, moves: &[String], optimize: bool) -> Result<(), String> {
    let moves = parse_moves(&moves.join(" ")).map_err(|e| e.to_string())?;

    let mut puzzle = Puzzle::new(size);
    puzzle.set_optimizer(optimize);
    puzzle.apply_moves(moves.iter().copied());
    println!("Applied {} moves: {}", moves.len(), format_moves(&moves));

    solve_and_replay(&mut puzzle)
}

/// Solves `puzzle`, prints the path and replays it on the live cube.
fn solve_and_replay(puzzle: &mut Puzzle) -> Result<(), String> {
    puzzle.solve().map_err(|e| e.to_string())?;
    let path = puzzle
        .solving_path()
        .map(|path| path.remaining().to_vec())
        .unwrap_or_default();
    println!("Solution ({} moves): {}", path.len(), format_moves(&path));

    while puzzle.move_to_next_position() {}
    if puzzle.is_solved() {
        println!("Cube solved");
        Ok(())
    } else {
        Err("Cube is not solved after replaying the solution".to_string())
    }
}

/// Solves `runs` shuffled cubes and prints how long the paths were.
fn run_stats(
    size: usize,
    runs: usize,
    shuffle: usize,
    seed: Option<u64>,
    optimize: bool,
) -> Result<(), String> {
    let mut rng = rng(seed);
    let mut lengths = Vec::with_capacity(runs);
    let mut failures = 0;

    for _ in 0..runs {
        let mut puzzle = Puzzle::new(size);
        puzzle.set_optimizer(optimize);
        puzzle.shuffle_with(&mut rng, shuffle);

        match puzzle.solve() {
            Ok(length) => {
                while puzzle.move_to_next_position() {}
                if puzzle.is_solved() {
                    lengths.push(length);
                } else {
                    failures += 1;
                }
            }
            Err(_) => failures += 1,
        }
    }

    println!("{}", histogram(&lengths));
    println!("{} solved, {} failed", lengths.len(), failures);
    if failures > 0 {
        return Err(format!("{failures} of {runs} cubes were not solved"));
    }
    Ok(())
}

/// Formats path lengths as a text histogram with buckets of [`BUCKET`] moves.
fn histogram(lengths: &[usize]) -> String {
    if lengths.is_empty() {
        return "No paths".to_string();
    }

    let mut buckets: FxHashMap<usize, usize> = FxHashMap::default();
    for &length in lengths {
        *buckets.entry(length / BUCKET).or_default() += 1;
    }

    let mut keys: Vec<usize> = buckets.keys().copied().collect();
    keys.sort_unstable();

    let total: usize = lengths.iter().sum();
    let mut output = format!(
        "Path lengths: min {}, max {}, mean {:.1}\n",
        lengths.iter().min().copied().unwrap_or_default(),
        lengths.iter().max().copied().unwrap_or_default(),
        total as f64 / lengths.len() as f64
    );
    for key in keys {
        let count = buckets[&key];
        output.push_str(&format!(
            "{:>4}-{:<4} {:>5} {}\n",
            key * BUCKET,
            key * BUCKET + BUCKET - 1,
            count,
            "#".repeat(count)
        ));
    }
    output.pop();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_snapshot() {
        let lengths = [0, 12, 19, 20, 45, 47, 47, 130];
        insta::assert_snapshot!(histogram(&lengths), @r"
        Path lengths: min 0, max 130, mean 40.0
           0-19       3 ###
          20-39       1 #
          40-59       3 ###
         120-139      1 #
        ");
        assert_eq!(histogram(&[]), "No paths");
    }

    #[test]
    fn test_apply_then_solve() {
        let moves = vec!["PITCH@1".to_string(), "yaw@2,UNROLL@3".to_string()];
        assert_eq!(run_apply(3, &moves, false), Ok(()));
        assert_eq!(run_apply(3, &moves, true), Ok(()));
    }

    #[test]
    fn test_apply_rejects_bad_notation() {
        let moves = vec!["TWIST@1".to_string()];
        assert_eq!(run_apply(3, &moves, false), Err("unknown move `TWIST`".to_string()));
    }

    #[test]
    fn test_unsupported_size_is_reported() {
        assert_eq!(
            run_solve(4, 5, Some(1), false),
            Err("solving is only available for 3x3x3 cubes, got size 4".to_string())
        );
    }

    #[test]
    fn test_stats_run() {
        assert_eq!(run_stats(3, 10, 20, Some(42), true), Ok(()));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["rubiks", "stats"]).unwrap();
        assert_eq!(cli.size, 3);
        match cli.command {
            Some(Command::Stats {
                runs,
                shuffle,
                seed,
                optimize,
            }) => {
                assert_eq!((runs, shuffle, seed, optimize), (100, 20, None, false));
            }
            _ => panic!("expected the stats command"),
        }
        assert!(Cli::try_parse_from(["rubiks", "apply"]).is_err());
    }
}
