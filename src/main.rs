#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tictactoe::{init_logging, play_random_game, play_scripted_game, Board};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play one game with random moves for both players.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Generate randomized boards and report which are valid.
    Fuzz {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Play the given moves in order, alternating from X.
    Script {
        #[arg(value_parser = parse_coord, required = true, allow_hyphen_values = true, help = "Moves as ROW,COL (e.g., 1,1 0,2)")]
        moves: Vec<(isize, isize)>,
    },
}

#[cfg(feature = "std")]
fn parse_coord(s: &str) -> Result<(isize, isize), String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let r = r.trim().parse().map_err(|e| format!("bad row '{}': {}", r, e))?;
    let c = c.trim().parse().map_err(|e| format!("bad column '{}': {}", c, e))?;
    Ok((r, c))
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (output will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn print_summary(board: &Board) {
    println!("{}", board);
    match board.winning_player() {
        Some(player) => println!("Winner: {}", player),
        None => println!("Winner: none"),
    }
    println!("Valid: {}", board.is_valid_board());
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            let board = play_random_game(&mut rng);
            print_summary(&board);
        }
        Commands::Fuzz { seed, count } => {
            let mut rng = make_rng(seed);
            let mut valid = 0;
            for i in 0..count {
                let board = Board::randomized(&mut rng);
                println!("Board {}:", i + 1);
                print_summary(&board);
                if board.is_valid_board() {
                    valid += 1;
                }
            }
            println!("{} of {} boards valid", valid, count);
        }
        Commands::Script { moves } => {
            let board = play_scripted_game(&moves).map_err(|e| anyhow::anyhow!(e))?;
            print_summary(&board);
        }
    }
    Ok(())
}
