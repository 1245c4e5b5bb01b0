use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, play_random_game, Cell, GameStatus};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let (mut x_wins, mut o_wins, mut draws, mut invalid) = (0usize, 0usize, 0usize, 0usize);

    for _ in 0..games {
        let board = play_random_game(&mut rng);
        if !board.is_valid_board() {
            invalid += 1;
        }
        match board.status() {
            GameStatus::Won(Cell::X) => x_wins += 1,
            GameStatus::Won(_) => o_wins += 1,
            GameStatus::Draw => draws += 1,
            GameStatus::InProgress => {
                return Err(anyhow::anyhow!("random game stopped early: {:?}", board));
            }
        }
    }

    let result = json!({
        "games": games,
        "x_wins": x_wins,
        "o_wins": o_wins,
        "draws": draws,
        "invalid": invalid,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
