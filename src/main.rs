use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use chess_core::agent::{AiPlayer, HumanPlayer, Player};
use chess_core::config::GameConfig;
use chess_core::game_repr::{Color, DrawReason, GameResult, Position};
use chess_core::{Difficulty, Game};

#[derive(Parser, Debug)]
#[command(name = "chess_core", version, about = "Play chess in the terminal against a person or the computer")]
struct Args {
    /// Who plays
    #[arg(long, value_enum, default_value_t = Mode::HumanVsAi)]
    mode: Mode,

    /// Side the human plays in human-vs-ai mode
    #[arg(long, value_enum, default_value_t = Side::White)]
    color: Side,

    /// Strength of the computer: easy, medium or hard
    #[arg(long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Strength of the black computer in ai-vs-ai mode (defaults to --difficulty)
    #[arg(long)]
    black_difficulty: Option<Difficulty>,

    /// Search time per move in milliseconds (overrides the difficulty default)
    #[arg(long)]
    time_ms: Option<u64>,

    /// Maximum search depth
    #[arg(long)]
    max_depth: Option<u8>,

    /// Starting position (defaults to the standard one)
    #[arg(long)]
    fen: Option<String>,

    /// Print a perft divide to this depth and exit
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let mut config = match self.mode {
            Mode::HumanVsHuman => GameConfig::human_vs_human(),
            Mode::HumanVsAi => GameConfig::human_vs_ai(self.color.into(), self.difficulty),
            Mode::AiVsAi => GameConfig::ai_vs_ai(self.difficulty, self.black_difficulty.unwrap_or(self.difficulty)),
        };
        if let Some(ms) = self.time_ms {
            config = config.with_time_budget(Duration::from_millis(ms));
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        config
    }
}

/// Builds the players and the seat each side uses. Both human sides share
/// one player since there is only one stdin to lock.
fn make_players(config: &GameConfig) -> (Vec<Box<dyn Player>>, [usize; 2]) {
    let mut players: Vec<Box<dyn Player>> = Vec::new();
    let mut human = None;
    let mut seats = [0; 2];
    for (seat, color) in seats.iter_mut().zip([Color::White, Color::Black]) {
        *seat = match config.search_config(color) {
            Some(search) => {
                players.push(Box::new(AiPlayer::with_config(search)));
                players.len() - 1
            }
            None => *human.get_or_insert_with(|| {
                players.push(Box::new(HumanPlayer::new(io::stdin().lock(), io::stdout(), "Human")));
                players.len() - 1
            }),
        };
    }
    (players, seats)
}

fn run_perft(fen: Option<&str>, depth: u32) -> anyhow::Result<()> {
    let pos = match fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::new(),
    };
    let start = Instant::now();
    let mut total = 0;
    for (mv, nodes) in pos.divide(depth) {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    let elapsed = start.elapsed();
    println!();
    println!("Nodes searched: {total}");
    info!("perft {} took {:?}", depth, elapsed);
    Ok(())
}

fn describe(result: GameResult) -> String {
    match result {
        GameResult::Checkmate { winner } => format!("Checkmate, {winner:?} wins"),
        GameResult::Stalemate => "Stalemate, draw".to_string(),
        GameResult::Draw(DrawReason::FiftyMove) => "Draw by the fifty-move rule".to_string(),
        GameResult::Draw(DrawReason::InsufficientMaterial) => "Draw by insufficient material".to_string(),
        GameResult::Draw(DrawReason::Repetition) => "Draw by threefold repetition".to_string(),
        GameResult::Ongoing => "Game in progress".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(depth) = args.perft {
        return run_perft(args.fen.as_deref(), depth);
    }

    let mut game = match args.fen.as_deref() {
        Some(fen) => Game::from_fen(fen).context("could not load the starting position")?,
        None => Game::new(),
    };
    let config = args.game_config();
    info!("starting {:?} game", config.mode);
    let (mut players, seats) = make_players(&config);
    let seat = |color: Color| match color {
        Color::White => seats[0],
        Color::Black => seats[1],
    };

    loop {
        println!("\n{game}\n");

        let result = game.result();
        if result.is_over() {
            println!("{}", describe(result));
            for player in players.iter_mut() {
                player.game_ended(result);
            }
            break;
        }

        let side = game.position().side_to_move();
        let mover = seat(side);
        let Some(mv) = players[mover].get_move(game.position(), game.history_keys())? else {
            println!("{} resigns, {:?} wins", players[mover].name(), side.opposite());
            break;
        };
        game.play(mv)?;
        println!("{} plays {}", players[mover].name(), mv);
        let other = seat(side.opposite());
        if other != mover {
            players[other].opponent_moved(mv);
        }
    }

    println!("Moves: {}", game.move_list().join(" "));
    Ok(())
}
