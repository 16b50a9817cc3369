//! Isolation demo
//!
//! Plays one game between two configured search agents and prints every
//! position.

use clap::Parser;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use isolation::rules::check_winner;
use isolation::{
    Board, BoardError, Clock, Deadline, GameState, Heuristic, Player, SearchAgent, SearchConfig,
    SearchMethod,
};

#[derive(Debug, Parser)]
#[command(name = "isolation", about = "Play one game of Isolation between two search agents")]
struct Args {
    #[arg(long, default_value_t = 7)]
    width: u8,

    #[arg(long, default_value_t = 7)]
    height: u8,

    /// Number of random blocked cells before the first move
    #[arg(long, default_value_t = 0)]
    obstacles: usize,

    /// Seed for obstacle placement and both agents
    #[arg(long, default_value_t = 16)]
    seed: u64,

    /// Time per move in milliseconds
    #[arg(long, default_value_t = 150)]
    time_limit_ms: u64,

    /// Agents stop searching when this many milliseconds remain
    #[arg(long, default_value_t = 10.0)]
    threshold_ms: f64,

    /// Player 1 search method: minimax | alphabeta
    #[arg(long, default_value = "alphabeta")]
    p1_method: SearchMethod,

    /// Player 1 heuristic: my-moves | their-moves | moves-diff | blanks-diff-theirs | custom
    #[arg(long, default_value = "custom")]
    p1_heuristic: Heuristic,

    /// Player 1 depth when iterative deepening is off
    #[arg(long, default_value_t = 3)]
    p1_depth: u32,

    /// Player 1 searches once at --p1-depth instead of deepening
    #[arg(long)]
    p1_fixed: bool,

    #[arg(long, default_value = "minimax")]
    p2_method: SearchMethod,

    #[arg(long, default_value = "custom")]
    p2_heuristic: Heuristic,

    #[arg(long, default_value_t = 3)]
    p2_depth: u32,

    #[arg(long)]
    p2_fixed: bool,
}

fn build_agent(
    args: &Args,
    method: SearchMethod,
    heuristic: Heuristic,
    depth: u32,
    fixed: bool,
    seed: u64,
) -> Result<SearchAgent<Heuristic>, Box<dyn std::error::Error>> {
    heuristic.validate()?;
    let config = SearchConfig::default()
        .with_method(method)
        .with_depth(depth)
        .with_iterative(!fixed)
        .with_threshold(args.threshold_ms)
        .with_seed(seed);
    Ok(SearchAgent::new(config, heuristic)?)
}

fn place_obstacles(board: &mut Board, count: usize, seed: u64) -> Result<(), BoardError> {
    let blanks = board.get_blank_spaces();
    if count > blanks.len() {
        return Err(BoardError::TooManyObstacles {
            requested: count,
            available: blanks.len(),
        });
    }
    let mut rng = Pcg64::seed_from_u64(seed);
    for pos in blanks.into_iter().choose_multiple(&mut rng, count) {
        board.block(pos)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut board = Board::new(args.width, args.height)?;
    place_obstacles(&mut board, args.obstacles, args.seed)?;

    let mut one = build_agent(
        &args,
        args.p1_method,
        args.p1_heuristic,
        args.p1_depth,
        args.p1_fixed,
        args.seed,
    )?;
    let mut two = build_agent(
        &args,
        args.p2_method,
        args.p2_heuristic,
        args.p2_depth,
        args.p2_fixed,
        args.seed.wrapping_add(1),
    )?;

    info!(
        width = args.width,
        height = args.height,
        obstacles = args.obstacles,
        p1 = %format!("{} / {}", args.p1_method, args.p1_heuristic),
        p2 = %format!("{} / {}", args.p2_method, args.p2_heuristic),
        "starting game"
    );
    println!("{board}");

    let winner = loop {
        if let Some(winner) = check_winner(&board) {
            break winner;
        }

        let active = board.active_player();
        let legal = board.get_legal_moves(active);
        let agent = match active {
            Player::One => &mut one,
            Player::Two => &mut two,
        };

        let deadline = Deadline::from_millis(args.time_limit_ms);
        let result = agent.get_move_with_stats(&board, &legal, &deadline);
        if deadline.remaining_ms() < 0.0 {
            warn!(player = %active, over_ms = -deadline.remaining_ms(), "move exceeded time limit");
        }

        let Some(mv) = result.best_move else {
            break active.opponent();
        };
        info!(
            turn = board.move_count() + 1,
            player = %active,
            mv = %mv,
            depth = result.depth,
            nodes = result.nodes,
            time_ms = result.time_ms,
            source = ?result.source,
            "move"
        );
        board.apply_move(mv);
        println!("{board}");
    };

    println!("Winner: {winner} after {} moves", board.move_count());
    Ok(())
}
