mod common;

use common::{branch, child, leaf, lost, unlimited, CountingEval, TreeState};
use isolation::{
    Board, Deadline, GameState, Heuristic, MoveOrdering, MoveSource, Player, Pos, SearchAgent,
    SearchConfig, SearchMethod,
};

fn agent(config: SearchConfig) -> SearchAgent<Heuristic> {
    SearchAgent::new(config, Heuristic::custom()).unwrap()
}

fn methods() -> [SearchConfig; 2] {
    [
        SearchConfig::default().with_method(SearchMethod::Minimax),
        SearchConfig::default()
            .with_method(SearchMethod::AlphaBeta)
            .with_ordering(MoveOrdering::Enumeration),
    ]
}

/// 3x3, obstacle at (0,2), One at (0,0), Two at (2,2); One to move.
fn small_board() -> Board {
    let mut board = Board::new(3, 3).unwrap();
    board.block(Pos::new(0, 2)).unwrap();
    board.apply_move(Pos::new(0, 0));
    board.apply_move(Pos::new(2, 2));
    board
}

/// 4 wide, 3 tall, One at (0,0), Two at (2,3); One to move.
fn wide_board() -> Board {
    let mut board = Board::new(4, 3).unwrap();
    board.apply_move(Pos::new(0, 0));
    board.apply_move(Pos::new(2, 3));
    board
}

/// One can end the game at once by jumping to (0,0).
fn winning_board() -> Board {
    let mut board = Board::new(3, 3).unwrap();
    board.block(Pos::new(0, 2)).unwrap();
    board.apply_move(Pos::new(1, 2));
    board.apply_move(Pos::new(2, 1));
    board
}

#[test]
fn empty_legal_moves_return_none() {
    let board = small_board();
    for config in methods() {
        let mut agent = agent(config);
        assert_eq!(agent.get_move(&board, &[], &unlimited()), None);
        let result = agent.get_move_with_stats(&board, &[], &unlimited());
        assert_eq!(result.source, MoveSource::NoLegalMoves);
        assert_eq!(result.depth, 0);
    }
}

#[test]
fn cancelled_search_falls_back_to_seeded_random_move() {
    let board = wide_board();
    let legal = board.get_legal_moves(Player::One);
    // Always below the 10 ms threshold
    let clock = || 2.5;

    for config in methods() {
        let mut first = agent(config);
        let mut second = agent(config);
        let a = first.get_move_with_stats(&board, &legal, &clock);
        let b = second.get_move_with_stats(&board, &legal, &clock);

        assert!(a.timed_out);
        assert_eq!(a.source, MoveSource::RandomFallback);
        assert_eq!(a.depth, 0);
        assert!(legal.contains(&a.best_move.unwrap()));
        assert_eq!(a.best_move, b.best_move);
    }
}

#[test]
fn fixed_depth_cancellation_also_falls_back() {
    let board = small_board();
    let legal = board.get_legal_moves(Player::One);
    let config = SearchConfig::default()
        .with_iterative(false)
        .with_depth(5)
        .with_threshold(50.0);
    let mut agent = agent(config);

    let result = agent.get_move_with_stats(&board, &legal, &|| 49.0);
    assert_eq!(result.source, MoveSource::RandomFallback);
    assert_eq!(result.score, None);
    assert!(legal.contains(&result.best_move.unwrap()));
}

#[test]
fn unlimited_deepening_matches_deepest_fixed_search() {
    for board in [small_board(), wide_board()] {
        let blanks = u32::try_from(board.get_blank_spaces().len()).unwrap();
        let legal = board.get_legal_moves(board.active_player());

        for config in methods() {
            let mut iterative = agent(config);
            let deepened = iterative.get_move_with_stats(&board, &legal, &unlimited());
            assert_eq!(deepened.depth, blanks);
            assert!(!deepened.timed_out);

            let mut fixed = agent(config.with_iterative(false).with_depth(blanks));
            let once = fixed.get_move_with_stats(&board, &legal, &unlimited());
            assert_eq!(once.depth, blanks);
            assert_eq!(deepened.score, once.score);
            assert_eq!(deepened.best_move, once.best_move);
        }
    }
}

#[test]
fn deepening_visits_more_nodes_than_final_depth_alone() {
    let board = wide_board();
    let legal = board.get_legal_moves(Player::One);
    let blanks = u32::try_from(board.get_blank_spaces().len()).unwrap();

    let mut iterative = agent(SearchConfig::default());
    let mut fixed = agent(SearchConfig::default().with_iterative(false).with_depth(blanks));
    let deepened = iterative.get_move_with_stats(&board, &legal, &unlimited());
    let once = fixed.get_move_with_stats(&board, &legal, &unlimited());
    assert!(deepened.nodes > once.nodes);
}

#[test]
fn all_losing_moves_fall_back_with_score() {
    let state = TreeState::root(branch(vec![lost(), lost(), lost()]));
    let legal = state.get_legal_moves(Player::One);

    let mut agent = SearchAgent::new(SearchConfig::default(), CountingEval::default()).unwrap();
    let result = agent.get_move_with_stats(&state, &legal, &unlimited());
    assert_eq!(result.source, MoveSource::RandomFallback);
    assert_eq!(result.score, Some(f64::NEG_INFINITY));
    assert_eq!(result.depth, 1);
    assert!(!result.timed_out);
    assert!(legal.contains(&result.best_move.unwrap()));
}

#[test]
fn search_move_on_tree() {
    let state = TreeState::root(branch(vec![leaf(-1.0), leaf(4.0), leaf(2.0)]));
    let legal = state.get_legal_moves(Player::One);

    let config = SearchConfig::default()
        .with_method(SearchMethod::AlphaBeta)
        .with_ordering(MoveOrdering::Enumeration);
    let mut agent = SearchAgent::new(config, CountingEval::default()).unwrap();
    let result = agent.get_move_with_stats(&state, &legal, &unlimited());
    assert_eq!(result.best_move, Some(child(1)));
    assert_eq!(result.score, Some(4.0));
    assert_eq!(result.source, MoveSource::Search);
    assert_eq!(agent.evaluator().calls.get(), 3);
}

#[test]
fn takes_immediate_win() {
    let board = winning_board();
    let legal = board.get_legal_moves(Player::One);
    assert_eq!(legal, vec![Pos::new(0, 0), Pos::new(2, 0)]);

    let mut minimax = agent(SearchConfig::default());
    let result = minimax.get_move_with_stats(&board, &legal, &unlimited());
    assert_eq!(result.best_move, Some(Pos::new(0, 0)));
    assert_eq!(result.score, Some(f64::INFINITY));

    // Both moves win eventually; shuffled order may pick either
    let mut alphabeta = agent(SearchConfig::default().with_method(SearchMethod::AlphaBeta));
    let result = alphabeta.get_move_with_stats(&board, &legal, &unlimited());
    assert_eq!(result.score, Some(f64::INFINITY));
    assert!(legal.contains(&result.best_move.unwrap()));
}

#[test]
fn same_seed_replays_same_game() {
    fn play(seed: u64) -> Vec<Pos> {
        let config = SearchConfig::default()
            .with_method(SearchMethod::AlphaBeta)
            .with_iterative(false)
            .with_depth(3)
            .with_seed(seed);
        let mut one = agent(config);
        let mut two = agent(config.with_seed(seed + 1));
        let mut board = Board::new(5, 5).unwrap();
        let mut moves = Vec::new();
        loop {
            let active = board.active_player();
            let legal = board.get_legal_moves(active);
            let agent = if active == Player::One { &mut one } else { &mut two };
            let Some(mv) = agent.get_move(&board, &legal, &unlimited()) else {
                break;
            };
            moves.push(mv);
            board.apply_move(mv);
        }
        moves
    }

    assert_eq!(play(7), play(7));
}

#[test]
fn real_deadline_returns_legal_move() {
    let mut board = Board::new(7, 7).unwrap();
    board.apply_move(Pos::new(3, 3));
    board.apply_move(Pos::new(0, 0));
    let legal = board.get_legal_moves(Player::One);

    let mut agent = agent(SearchConfig::default().with_method(SearchMethod::AlphaBeta));
    let deadline = Deadline::from_millis(60);
    let mv = agent.get_move(&board, &legal, &deadline);
    assert!(legal.contains(&mv.unwrap()));
}
