//! Shared fixtures: a hand-built game tree and a counting evaluator.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use isolation::{Evaluator, GameState, Player, Pos};

/// Node of an explicit game tree. Values are from Player One's view.
#[derive(Debug)]
pub struct Node {
    /// Frontier evaluation
    pub eval: f64,
    /// Nonzero (`+inf`/`-inf`) when the game is over at this node
    pub utility: f64,
    pub children: Vec<Rc<Node>>,
}

pub fn leaf(eval: f64) -> Rc<Node> {
    Rc::new(Node { eval, utility: 0.0, children: Vec::new() })
}

/// Game over, Player One won
pub fn won() -> Rc<Node> {
    Rc::new(Node { eval: 0.0, utility: f64::INFINITY, children: Vec::new() })
}

/// Game over, Player One lost
pub fn lost() -> Rc<Node> {
    Rc::new(Node { eval: 0.0, utility: f64::NEG_INFINITY, children: Vec::new() })
}

pub fn node(eval: f64, children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node { eval, utility: 0.0, children })
}

pub fn branch(children: Vec<Rc<Node>>) -> Rc<Node> {
    node(0.0, children)
}

/// Move `i` of a tree node
pub fn child(i: u8) -> Pos {
    Pos::new(0, i)
}

/// Position in an explicit tree; Player One moves at the root
#[derive(Debug, Clone)]
pub struct TreeState {
    pub node: Rc<Node>,
    pub active: Player,
}

impl TreeState {
    pub fn root(node: Rc<Node>) -> Self {
        Self { node, active: Player::One }
    }

    fn height(node: &Node) -> usize {
        node.children
            .iter()
            .map(|c| 1 + Self::height(c))
            .max()
            .unwrap_or(0)
    }

    fn value_for(&self, value: f64, player: Player) -> f64 {
        if player == Player::One { value } else { -value }
    }
}

impl GameState for TreeState {
    fn active_player(&self) -> Player {
        self.active
    }

    fn get_legal_moves(&self, _player: Player) -> Vec<Pos> {
        (0..self.node.children.len()).map(|i| child(i as u8)).collect()
    }

    fn forecast_move(&self, mv: Pos) -> Self {
        Self {
            node: Rc::clone(&self.node.children[mv.col as usize]),
            active: self.active.opponent(),
        }
    }

    fn is_winner(&self, player: Player) -> bool {
        self.value_for(self.node.utility, player) == f64::INFINITY
    }

    fn is_loser(&self, player: Player) -> bool {
        self.value_for(self.node.utility, player) == f64::NEG_INFINITY
    }

    /// One entry per ply left in the deepest line
    fn get_blank_spaces(&self) -> Vec<Pos> {
        vec![Pos::new(0, 0); Self::height(&self.node)]
    }
}

/// Returns the node's evaluation and counts calls
#[derive(Debug, Default)]
pub struct CountingEval {
    pub calls: Cell<usize>,
}

impl Evaluator<TreeState> for CountingEval {
    fn score(&self, state: &TreeState, player: Player) -> f64 {
        self.calls.set(self.calls.get() + 1);
        if state.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if state.is_winner(player) {
            return f64::INFINITY;
        }
        state.value_for(state.node.eval, player)
    }
}

/// Clock that never runs out
pub fn unlimited() -> impl Fn() -> f64 {
    || f64::INFINITY
}
