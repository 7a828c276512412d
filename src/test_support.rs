//! Hand-built game trees and clocks for exercising the search engines.

use std::cell::Cell;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::IllegalMove;
use crate::game_state::game_position::GamePosition;
use crate::search::evaluation::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Max,
    Min,
}

/// Tree description used to build a `ScriptedTree`.
pub struct TreeSpec {
    score: Score,
    children: Vec<(&'static str, TreeSpec)>,
}

/// Terminal node with a fixed score.
pub fn leaf(score: Score) -> TreeSpec {
    TreeSpec {
        score,
        children: Vec::new(),
    }
}

/// Interior node scored 0.0 when the depth limit stops on it.
pub fn node(children: Vec<(&'static str, TreeSpec)>) -> TreeSpec {
    TreeSpec {
        score: 0.0,
        children,
    }
}

pub fn scored_node(score: Score, children: Vec<(&'static str, TreeSpec)>) -> TreeSpec {
    TreeSpec { score, children }
}

#[derive(Debug)]
struct TreeNode {
    score: Score,
    children: Vec<(&'static str, usize)>,
}

/// A position inside an explicit game tree. Both sides see the same child
/// list; `Max` moves at the root and turns alternate with each ply.
#[derive(Debug, Clone)]
pub struct ScriptedTree {
    nodes: Arc<Vec<TreeNode>>,
    current: usize,
    to_move: Side,
}

impl ScriptedTree {
    pub fn build(spec: TreeSpec) -> Self {
        fn push(spec: TreeSpec, nodes: &mut Vec<TreeNode>) -> usize {
            let TreeSpec { score, children } = spec;
            let idx = nodes.len();
            nodes.push(TreeNode {
                score,
                children: Vec::new(),
            });
            let mut links = Vec::with_capacity(children.len());
            for (label, child) in children {
                links.push((label, push(child, nodes)));
            }
            nodes[idx].children = links;
            idx
        }

        let mut nodes = Vec::new();
        push(spec, &mut nodes);
        Self {
            nodes: Arc::new(nodes),
            current: 0,
            to_move: Side::Max,
        }
    }

    pub fn score(&self) -> Score {
        self.nodes[self.current].score
    }
}

impl GamePosition for ScriptedTree {
    type Move = &'static str;
    type Player = Side;

    fn legal_moves(&self, _player: Side) -> Vec<&'static str> {
        self.nodes[self.current]
            .children
            .iter()
            .map(|(label, _)| *label)
            .collect()
    }

    fn player_to_move(&self) -> Side {
        self.to_move
    }

    fn apply_move(&self, mv: &&'static str) -> Result<Self, IllegalMove> {
        let (_, child) = self.nodes[self.current]
            .children
            .iter()
            .find(|(label, _)| label == mv)
            .ok_or_else(|| IllegalMove::new(*mv))?;
        Ok(Self {
            nodes: Arc::clone(&self.nodes),
            current: *child,
            to_move: self.opponent_of(self.to_move),
        })
    }

    fn is_winner(&self, _player: Side) -> bool {
        false
    }

    fn is_loser(&self, _player: Side) -> bool {
        false
    }

    fn opponent_of(&self, player: Side) -> Side {
        match player {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// Evaluator reading the scripted node score.
pub fn tree_score(position: &ScriptedTree, _perspective: Side) -> Score {
    position.score()
}

/// Reports ample time for the first `checks` queries, then nothing.
pub struct CountdownClock {
    remaining_checks: Cell<u64>,
}

impl CountdownClock {
    pub fn new(checks: u64) -> Self {
        Self {
            remaining_checks: Cell::new(checks),
        }
    }
}

impl crate::search::deadline::TimeLeft for CountdownClock {
    fn time_left(&self) -> Duration {
        let left = self.remaining_checks.get();
        if left == 0 {
            return Duration::ZERO;
        }
        self.remaining_checks.set(left - 1);
        Duration::from_secs(3600)
    }
}

pub fn ample_time() -> Duration {
    Duration::from_secs(3600)
}

/// Two-ply tree: A leads to replies scoring {5, 7}, B to {3, 9}.
pub fn two_move_tree() -> ScriptedTree {
    ScriptedTree::build(node(vec![
        ("A", node(vec![("a1", leaf(5.0)), ("a2", leaf(7.0))])),
        ("B", node(vec![("b1", leaf(3.0)), ("b2", leaf(9.0))])),
    ]))
}

/// Three-ply tree with enough spread to trigger cutoffs on both sides.
pub fn textbook_tree() -> ScriptedTree {
    ScriptedTree::build(node(vec![
        (
            "L",
            node(vec![
                ("L1", node(vec![("L1a", leaf(3.0)), ("L1b", leaf(17.0))])),
                ("L2", node(vec![("L2a", leaf(2.0)), ("L2b", leaf(12.0))])),
            ]),
        ),
        (
            "M",
            node(vec![
                ("M1", node(vec![("M1a", leaf(15.0)), ("M1b", leaf(25.0))])),
                ("M2", node(vec![("M2a", leaf(0.0)), ("M2b", leaf(-4.0))])),
            ]),
        ),
        (
            "R",
            node(vec![
                ("R1", node(vec![("R1a", leaf(2.0)), ("R1b", leaf(5.0))])),
                ("R2", node(vec![("R2a", leaf(3.0)), ("R2b", leaf(-2.0))])),
            ]),
        ),
    ]))
}
