//! 完整 Minimax 策略（无剪枝）
//!
//! 遍历整棵博弈树，作为 Alpha-Beta 搜索的对照基准

use super::{improves, sort_and_truncate, worst_for, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::types::{Mark, Position};
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Exhaustive AI - 不剪枝的 Minimax
#[derive(Debug, Default)]
pub struct ExhaustiveAI {
    nodes: AtomicU64,
}

impl ExhaustiveAI {
    pub fn new() -> Self {
        ExhaustiveAI {
            nodes: AtomicU64::new(0),
        }
    }

    /// 根节点搜索，规则与 [`super::MinimaxAI::search_root`] 相同（严格更优才替换）
    pub fn search_root(&self, board: &Board) -> Option<ScoredMove> {
        if board.is_terminal() {
            return None;
        }

        let mover = board.current_player();
        let mut best: Option<ScoredMove> = None;
        let mut best_value = worst_for(mover);

        for pos in board.legal_moves() {
            let value = self.minimax(&board.place(pos), mover.opposite());
            if improves(mover, value, best_value) {
                best_value = value;
                best = Some(ScoredMove {
                    position: pos,
                    score: value,
                });
            }
        }

        if let Some(sm) = best {
            debug!(
                "exhaustive: {} plays {} (value={}, nodes={})",
                mover,
                sm.position,
                sm.score,
                self.node_count()
            );
        }
        best
    }

    fn minimax(&self, board: &Board, player: Mark) -> i32 {
        self.nodes.fetch_add(1, Ordering::Relaxed);

        if let Some(utility) = board.game_result().utility() {
            return utility;
        }

        // 非终局至少有一个合法走法，初始值不会被返回
        let mut value = worst_for(player);
        for pos in board.legal_moves() {
            let child_value = self.minimax(&board.place(pos), player.opposite());
            value = if player == Mark::X {
                value.max(child_value)
            } else {
                value.min(child_value)
            };
        }
        value
    }
}

impl AIStrategy for ExhaustiveAI {
    fn select_moves(&self, board: &Board, n: usize) -> Vec<ScoredMove> {
        if board.is_terminal() {
            return Vec::new();
        }

        let mover = board.current_player();
        let mut scored: Vec<ScoredMove> = board
            .legal_moves()
            .into_iter()
            .map(|pos| ScoredMove {
                position: pos,
                score: self.minimax(&board.place(pos), mover.opposite()),
            })
            .collect();

        sort_and_truncate(&mut scored, mover, n);
        scored
    }

    fn select_best_move(&self, board: &Board) -> Option<Position> {
        self.search_root(board).map(|sm| sm.position)
    }

    fn node_count(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    fn reset_node_count(&self) {
        self.nodes.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::initial_board;

    #[test]
    fn test_full_tree_node_count() {
        // 完整博弈树共 549946 个节点（含根）
        let ai = ExhaustiveAI::new();
        let best = ai.search_root(&initial_board()).unwrap();
        assert_eq!(best.score, 0);
        assert_eq!(best.position, Position::new(0, 0));
        assert_eq!(ai.node_count() + 1, 549_946);
    }
}
