//! Minimax AI 策略（Alpha-Beta 剪枝）

use super::{improves, sort_and_truncate, worst_for, AIStrategy, ScoredMove, INFINITY};
use crate::board::Board;
use crate::types::{Mark, Position};
use log::{debug, trace};
use std::sync::atomic::{AtomicU64, Ordering};

/// Minimax AI - 使用 Alpha-Beta 剪枝的完整深度搜索
///
/// 效用值始终以先手视角表示：X 取最大，O 取最小。
#[derive(Debug, Default)]
pub struct MinimaxAI {
    nodes: AtomicU64,
}

impl MinimaxAI {
    pub fn new() -> Self {
        MinimaxAI {
            nodes: AtomicU64::new(0),
        }
    }

    /// 最佳走法，局面已结束时返回 None
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        self.search_root(board).map(|sm| sm.position)
    }

    /// 根节点搜索
    ///
    /// 按行优先遍历走法，只在严格更优时替换，同分取先出现的走法。
    /// 根节点在走法之间持续收紧 alpha（X）或 beta（O）。
    pub fn search_root(&self, board: &Board) -> Option<ScoredMove> {
        if board.is_terminal() {
            return None;
        }

        let mover = board.current_player();
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<ScoredMove> = None;
        let mut best_value = worst_for(mover);

        for pos in board.legal_moves() {
            let value = self.value(&board.place(pos), alpha, beta, mover.opposite());
            trace!("root {} -> {} (alpha={}, beta={})", pos, value, alpha, beta);

            if improves(mover, value, best_value) {
                best_value = value;
                best = Some(ScoredMove {
                    position: pos,
                    score: value,
                });
            }

            if mover == Mark::X {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
        }

        if let Some(sm) = best {
            debug!(
                "minimax: {} plays {} (value={}, nodes={})",
                mover,
                sm.position,
                sm.score,
                self.node_count()
            );
        }
        best
    }

    /// 递归求值（先手视角）
    fn value(&self, board: &Board, mut alpha: i32, mut beta: i32, player: Mark) -> i32 {
        self.nodes.fetch_add(1, Ordering::Relaxed);

        if let Some(utility) = board.game_result().utility() {
            return utility;
        }

        let next = player.opposite();
        if player == Mark::X {
            let mut value = -INFINITY;
            for pos in board.legal_moves() {
                value = value.max(self.value(&board.place(pos), alpha, beta, next));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break; // Beta 剪枝
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for pos in board.legal_moves() {
                value = value.min(self.value(&board.place(pos), alpha, beta, next));
                beta = beta.min(value);
                if alpha >= beta {
                    break; // Alpha 剪枝
                }
            }
            value
        }
    }
}

impl AIStrategy for MinimaxAI {
    fn select_moves(&self, board: &Board, n: usize) -> Vec<ScoredMove> {
        if board.is_terminal() {
            return Vec::new();
        }

        let mover = board.current_player();

        // 每个根走法用完整窗口求精确值，便于排序输出
        let mut scored: Vec<ScoredMove> = board
            .legal_moves()
            .into_iter()
            .map(|pos| ScoredMove {
                position: pos,
                score: self.value(&board.place(pos), -INFINITY, INFINITY, mover.opposite()),
            })
            .collect();

        sort_and_truncate(&mut scored, mover, n);
        scored
    }

    fn select_best_move(&self, board: &Board) -> Option<Position> {
        self.best_move(board)
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
    fn test_empty_board_value_is_draw() {
        let ai = MinimaxAI::new();
        let best = ai.search_root(&initial_board()).unwrap();
        assert_eq!(best.score, 0);
        assert!(ai.node_count() > 0);
    }

    #[test]
    fn test_single_empty_cell() {
        // 只剩一格：X 落子后满盘
        let board = Board::from_notation("XOX/XOO/OX-").unwrap();
        let best = MinimaxAI::new().search_root(&board).unwrap();
        assert_eq!(best.position, Position::new(2, 2));
        assert_eq!(best.score, 0);
    }

    #[test]
    fn test_fixed_window_value() {
        let ai = MinimaxAI::new();
        let board = Board::from_notation("XX-/OO-/---").unwrap();
        // X 一步成线，完整窗口下精确为 1
        assert_eq!(ai.value(&board, -INFINITY, INFINITY, Mark::X), 1);
    }
}
