//! 随机 AI 策略
//!
//! 只作为对弈基线，不做任何评估

use super::{AIStrategy, ScoredMove};
use crate::board::Board;
use rand::prelude::*;
use std::cell::RefCell;

/// 随机 AI - 随机选择合法走法
pub struct RandomAI {
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RandomAI {
            rng: RefCell::new(rng),
        }
    }
}

impl AIStrategy for RandomAI {
    fn select_moves(&self, board: &Board, n: usize) -> Vec<ScoredMove> {
        let mut moves = board.legal_moves();
        moves.shuffle(&mut *self.rng.borrow_mut());

        // 随机走法没有评估，分数统一为 0
        moves
            .into_iter()
            .take(n)
            .map(|position| ScoredMove { position, score: 0 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::initial_board;

    #[test]
    fn test_random_moves_are_legal() {
        let ai = RandomAI::new(Some(42));
        let board = initial_board();
        let moves = ai.select_moves(&board, 5);
        assert_eq!(moves.len(), 5);
        for sm in moves {
            assert!(board.legal_moves().contains(&sm.position));
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = initial_board();
        let a = RandomAI::new(Some(7)).select_best_move(&board);
        let b = RandomAI::new(Some(7)).select_best_move(&board);
        assert_eq!(a, b);
    }

    #[test]
    fn test_terminal_board_has_no_moves() {
        let board = Board::from_notation("XXX/-OO/---").unwrap();
        assert!(RandomAI::new(Some(1)).select_best_move(&board).is_none());
    }
}
