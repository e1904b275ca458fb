//! 井字棋测试局面库
//!
//! 提供命名的记谱测试局面，方便测试和调试
//!
//! 命名规范:
//! - START: 初始局面
//! - X_* / O_*: 以走棋方命名的战术局面
//! - DRAW_* / *_WINS_*: 终局

use crate::board::{initial_board, Board};
use std::collections::HashSet;

// =============================================================================
// 开局
// =============================================================================

/// 初始局面 - 九格全空
pub const START: &str = "---/---/---";

/// 先手占中
pub const X_CENTER: &str = "---/-X-/---";

/// 先手占角，后手占中
pub const X_CORNER_O_CENTER: &str = "X--/-O-/---";

// =============================================================================
// 战术局面
// =============================================================================

/// 后手走，先手第一行两子，必须堵 c0
pub const X_THREATENS_TOP_ROW: &str = "XX-/-O-/---";

/// 先手走，c0 一步成线（后手 c1 也有威胁）
pub const X_CAN_WIN: &str = "XX-/OO-/---";

/// 后手走，c1 一步成线
pub const O_CAN_WIN: &str = "XX-/OO-/X--";

/// 后手走，先手占对角，后手必须走边（走角会被双杀）
pub const O_MUST_TAKE_EDGE: &str = "X--/-O-/--X";

// =============================================================================
// 终局
// =============================================================================

/// 先手第一行成线
pub const X_WINS_TOP_ROW: &str = "XXX/-OO/---";

/// 后手对角线成线
pub const O_WINS_DIAGONAL: &str = "OXX/XO-/X-O";

/// 满盘和棋
pub const DRAW_FULL: &str = "XOX/XOO/OXX";

pub const OPENING_POSITIONS: [&str; 3] = [START, X_CENTER, X_CORNER_O_CENTER];

pub const TACTICAL_POSITIONS: [&str; 4] = [X_THREATENS_TOP_ROW, X_CAN_WIN, O_CAN_WIN, O_MUST_TAKE_EDGE];

pub const TERMINAL_POSITIONS: [&str; 3] = [X_WINS_TOP_ROW, O_WINS_DIAGONAL, DRAW_FULL];

/// 从初始局面出发能到达的全部局面（含初始局面与终局）
pub fn all_reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![initial_board()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        order.push(board);
        for pos in board.legal_moves() {
            if let Ok(next) = board.apply_move(pos) {
                stack.push(next);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameResult;

    #[test]
    fn test_start_position_valid() {
        let board = Board::from_notation(START);
        assert!(board.is_ok(), "START position invalid: {:?}", board.err());
        assert_eq!(board.unwrap(), initial_board());
    }

    #[test]
    fn test_all_named_positions_valid() {
        let all = OPENING_POSITIONS
            .iter()
            .chain(TACTICAL_POSITIONS.iter())
            .chain(TERMINAL_POSITIONS.iter());
        for s in all {
            let board = Board::from_notation(s);
            assert!(board.is_ok(), "{} invalid: {:?}", s, board.err());
        }
    }

    #[test]
    fn test_terminal_positions_are_terminal() {
        for s in TERMINAL_POSITIONS {
            assert!(Board::from_notation(s).unwrap().is_terminal(), "{}", s);
        }
        for s in OPENING_POSITIONS.iter().chain(TACTICAL_POSITIONS.iter()) {
            assert!(!Board::from_notation(s).unwrap().is_terminal(), "{}", s);
        }
    }

    #[test]
    fn test_reachable_board_counts() {
        let boards = all_reachable_boards();
        assert_eq!(boards.len(), 5478);

        let mut x_wins = 0;
        let mut o_wins = 0;
        let mut draws = 0;
        for b in &boards {
            match b.game_result() {
                GameResult::XWin => x_wins += 1,
                GameResult::OWin => o_wins += 1,
                GameResult::Draw => draws += 1,
                GameResult::Ongoing => {}
            }
        }
        assert_eq!(x_wins, 626);
        assert_eq!(o_wins, 316);
        assert_eq!(draws, 16);
    }
}
