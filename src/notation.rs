//! 棋盘记谱解析和生成
//!
//! 格式: `<第0行>/<第1行>/<第2行>`
//!
//! 格子符号：
//! - 先手：X（大小写均可）
//! - 后手：O（大小写均可）
//! - 空格：`-`（解析时也接受 `.` 和 `_`）
//!
//! 例：`XXX/-OO/---`
//!
//! 走法坐标为列字母 + 行数字，如 `a0` 表示第 0 行第 0 列。

use crate::board::Board;
use crate::error::{EngineResult, GameError};
use crate::types::{Mark, Position, BOARD_SIZE, CELL_COUNT};

/// 解析棋盘记谱
///
/// 检查行列形状以及棋子数量（X 与 O 相等或多一个）。
pub fn parse_board(s: &str) -> EngineResult<[Mark; CELL_COUNT]> {
    let rows: Vec<&str> = s.trim().split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(GameError::Parse(format!(
            "Invalid board: expected 3 rows separated by '/', got: {}",
            s
        )));
    }

    let mut cells = [Mark::Empty; CELL_COUNT];
    for (row, row_str) in rows.iter().enumerate() {
        let marks: Vec<char> = row_str.chars().collect();
        if marks.len() != BOARD_SIZE as usize {
            return Err(GameError::Parse(format!(
                "Invalid row {}: expected 3 cells, got '{}'",
                row, row_str
            )));
        }
        for (col, c) in marks.into_iter().enumerate() {
            let mark = Mark::from_char(c).ok_or_else(|| {
                GameError::Parse(format!("Invalid cell '{}' at row {}, col {}", c, row, col))
            })?;
            cells[row * BOARD_SIZE as usize + col] = mark;
        }
    }

    let x = cells.iter().filter(|&&m| m == Mark::X).count();
    let o = cells.iter().filter(|&&m| m == Mark::O).count();
    if x != o && x != o + 1 {
        return Err(GameError::Parse(format!(
            "Invalid mark counts: X={}, O={} (X must equal O or exceed it by one)",
            x, o
        )));
    }

    Ok(cells)
}

/// 生成棋盘记谱
pub fn board_to_notation(cells: &[Mark; CELL_COUNT]) -> String {
    cells
        .chunks(BOARD_SIZE as usize)
        .map(|row| row.iter().map(|m| m.to_char()).collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

/// 解析走法坐标
pub fn parse_position(s: &str) -> EngineResult<Position> {
    Position::from_notation(s)
        .ok_or_else(|| GameError::Parse(format!("Invalid position '{}': expected a0..c2", s)))
}

/// 在记谱局面上执行一步走法，返回新记谱
pub fn apply_move_to_notation(board_str: &str, move_str: &str) -> EngineResult<String> {
    let pos = parse_position(move_str)?;
    let board = Board::from_notation(board_str)?.apply_move(pos)?;
    Ok(board.to_notation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_board() {
        let cells = parse_board("---/---/---").unwrap();
        assert!(cells.iter().all(|m| m.is_empty()));
        let cells = parse_board(".../___/---").unwrap();
        assert!(cells.iter().all(|m| m.is_empty()));
    }

    #[test]
    fn test_parse_mid_game() {
        let cells = parse_board("xo-/-X-/---").unwrap();
        assert_eq!(cells[0], Mark::X);
        assert_eq!(cells[1], Mark::O);
        assert_eq!(cells[4], Mark::X);
        assert_eq!(board_to_notation(&cells), "XO-/-X-/---");
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_board("---/---").is_err());
        assert!(parse_board("----/---/---").is_err());
        assert!(parse_board("--Z/---/---").is_err());
        // O 先走
        assert!(parse_board("O--/---/---").is_err());
        // X 多两个
        assert!(parse_board("XX-/---/---").is_err());
    }

    #[test]
    fn test_apply_move() {
        let next = apply_move_to_notation("---/---/---", "b1").unwrap();
        assert_eq!(next, "---/-X-/---");
        let next = apply_move_to_notation(&next, "a0").unwrap();
        assert_eq!(next, "O--/-X-/---");

        let err = apply_move_to_notation(&next, "b1").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove {
                position: Position::new(1, 1)
            }
        );
        assert!(matches!(
            apply_move_to_notation(&next, "z9"),
            Err(GameError::Parse(_))
        ));
    }
}
