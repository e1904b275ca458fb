//! 井字棋规则引擎
//!
//! 棋盘是 9 格的定长数组，按值拷贝，走棋总是返回新棋盘。

use crate::error::{EngineResult, GameError};
use crate::notation::{board_to_notation, parse_board};
use crate::types::{GameResult, Mark, Position, CELL_COUNT};
use std::fmt;

/// 8 条连线（行优先下标）
///
/// 顺序固定：三行（上到下）、三列（左到右）、主对角线、副对角线。
/// 双方同时成线在合法对局中不会出现，此时以该顺序中第一条完整连线为准。
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 棋盘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

/// 初始空棋盘
pub fn initial_board() -> Board {
    Board::new()
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// 从格子数组构造，检查棋子数量（X 与 O 相等或多一个）
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> EngineResult<Board> {
        let board = Board { cells };
        if !board.is_well_formed() {
            return Err(GameError::Parse(format!(
                "Invalid mark counts: X={}, O={} (X must equal O or exceed it by one)",
                board.count(Mark::X),
                board.count(Mark::O)
            )));
        }
        Ok(board)
    }

    /// 不检查棋子数量，只用于构造非法局面的测试
    #[cfg(test)]
    pub(crate) fn from_cells_unchecked(cells: [Mark; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// 从记谱字符串创建棋盘
    pub fn from_notation(s: &str) -> EngineResult<Board> {
        Board::from_cells(parse_board(s)?)
    }

    /// 转换为记谱字符串
    pub fn to_notation(&self) -> String {
        board_to_notation(&self.cells)
    }

    /// 获取某位置的标记
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_valid() {
            return None;
        }
        Some(self.cells[pos.to_index()])
    }

    /// 统计某种标记的数量
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.count(Mark::Empty)
    }

    /// 棋子数量是否合法：X 与 O 相等，或 X 多一个
    fn is_well_formed(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        x == o || x == o + 1
    }

    /// 当前走棋方：已落子数为偶数时轮到 X
    #[inline]
    pub fn current_player(&self) -> Mark {
        if (CELL_COUNT - self.empty_count()) % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// 获取所有合法走法（行优先）
    ///
    /// 对局结束（有人成线或棋盘已满）时返回空列表。
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.cells[pos.to_index()].is_empty())
            .collect()
    }

    /// 获取所有合法走法（记谱格式）
    pub fn legal_moves_str(&self) -> Vec<String> {
        self.legal_moves().iter().map(|p| p.to_notation()).collect()
    }

    /// 执行走棋，返回新棋盘
    pub fn apply_move(&self, pos: Position) -> EngineResult<Board> {
        if !pos.is_valid() {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        let idx = pos.to_index();
        if !self.cells[idx].is_empty() {
            return Err(GameError::InvalidMove { position: pos });
        }

        Ok(self.place(pos))
    }

    /// 在已知为空的格子落子（走法来自 `legal_moves`）
    #[inline]
    pub(crate) fn place(&self, pos: Position) -> Board {
        let idx = pos.to_index();
        debug_assert!(self.cells[idx].is_empty(), "place on occupied cell {}", pos);
        let mut next = *self;
        next.cells[idx] = self.current_player();
        next
    }

    /// 获胜方（按连线顺序取第一条完整连线）
    pub fn winner(&self) -> Option<Mark> {
        WIN_LINES.iter().find_map(|&[a, b, c]| {
            let m = self.cells[a];
            if !m.is_empty() && m == self.cells[b] && m == self.cells[c] {
                Some(m)
            } else {
                None
            }
        })
    }

    /// 对局是否结束
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_count() == 0
    }

    /// 判断游戏结果
    pub fn game_result(&self) -> GameResult {
        match self.winner() {
            Some(Mark::X) => GameResult::XWin,
            Some(Mark::O) => GameResult::OWin,
            _ if self.empty_count() == 0 => GameResult::Draw,
            _ => GameResult::Ongoing,
        }
    }

    /// 终局效用值（先手视角）：X 胜 +1，O 胜 -1，和棋 0
    pub fn utility(&self) -> EngineResult<i32> {
        self.game_result().utility().ok_or(GameError::NotTerminal)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c")?;
        for row in 0..3u8 {
            write!(f, "{}", row)?;
            for col in 0..3u8 {
                write!(f, " {}", self.cells[Position::new(row, col).to_index()])?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// 从记谱获取所有合法走法
pub fn get_legal_moves_from_notation(s: &str) -> EngineResult<Vec<String>> {
    let board = Board::from_notation(s)?;
    Ok(board.legal_moves_str())
}
