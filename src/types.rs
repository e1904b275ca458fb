//! 井字棋核心类型定义
//!
//! 定义棋子标记、棋盘位置和对局结果

use std::fmt;

/// 棋盘边长
pub const BOARD_SIZE: u8 = 3;

/// 格子数量
pub const CELL_COUNT: usize = 9;

/// 格子上的标记
///
/// `X` 为先手，`O` 为后手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    X,
    O,
    #[default]
    Empty,
}

impl Mark {
    /// 获取对方标记（空格返回空格）
    pub fn opposite(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    /// 从记谱字符解析
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '-' | '.' | '_' => Some(Mark::Empty),
            _ => None,
        }
    }

    /// 转换为记谱字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '-',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 棋盘位置 (row, col)
///
/// row: 0-2 (从上到下)
/// col: 0-2 (从左到右)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// 全部位置（行优先）
    pub const ALL: [Position; CELL_COUNT] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ];

    pub const fn new(row: u8, col: u8) -> Self {
        Position { row, col }
    }

    /// 检查位置是否在棋盘范围内
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// 转换为行优先数组下标（越界位置的下标 >= 9）
    #[inline]
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// 从数组下标还原，越界返回 None
    #[inline]
    pub fn from_index(idx: usize) -> Option<Position> {
        Position::ALL.get(idx).copied()
    }

    /// 从记谱坐标解析（如 "a0"：列字母 + 行数字）
    pub fn from_notation(s: &str) -> Option<Position> {
        let mut chars = s.trim().chars();
        let col = match chars.next()? {
            c @ 'a'..='c' => c as u8 - b'a',
            c @ 'A'..='C' => c as u8 - b'A',
            _ => return None,
        };
        let row = match chars.next()? {
            c @ '0'..='2' => c as u8 - b'0',
            _ => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Position { row, col })
    }

    /// 转换为记谱坐标（如 "a0"）
    pub fn to_notation(&self) -> String {
        let col_char = char::from(b'a'.saturating_add(self.col));
        format!("{}{}", col_char, self.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

/// 游戏结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    XWin,
    OWin,
    Draw,
}

impl GameResult {
    /// 先手视角的效用值，对局未结束时为 None
    pub fn utility(&self) -> Option<i32> {
        match self {
            GameResult::Ongoing => None,
            GameResult::XWin => Some(1),
            GameResult::OWin => Some(-1),
            GameResult::Draw => Some(0),
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameResult::Ongoing
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameResult::Ongoing => "ongoing",
            GameResult::XWin => "x_win",
            GameResult::OWin => "o_win",
            GameResult::Draw => "draw",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_notation() {
        assert_eq!(Position::from_notation("a0"), Some(Position::new(0, 0)));
        assert_eq!(Position::from_notation("b1"), Some(Position::new(1, 1)));
        assert_eq!(Position::from_notation("c2"), Some(Position::new(2, 2)));
        assert_eq!(Position::from_notation("C0"), Some(Position::new(0, 2)));
        assert_eq!(Position::from_notation("d0"), None);
        assert_eq!(Position::from_notation("a3"), None);
        assert_eq!(Position::from_notation("a01"), None);
        assert_eq!(Position::from_notation(""), None);
    }

    #[test]
    fn test_position_to_notation() {
        assert_eq!(Position::new(0, 0).to_notation(), "a0");
        assert_eq!(Position::new(2, 1).to_notation(), "b2");
        assert_eq!(Position::new(1, 2).to_string(), "c1");
    }

    #[test]
    fn test_position_index() {
        for (idx, pos) in Position::ALL.iter().enumerate() {
            assert!(pos.is_valid());
            assert_eq!(pos.to_index(), idx);
            assert_eq!(Position::from_index(idx), Some(*pos));
        }
        assert!(!Position::new(3, 0).is_valid());
        assert!(!Position::new(0, 3).is_valid());
    }

    #[test]
    fn test_position_index_out_of_range() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_index(usize::MAX), None);
        // 大坐标不溢出
        assert_eq!(Position::new(90, 0).to_index(), 270);
        assert_eq!(Position::new(u8::MAX, u8::MAX).to_index(), 255 * 3 + 255);
        assert!(Position::new(90, 0).to_index() >= CELL_COUNT);
    }

    #[test]
    fn test_mark_chars() {
        assert_eq!(Mark::from_char('x'), Some(Mark::X));
        assert_eq!(Mark::from_char('O'), Some(Mark::O));
        assert_eq!(Mark::from_char('_'), Some(Mark::Empty));
        assert_eq!(Mark::from_char('?'), None);
        assert_eq!(Mark::X.opposite(), Mark::O);
        assert_eq!(Mark::Empty.opposite(), Mark::Empty);
    }

    #[test]
    fn test_game_result_utility() {
        assert_eq!(GameResult::XWin.utility(), Some(1));
        assert_eq!(GameResult::OWin.utility(), Some(-1));
        assert_eq!(GameResult::Draw.utility(), Some(0));
        assert_eq!(GameResult::Ongoing.utility(), None);
        assert!(!GameResult::Ongoing.is_over());
    }
}
