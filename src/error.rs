//! 错误类型
//!
//! 规则引擎、记谱解析和策略选择的错误

use crate::types::Position;
use thiserror::Error;

/// 引擎错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 目标格子已被占用
    #[error("Invalid move: cell {position} is already occupied")]
    InvalidMove { position: Position },

    /// 位置超出棋盘
    #[error("Position out of bounds: ({row}, {col}) (must be 0-2)")]
    OutOfBounds { row: u8, col: u8 },

    /// 对未结束的局面求效用值
    #[error("Utility requested for a non-terminal board")]
    NotTerminal,

    /// 记谱解析失败
    #[error("Parse error: {0}")]
    Parse(String),

    /// 未知策略
    #[error("Unknown strategy: {0}. Available: minimax, exhaustive, random")]
    UnknownStrategy(String),
}

/// 结果类型别名
pub type EngineResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidMove {
            position: Position::new(1, 1),
        };
        assert_eq!(err.to_string(), "Invalid move: cell b1 is already occupied");

        let err = GameError::UnknownStrategy("mcts".to_string());
        assert!(err.to_string().starts_with("Unknown strategy: mcts"));
    }
}
