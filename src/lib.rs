//! Tic-tac-toe AI Engine
//!
//! 井字棋 AI 引擎 - Alpha-Beta 完整搜索，支持记谱输入输出

pub mod ai;
pub mod board;
pub mod error;
pub mod notation;
pub mod test_positions;
pub mod types;

pub use ai::{
    best_move, strategies_help, AIConfig, AIEngine, AIStrategy, ExhaustiveAI, MinimaxAI, RandomAI,
    ScoredMove, AVAILABLE_STRATEGIES, DEFAULT_STRATEGY,
};
pub use board::{get_legal_moves_from_notation, initial_board, Board, WIN_LINES};
pub use error::{EngineResult, GameError};
pub use notation::{apply_move_to_notation, board_to_notation, parse_board, parse_position};
pub use types::{GameResult, Mark, Position};
