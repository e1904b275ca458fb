//! AI 策略模块
//!
//! 提供 Alpha-Beta 剪枝的 Minimax、无剪枝的完整 Minimax 和随机基线

mod exhaustive;
mod minimax;
mod random;

pub use exhaustive::ExhaustiveAI;
pub use minimax::MinimaxAI;
pub use random::RandomAI;

use crate::board::Board;
use crate::error::{EngineResult, GameError};
use crate::types::{Mark, Position};
use std::cmp::Reverse;

/// 可用策略列表
pub const AVAILABLE_STRATEGIES: [&str; 3] = ["minimax", "exhaustive", "random"];

/// 默认策略
pub const DEFAULT_STRATEGY: &str = "minimax";

/// 搜索边界（效用值只在 [-1, 1] 内）
pub(crate) const INFINITY: i32 = i32::MAX;

/// 策略说明
pub fn strategies_help() -> String {
    [
        "minimax     Alpha-Beta pruned exact minimax (default, alias: alphabeta)",
        "exhaustive  Exact minimax without pruning (alias: full)",
        "random      Uniformly random legal move (baseline opponent)",
    ]
    .join("\n")
}

/// AI 配置
#[derive(Debug, Clone, Default)]
pub struct AIConfig {
    /// 随机种子（仅 random 策略使用）
    pub seed: Option<u64>,
}

/// 走法评分
///
/// score 为先手视角的效用值：+1 先手胜，-1 后手胜，0 和棋
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

/// AI 策略接口
pub trait AIStrategy {
    /// 选择走法（按走棋方从优到劣排序，返回前 n 个）
    fn select_moves(&self, board: &Board, n: usize) -> Vec<ScoredMove>;

    /// 选择最佳走法
    fn select_best_move(&self, board: &Board) -> Option<Position> {
        self.select_moves(board, 1).first().map(|sm| sm.position)
    }

    /// 自上次重置以来访问的节点数
    fn node_count(&self) -> u64 {
        0
    }

    fn reset_node_count(&self) {}
}

/// 排序辅助函数
///
/// X 分数高者优先，O 分数低者优先；稳定排序，同分保持行优先顺序。
pub(crate) fn sort_and_truncate(scored: &mut Vec<ScoredMove>, mover: Mark, n: usize) {
    if mover == Mark::O {
        scored.sort_by_key(|sm| sm.score);
    } else {
        scored.sort_by_key(|sm| Reverse(sm.score));
    }
    scored.truncate(n);
}

/// 对走棋方而言 `value` 是否严格优于 `best`
#[inline]
pub(crate) fn improves(mover: Mark, value: i32, best: i32) -> bool {
    if mover == Mark::X {
        value > best
    } else {
        value < best
    }
}

/// 走棋方的最差初始值
#[inline]
pub(crate) fn worst_for(mover: Mark) -> i32 {
    if mover == Mark::X {
        -INFINITY
    } else {
        INFINITY
    }
}

/// 计算最佳走法（Alpha-Beta 剪枝）
///
/// 局面已结束时返回 None。
pub fn best_move(board: &Board) -> Option<Position> {
    MinimaxAI::new().best_move(board)
}

/// AI 引擎 - 统一的 AI 接口
pub struct AIEngine {
    strategy: Box<dyn AIStrategy>,
}

impl AIEngine {
    /// 创建 Alpha-Beta Minimax AI
    pub fn minimax() -> Self {
        AIEngine {
            strategy: Box::new(MinimaxAI::new()),
        }
    }

    /// 创建无剪枝 Minimax AI
    pub fn exhaustive() -> Self {
        AIEngine {
            strategy: Box::new(ExhaustiveAI::new()),
        }
    }

    /// 创建随机 AI
    pub fn random(seed: Option<u64>) -> Self {
        AIEngine {
            strategy: Box::new(RandomAI::new(seed)),
        }
    }

    /// 从策略名称创建
    pub fn from_strategy(name: &str, config: &AIConfig) -> EngineResult<Self> {
        match name.to_lowercase().as_str() {
            "minimax" | "alphabeta" | "alpha_beta" => Ok(Self::minimax()),
            "exhaustive" | "full" => Ok(Self::exhaustive()),
            "random" => Ok(Self::random(config.seed)),
            _ => Err(GameError::UnknownStrategy(name.to_string())),
        }
    }

    /// 最佳走法
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        self.strategy.select_best_move(board)
    }

    /// 前 n 个走法及评分
    pub fn select_moves(&self, board: &Board, n: usize) -> Vec<ScoredMove> {
        self.strategy.select_moves(board, n)
    }

    pub fn node_count(&self) -> u64 {
        self.strategy.node_count()
    }

    pub fn reset_node_count(&self) {
        self.strategy.reset_node_count()
    }

    /// 从记谱选择走法（返回带评分的走法字符串）
    pub fn select_moves_notation(&self, s: &str, n: usize) -> EngineResult<Vec<(String, i32)>> {
        let board = Board::from_notation(s)?;
        Ok(self
            .strategy
            .select_moves(&board, n)
            .into_iter()
            .map(|sm| (sm.position.to_notation(), sm.score))
            .collect())
    }

    /// 从记谱选择最佳走法
    pub fn select_best_move_notation(&self, s: &str) -> EngineResult<Option<String>> {
        let board = Board::from_notation(s)?;
        Ok(self
            .strategy
            .select_best_move(&board)
            .map(|p| p.to_notation()))
    }
}
