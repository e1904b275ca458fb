//! Tic-tac-toe AI CLI
//!
//! 命令行界面，用于测试 AI
//!
//! 支持两种模式：
//! 1. 单次命令模式：每次执行一个命令
//! 2. Server 模式：长驻进程，通过 stdin/stdout 通信

use clap::{Parser, Subcommand};
use log::info;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tictactoe_ai::{
    parse_position, strategies_help, AIConfig, AIEngine, Board, EngineResult, GameResult, Mark,
    DEFAULT_STRATEGY,
};

#[derive(Parser)]
#[command(name = "tictactoe-ai")]
#[command(about = "Tic-tac-toe exact minimax engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 获取合法走法
    Moves {
        /// 棋盘记谱（如 XX-/-O-/---）
        #[arg(long)]
        board: String,
    },

    /// 选择最佳走法
    Best {
        /// 棋盘记谱
        #[arg(long)]
        board: String,

        /// AI 策略 (minimax, exhaustive, random)
        #[arg(long, default_value = DEFAULT_STRATEGY)]
        strategy: String,

        /// 返回的走法数量
        #[arg(long, default_value = "1")]
        n: usize,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 查询局面状态（走棋方、胜负、效用值）
    Status {
        /// 棋盘记谱
        #[arg(long)]
        board: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 引擎对弈直到终局
    Play {
        /// 起始棋盘记谱
        #[arg(long, default_value = "---/---/---")]
        board: String,

        /// 先手策略
        #[arg(long, default_value = DEFAULT_STRATEGY)]
        x: String,

        /// 后手策略
        #[arg(long, default_value = DEFAULT_STRATEGY)]
        o: String,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 列出可用策略
    Strategies,

    /// 启动 server 模式（stdin/stdout 通信）
    Server,
}

#[derive(Serialize, Deserialize)]
struct MoveResult {
    #[serde(rename = "move")]
    mv: String,
    score: i32,
}

#[derive(Serialize, Deserialize)]
struct MovesResponse {
    moves: Vec<MoveResult>,
    total: usize,
    nodes: u64,
    elapsed_ms: f64,
}

#[derive(Serialize, Deserialize, Clone)]
struct StatusInfo {
    board: String,
    to_move: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<String>,
    terminal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    utility: Option<i32>,
    result: String,
}

#[derive(Serialize, Deserialize)]
struct PlyInfo {
    ply: usize,
    player: String,
    #[serde(rename = "move")]
    mv: String,
    board: String,
}

#[derive(Serialize, Deserialize)]
struct PlayResponse {
    plies: Vec<PlyInfo>,
    status: StatusInfo,
}

// Server 模式的请求和响应结构
#[derive(Serialize, Deserialize)]
struct ServerRequest {
    cmd: String,
    #[serde(default)]
    board: String,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    n: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default, rename = "move")]
    mv: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
struct ServerResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<MoveResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legal_moves: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<StatusInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServerResponse {
    fn success_moves(moves: Vec<MoveResult>, nodes: u64, elapsed_ms: f64) -> Self {
        Self {
            ok: true,
            moves: Some(moves),
            nodes: Some(nodes),
            elapsed_ms: Some(elapsed_ms),
            ..Default::default()
        }
    }

    fn success_legal_moves(legal_moves: Vec<String>) -> Self {
        Self {
            ok: true,
            legal_moves: Some(legal_moves),
            ..Default::default()
        }
    }

    fn success_status(status: StatusInfo) -> Self {
        Self {
            ok: true,
            status: Some(status),
            ..Default::default()
        }
    }

    fn error(msg: &str) -> Self {
        Self {
            ok: false,
            error: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

fn mark_to_str(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "x",
        Mark::O => "o",
        Mark::Empty => "-",
    }
}

fn status_of(board: &Board) -> StatusInfo {
    let result = board.game_result();
    StatusInfo {
        board: board.to_notation(),
        to_move: mark_to_str(board.current_player()).to_string(),
        winner: board.winner().map(|m| mark_to_str(m).to_string()),
        terminal: board.is_terminal(),
        utility: result.utility(),
        result: result.to_string(),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.unwrap_or_else(|e| format!("{{\"ok\": false, \"error\": {:?}}}", e.to_string()))
}

/// 执行搜索，返回走法、节点数和耗时（毫秒）
fn search(
    board_str: &str,
    strategy: &str,
    n: usize,
    seed: Option<u64>,
) -> EngineResult<(Vec<MoveResult>, u64, f64)> {
    let config = AIConfig { seed };
    let ai = AIEngine::from_strategy(strategy, &config)?;

    ai.reset_node_count();
    let start = Instant::now();
    let moves = ai.select_moves_notation(board_str, n)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let moves = moves
        .into_iter()
        .map(|(mv, score)| MoveResult { mv, score })
        .collect();
    Ok((moves, ai.node_count(), elapsed_ms))
}

/// 双方配置：后手种子加一，两个随机引擎不会走出相同的随机序列
fn side_configs(seed: Option<u64>) -> (AIConfig, AIConfig) {
    (
        AIConfig { seed },
        AIConfig {
            seed: seed.map(|s| s.wrapping_add(1)),
        },
    )
}

/// 双方引擎对弈直到终局
fn play_game(
    board_str: &str,
    x_strategy: &str,
    o_strategy: &str,
    seed: Option<u64>,
) -> EngineResult<(Vec<PlyInfo>, Board)> {
    let (x_config, o_config) = side_configs(seed);
    let x_ai = AIEngine::from_strategy(x_strategy, &x_config)?;
    let o_ai = AIEngine::from_strategy(o_strategy, &o_config)?;

    let mut board = Board::from_notation(board_str)?;
    let mut plies = Vec::new();

    while !board.is_terminal() {
        let player = board.current_player();
        let ai = if player == Mark::X { &x_ai } else { &o_ai };
        let Some(mv) = ai.best_move(&board) else {
            break;
        };
        board = board.apply_move(mv)?;
        info!("ply {}: {} plays {} -> {}", plies.len() + 1, player, mv, board.to_notation());
        plies.push(PlyInfo {
            ply: plies.len() + 1,
            player: mark_to_str(player).to_string(),
            mv: mv.to_notation(),
            board: board.to_notation(),
        });
    }

    Ok((plies, board))
}

fn run(command: Commands) -> EngineResult<()> {
    match command {
        Commands::Moves { board } => {
            let board = Board::from_notation(&board)?;
            let moves = board.legal_moves_str();
            println!("Legal moves ({}):", moves.len());
            for mv in &moves {
                println!("  {}", mv);
            }
        }

        Commands::Best {
            board,
            strategy,
            n,
            seed,
            json,
        } => {
            let (moves, nodes, elapsed_ms) = search(&board, &strategy, n, seed)?;
            if json {
                let response = MovesResponse {
                    total: moves.len(),
                    moves,
                    nodes,
                    elapsed_ms,
                };
                println!("{}", to_json(&response, true));
            } else if moves.is_empty() {
                println!("Game over: no move to make");
            } else {
                println!("Best moves (strategy={}):", strategy);
                for m in &moves {
                    println!("  {} (score: {})", m.mv, m.score);
                }
                println!("\nStats: nodes={}, time={:.3}ms", nodes, elapsed_ms);
            }
        }

        Commands::Status { board, json } => {
            let board = Board::from_notation(&board)?;
            let status = status_of(&board);
            if json {
                println!("{}", to_json(&status, true));
            } else {
                println!("{}\n", board);
                println!("To move: {}", status.to_move);
                println!("Result: {}", status.result);
                if let Some(u) = status.utility {
                    println!("Utility: {}", u);
                }
            }
        }

        Commands::Play {
            board,
            x,
            o,
            seed,
            json,
        } => {
            let (plies, final_board) = play_game(&board, &x, &o, seed)?;
            let status = status_of(&final_board);
            if json {
                println!("{}", to_json(&PlayResponse { plies, status }, true));
            } else {
                for p in &plies {
                    println!("{:>2}. {} {}  {}", p.ply, p.player, p.mv, p.board);
                }
                println!("\n{}\n", final_board);
                let summary = match final_board.game_result() {
                    GameResult::XWin => "X wins",
                    GameResult::OWin => "O wins",
                    GameResult::Draw => "Draw",
                    GameResult::Ongoing => "Ongoing",
                };
                println!("Result: {}", summary);
            }
        }

        Commands::Strategies => {
            println!("{}", strategies_help());
        }

        Commands::Server => run_server(),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Server 模式主循环
/// 从 stdin 读取 JSON 请求，返回 JSON 响应到 stdout
fn run_server() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // 空行跳过
        if line.trim().is_empty() {
            continue;
        }

        let request: ServerRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = ServerResponse::error(&format!("Invalid JSON: {}", e));
                println!("{}", to_json(&response, false));
                let _ = stdout.flush();
                continue;
            }
        };

        let response = match request.cmd.as_str() {
            "best" => handle_best_request(&request),
            "moves" => handle_moves_request(&request),
            "apply" => handle_apply_request(&request),
            "status" => handle_status_request(&request),
            "quit" => break,
            _ => ServerResponse::error(&format!("Unknown command: {}", request.cmd)),
        };

        println!("{}", to_json(&response, false));
        let _ = stdout.flush();
    }
}

/// 处理 best 命令
fn handle_best_request(request: &ServerRequest) -> ServerResponse {
    let strategy = request.strategy.as_deref().unwrap_or(DEFAULT_STRATEGY);
    let n = request.n.unwrap_or(1);

    match search(&request.board, strategy, n, request.seed) {
        Ok((moves, nodes, elapsed_ms)) => ServerResponse::success_moves(moves, nodes, elapsed_ms),
        Err(e) => ServerResponse::error(&e.to_string()),
    }
}

/// 处理 moves 命令
fn handle_moves_request(request: &ServerRequest) -> ServerResponse {
    match Board::from_notation(&request.board) {
        Ok(board) => ServerResponse::success_legal_moves(board.legal_moves_str()),
        Err(e) => ServerResponse::error(&e.to_string()),
    }
}

/// 处理 apply 命令（走一步，返回新局面状态）
fn handle_apply_request(request: &ServerRequest) -> ServerResponse {
    let Some(mv) = request.mv.as_deref() else {
        return ServerResponse::error("Missing field: move");
    };
    let next = Board::from_notation(&request.board)
        .and_then(|board| board.apply_move(parse_position(mv)?));
    match next {
        Ok(board) => ServerResponse::success_status(status_of(&board)),
        Err(e) => ServerResponse::error(&e.to_string()),
    }
}

/// 处理 status 命令
fn handle_status_request(request: &ServerRequest) -> ServerResponse {
    match Board::from_notation(&request.board) {
        Ok(board) => ServerResponse::success_status(status_of(&board)),
        Err(e) => ServerResponse::error(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_configs_use_distinct_seeds() {
        let (x, o) = side_configs(Some(42));
        assert_eq!(x.seed, Some(42));
        assert_eq!(o.seed, Some(43));

        let (x, o) = side_configs(Some(u64::MAX));
        assert_ne!(x.seed, o.seed);

        let (x, o) = side_configs(None);
        assert!(x.seed.is_none() && o.seed.is_none());
    }

    #[test]
    fn test_random_self_play_sides_differ() {
        // 同一局面下双方随机引擎给出的走法排列不同
        let (x_config, o_config) = side_configs(Some(7));
        let x_ai = AIEngine::from_strategy("random", &x_config).unwrap();
        let o_ai = AIEngine::from_strategy("random", &o_config).unwrap();
        let board = Board::new();
        assert_ne!(x_ai.select_moves(&board, 9), o_ai.select_moves(&board, 9));
    }

    #[test]
    fn test_play_game_reaches_terminal() {
        let (plies, board) = play_game("---/---/---", "random", "random", Some(3)).unwrap();
        assert!(board.is_terminal());
        assert_eq!(plies.len(), 9 - board.empty_count());

        let (_, board) = play_game("---/---/---", "minimax", "minimax", None).unwrap();
        assert_eq!(board.game_result(), GameResult::Draw);
    }
}
