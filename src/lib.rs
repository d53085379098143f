//! Floortile - 多米诺铺砌判定
//!
//! 判断一块由空格子和障碍组成的矩形地板能否被 1×2 多米诺完整覆盖：
//! - 棋盘染色把问题归约为二分图完美匹配
//! - 匹配用 Edmonds-Karp 最大流求解
//! - 增广路径与最大流是可复用的通用图原语

pub mod algorithm;
pub mod batch;
pub mod config;
pub mod error;
pub mod graph;
pub mod tiling;

// 重导出常用类型
pub use algorithm::{augmenting_path, max_flow, EdmondsKarp, MaxFlow};
pub use batch::{BatchChecker, BatchReport, BatchStats, FloorOutcome};
pub use config::CheckConfig;
pub use error::{Error, Result};
pub use graph::{Graph, Vertex, VertexId, VertexSet};
pub use tiling::{analyze, has_tiling, Floor, TilingReport, Verdict};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
