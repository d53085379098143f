//! 图算法模块
//!
//! 包含增广路径查找和最大流算法

mod max_flow;
mod path;

pub use max_flow::{max_flow, EdmondsKarp, MaxFlow};
pub use path::augmenting_path;
