//! 顶点定义
//!
//! 顶点只保存邻居集合和到每个邻居的整数权重（容量或残量）

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 顶点 ID（在所属的图中唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    /// 邻居集合（保持插入顺序）
    pub neighbors: IndexSet<VertexId>,
    /// 邻居 -> 边权重
    pub weights: HashMap<VertexId, i64>,
}

impl Vertex {
    /// 创建孤立顶点
    pub fn new() -> Self {
        Self::default()
    }

    /// 连接到邻居，已存在的边会覆盖权重
    pub fn connect(&mut self, neighbor: VertexId, weight: i64) {
        self.neighbors.insert(neighbor);
        self.weights.insert(neighbor, weight);
    }

    /// 到邻居的权重
    pub fn weight(&self, neighbor: VertexId) -> Option<i64> {
        self.weights.get(&neighbor).copied()
    }

    pub fn has_neighbor(&self, neighbor: VertexId) -> bool {
        self.neighbors.contains(&neighbor)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// 第一个缺少权重的邻居
    pub fn missing_weight(&self) -> Option<VertexId> {
        self.neighbors
            .iter()
            .copied()
            .find(|n| !self.weights.contains_key(n))
    }
}
