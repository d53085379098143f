//! 图数据结构
//!
//! 图是一个顶点竞技场：一次计算中创建的所有顶点都归它所有，
//! 离开作用域时统一释放

use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};

/// 顶点集：参与一次计算的顶点（无重复，迭代顺序确定）
pub type VertexSet = IndexSet<VertexId>;

/// 图
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点表
    vertices: IndexMap<VertexId, Vertex>,
    /// 下一个顶点 ID
    next_vertex_id: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            next_vertex_id: 1,
        }
    }

    /// 预分配容量
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(capacity),
            next_vertex_id: 1,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.insert(id, Vertex::new());
        id
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&id)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 所有顶点 ID（按创建顺序）
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 包含全部顶点的顶点集
    pub fn all_vertices(&self) -> VertexSet {
        self.vertex_ids().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加有向边，已存在时覆盖权重
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: i64) -> Result<()> {
        if !self.contains(to) {
            return Err(Error::UnknownVertex(to));
        }
        let vertex = self
            .vertices
            .get_mut(&from)
            .ok_or(Error::UnknownVertex(from))?;
        vertex.connect(to, weight);
        Ok(())
    }

    /// 边权重
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<i64> {
        self.vertex(from).and_then(|v| v.weight(to))
    }

    /// 出边邻居
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex(id)
            .into_iter()
            .flat_map(|v| v.neighbors.iter().copied())
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum()
    }

    // ==================== 前置条件 ====================

    /// 校验图算法的前置条件
    ///
    /// 源点和汇点必须属于图且属于 `set`，`set` 中每个顶点的每个邻居都必须有权重。
    pub fn validate(&self, source: VertexId, sink: VertexId, set: &VertexSet) -> Result<()> {
        for endpoint in [source, sink] {
            if !self.contains(endpoint) {
                return Err(Error::UnknownVertex(endpoint));
            }
            if !set.contains(&endpoint) {
                return Err(Error::EndpointNotInSet { vertex: endpoint });
            }
        }

        for &id in set {
            let vertex = self.vertex(id).ok_or(Error::UnknownVertex(id))?;
            if let Some(neighbor) = vertex.missing_weight() {
                return Err(Error::InconsistentAdjacency {
                    vertex: id,
                    neighbor,
                });
            }
            if let Some(&neighbor) = vertex.neighbors.iter().find(|n| !self.contains(**n)) {
                return Err(Error::InconsistentAdjacency {
                    vertex: id,
                    neighbor,
                });
            }
        }

        Ok(())
    }

    // ==================== 复制 ====================

    /// 由顶点集导出的子图
    ///
    /// 返回结构上独立的副本，顶点 ID 保持不变；指向集合外的边被丢弃。
    pub fn induced(&self, set: &VertexSet) -> Graph {
        let mut copy = Graph::with_capacity(set.len());
        copy.next_vertex_id = self.next_vertex_id;

        for &id in set {
            let Some(vertex) = self.vertex(id) else {
                continue;
            };
            let mut mirrored = Vertex::new();
            for &neighbor in vertex.neighbors.iter().filter(|n| set.contains(*n)) {
                if let Some(weight) = vertex.weight(neighbor) {
                    mirrored.connect(neighbor, weight);
                }
            }
            copy.vertices.insert(id, mirrored);
        }

        copy
    }

    /// 为每条缺少反向边的边补上权重为 0 的反向边，返回补充的数量
    pub fn add_reverse_edges(&mut self) -> usize {
        let missing: Vec<(VertexId, VertexId)> = self
            .vertices
            .iter()
            .flat_map(|(&u, vertex)| vertex.neighbors.iter().map(move |&v| (u, v)))
            .filter(|&(u, v)| self.vertex(v).is_some_and(|rev| !rev.has_neighbor(u)))
            .collect();

        for &(u, v) in &missing {
            if let Some(rev) = self.vertices.get_mut(&v) {
                rev.connect(u, 0);
            }
        }

        missing.len()
    }
}
