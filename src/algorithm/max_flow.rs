//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson），
//! 在单位容量网络上计算最大流，用于二分图匹配

use super::path::bfs_path;
use crate::error::Result;
use crate::graph::{Graph, VertexId, VertexSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// 最大流结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: i64,
    /// 接受的增广路径数
    pub augmentations: usize,
    /// 原图中流量为正的边 (u, v, 流量)
    pub flow: Vec<(VertexId, VertexId, i64)>,
    /// 最小割的源侧顶点集
    pub source_side: VertexSet,
}

/// Edmonds-Karp 最大流算法
///
/// 每条增广路径恰好推送一个单位的流量，与路径瓶颈无关。
/// 因此要求所有边容量属于 {0, 1}：容量更大时结果仍是最大流，
/// 但迭代次数随流量值增长，不再满足 O(VE²) 界。
pub struct EdmondsKarp<'a> {
    graph: &'a Graph,
}

impl<'a> EdmondsKarp<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算从 source 到 sink 的最大流
    ///
    /// 调用方的图不会被修改：残量图是 `set` 导出的独立副本，
    /// 在返回时随作用域释放。
    pub fn max_flow(&self, source: VertexId, sink: VertexId, set: &VertexSet) -> Result<MaxFlow> {
        self.graph.validate(source, sink, set)?;
        self.check_unit_capacities(set);

        // 构建残量图，并补齐反向边
        let mut residual = self.graph.induced(set);
        let reverse_edges = residual.add_reverse_edges();

        let mut augmentations: usize = 0;
        while let Some(path) = bfs_path(&residual, source, sink, set) {
            // source == sink 时路径只有一个顶点，没有可推送的边
            if path.len() < 2 {
                break;
            }
            for pair in path.windows(2) {
                push_unit(&mut residual, pair[0], pair[1]);
            }
            augmentations += 1;
        }

        // 流量 = 源点各出边的 (原容量 - 残量)
        let value: i64 = residual
            .neighbors(source)
            .map(|v| self.capacity(source, v) - residual.weight(source, v).unwrap_or(0))
            .sum();

        let flow = self.edge_flows(&residual, set);
        let source_side = find_source_side(&residual, source, set);

        debug!(
            vertices = set.len(),
            reverse_edges, augmentations, value, "Edmonds-Karp 完成"
        );

        Ok(MaxFlow {
            value,
            augmentations,
            flow,
            source_side,
        })
    }

    /// 原图容量，残量图中补出的反向边容量为 0
    fn capacity(&self, from: VertexId, to: VertexId) -> i64 {
        self.graph.weight(from, to).unwrap_or(0)
    }

    fn check_unit_capacities(&self, set: &VertexSet) {
        let oversized = set.iter().find_map(|&u| {
            self.graph
                .neighbors(u)
                .find(|&v| self.capacity(u, v) > 1)
                .map(|v| (u, v))
        });
        if let Some((u, v)) = oversized {
            warn!(
                from = %u,
                to = %v,
                capacity = self.capacity(u, v),
                "单位增广要求容量属于 {{0, 1}}"
            );
        }
    }

    fn edge_flows(&self, residual: &Graph, set: &VertexSet) -> Vec<(VertexId, VertexId, i64)> {
        let mut flows = Vec::new();
        for &u in set {
            for v in self.graph.neighbors(u).filter(|v| set.contains(v)) {
                let used = self.capacity(u, v) - residual.weight(u, v).unwrap_or(0);
                if used > 0 {
                    flows.push((u, v, used));
                }
            }
        }
        flows
    }
}

/// 计算从 source 到 sink 的最大流值
pub fn max_flow(graph: &Graph, source: VertexId, sink: VertexId, set: &VertexSet) -> Result<i64> {
    EdmondsKarp::new(graph)
        .max_flow(source, sink, set)
        .map(|result| result.value)
}

/// 沿 u -> v 推送一个单位的流量
fn push_unit(residual: &mut Graph, u: VertexId, v: VertexId) {
    if let Some(w) = residual.vertex_mut(u).and_then(|x| x.weights.get_mut(&v)) {
        *w -= 1;
    }
    if let Some(w) = residual.vertex_mut(v).and_then(|x| x.weights.get_mut(&u)) {
        *w += 1;
    }
}

/// 找最小割的源侧顶点（残量图中从源点可达的顶点）
fn find_source_side(residual: &Graph, source: VertexId, set: &VertexSet) -> VertexSet {
    let mut visited = VertexSet::new();
    let mut queue = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for v in residual.neighbors(u) {
            let positive = residual.weight(u, v).unwrap_or(0) > 0;
            if positive && set.contains(&v) && visited.insert(v) {
                queue.push_back(v);
            }
        }
    }

    visited
}
