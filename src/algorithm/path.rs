//! 增广路径查找
//!
//! 在残量图中用 BFS 寻找边数最少的增广路径

use crate::error::Result;
use crate::graph::{Graph, VertexId, VertexSet};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::trace;

/// 查找从 `source` 到 `sink` 的增广路径
///
/// 只经过权重严格为正、且终点属于 `set` 的边。增广路径按边数最短，
/// 而不是按权重最小，这是 Edmonds-Karp 多项式界的前提。
///
/// 返回 `Ok(None)` 表示汇点不可达；路径包含两个端点。
pub fn augmenting_path(
    graph: &Graph,
    source: VertexId,
    sink: VertexId,
    set: &VertexSet,
) -> Result<Option<Vec<VertexId>>> {
    graph.validate(source, sink, set)?;
    Ok(bfs_path(graph, source, sink, set))
}

/// 不做前置条件校验的 BFS，供已校验过的调用方使用
pub(crate) fn bfs_path(
    graph: &Graph,
    source: VertexId,
    sink: VertexId,
    set: &VertexSet,
) -> Option<Vec<VertexId>> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut parent: HashMap<VertexId, VertexId> = HashMap::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        if u == sink {
            break;
        }

        for v in graph.neighbors(u) {
            let residual = graph.weight(u, v).unwrap_or(0);
            if residual > 0 && set.contains(&v) && visited.insert(v) {
                parent.insert(v, u);
                queue.push_back(v);
            }
        }
    }

    trace!(visited = visited.len(), reached = visited.contains(&sink), "BFS 完成");

    if !visited.contains(&sink) {
        return None;
    }

    // 从汇点沿前驱回溯，再反转
    let mut path = vec![sink];
    let mut current = sink;
    while current != source {
        current = *parent.get(&current)?;
        path.push(current);
    }
    path.reverse();

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn chain(graph: &mut Graph, vertices: &[VertexId], weight: i64) {
        for pair in vertices.windows(2) {
            graph.add_edge(pair[0], pair[1], weight).unwrap();
        }
    }

    #[test]
    fn test_shortest_by_edge_count() {
        // s -> a -> b -> c -> t 与 s -> d -> t
        let mut graph = Graph::new();
        let s = graph.add_vertex();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let c = graph.add_vertex();
        let d = graph.add_vertex();
        let t = graph.add_vertex();

        chain(&mut graph, &[s, a, b, c, t], 100);
        chain(&mut graph, &[s, d, t], 1);

        let set = graph.all_vertices();
        let path = augmenting_path(&graph, s, t, &set).unwrap().unwrap();
        assert_eq!(path, vec![s, d, t]);
    }

    #[test]
    fn test_zero_weight_edges_are_blocked() {
        let mut graph = Graph::new();
        let s = graph.add_vertex();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let t = graph.add_vertex();

        chain(&mut graph, &[s, a, t], 0);
        chain(&mut graph, &[s, b], 1);

        let set = graph.all_vertices();
        assert_eq!(augmenting_path(&graph, s, t, &set).unwrap(), None);

        graph.add_edge(b, t, 1).unwrap();
        let path = augmenting_path(&graph, s, t, &set).unwrap().unwrap();
        assert_eq!(path, vec![s, b, t]);
    }

    #[test]
    fn test_vertices_outside_set_are_skipped() {
        let mut graph = Graph::new();
        let s = graph.add_vertex();
        let a = graph.add_vertex();
        let t = graph.add_vertex();
        chain(&mut graph, &[s, a, t], 1);

        let set: VertexSet = [s, t].into_iter().collect();
        assert_eq!(augmenting_path(&graph, s, t, &set).unwrap(), None);
    }

    #[test]
    fn test_source_equals_sink() {
        let mut graph = Graph::new();
        let s = graph.add_vertex();
        let set = graph.all_vertices();

        assert_eq!(augmenting_path(&graph, s, s, &set).unwrap(), Some(vec![s]));
    }

    #[test]
    fn test_contract_violations() {
        let mut graph = Graph::new();
        let s = graph.add_vertex();
        let t = graph.add_vertex();
        let set: VertexSet = [s].into_iter().collect();

        assert!(matches!(
            augmenting_path(&graph, s, t, &set),
            Err(Error::EndpointNotInSet { vertex }) if vertex == t
        ));
        assert!(matches!(
            augmenting_path(&graph, s, VertexId::new(9), &set),
            Err(Error::UnknownVertex(_))
        ));

        graph.vertex_mut(s).unwrap().neighbors.insert(t);
        let set = graph.all_vertices();
        assert!(matches!(
            augmenting_path(&graph, s, t, &set),
            Err(Error::InconsistentAdjacency { .. })
        ));
    }
}
