//! 多米诺铺砌判定
//!
//! 把空格子按棋盘染色分成黑白两类，构建二分图匹配的流网络：
//! 超级源点 -> 白格 (1)，白格 -> 相邻黑格 (1)，黑格 -> 超级汇点 (1)。
//! 最大流等于白格数时存在完美匹配，即存在完整的多米诺铺砌。

use super::floor::{Color, Floor, FloorStats};
use crate::algorithm::EdmondsKarp;
use crate::error::Result;
use crate::graph::{Graph, VertexId, VertexSet};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 判定结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// 可以完整铺砌
    Tileable,
    /// 空格子数为奇数
    OddCellCount,
    /// 黑格与白格数量不等
    ColorImbalance,
    /// 最大匹配小于白格数
    InsufficientMatching,
}

/// 判定报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilingReport {
    pub verdict: Verdict,
    pub stats: FloorStats,
    /// 最大流；提前判定失败时为 None
    pub flow: Option<i64>,
}

impl TilingReport {
    pub fn is_tileable(&self) -> bool {
        self.verdict == Verdict::Tileable
    }
}

/// 铺砌问题的流网络
///
/// 图中全部顶点随本结构一起释放。
struct TilingNetwork {
    graph: Graph,
    source: VertexId,
    sink: VertexId,
    /// 网格下标 -> 顶点
    cells: IndexMap<usize, VertexId>,
}

impl TilingNetwork {
    fn build(floor: &Floor) -> Result<Self> {
        let mut graph = Graph::with_capacity(floor.open_count() + 2);
        let mut cells = IndexMap::with_capacity(floor.open_count());
        for cell in floor.cells() {
            cells.insert(cell.index, graph.add_vertex());
        }
        let source = graph.add_vertex();
        let sink = graph.add_vertex();

        for cell in floor.cells() {
            let v = cells[&cell.index];
            match cell.color() {
                Color::White => graph.add_edge(source, v, 1)?,
                Color::Black => graph.add_edge(v, sink, 1)?,
            }
        }

        // 只从白格连向相邻的黑格
        for cell in floor.cells() {
            let (column, row) = floor.grid_position(cell.index);
            if Color::of(column, row) == Color::Black {
                continue;
            }
            let v = cells[&cell.index];
            for (nc, nr) in Floor::neighbor_positions(column, row) {
                if Color::of(nc, nr) != Color::Black {
                    continue;
                }
                if let Some(neighbor) = floor.cell_at(nc, nr) {
                    graph.add_edge(v, cells[&neighbor.index], 1)?;
                }
            }
        }

        Ok(Self {
            graph,
            source,
            sink,
            cells,
        })
    }

    fn vertex_set(&self) -> VertexSet {
        let mut set = VertexSet::with_capacity(self.cells.len() + 2);
        set.insert(self.source);
        set.extend(self.cells.values().copied());
        set.insert(self.sink);
        set
    }

    fn max_flow(&self) -> Result<i64> {
        let set = self.vertex_set();
        let result = EdmondsKarp::new(&self.graph).max_flow(self.source, self.sink, &set)?;
        Ok(result.value)
    }
}

impl Floor {
    /// 判定该地板能否被多米诺完整铺砌
    pub fn analyze(&self) -> Result<TilingReport> {
        let stats = self.stats();

        let early = if stats.open % 2 != 0 {
            Some(Verdict::OddCellCount)
        } else if stats.black != stats.white {
            Some(Verdict::ColorImbalance)
        } else {
            None
        };
        if let Some(verdict) = early {
            debug!(?verdict, open = stats.open, "提前判定");
            return Ok(TilingReport {
                verdict,
                stats,
                flow: None,
            });
        }

        let network = TilingNetwork::build(self)?;
        debug!(
            vertices = network.graph.vertex_count(),
            edges = network.graph.edge_count(),
            "流网络已构建"
        );
        let flow = network.max_flow()?;

        let verdict = if flow == stats.white as i64 {
            Verdict::Tileable
        } else {
            Verdict::InsufficientMatching
        };

        Ok(TilingReport {
            verdict,
            stats,
            flow: Some(flow),
        })
    }
}

/// 分析地板文本
pub fn analyze(floor: &str) -> Result<TilingReport> {
    Floor::parse(floor).analyze()
}

/// 地板能否被 1×2 多米诺完整铺砌
pub fn has_tiling(floor: &str) -> Result<bool> {
    analyze(floor).map(|report| report.is_tileable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_single_cell() {
        let report = analyze(" ").unwrap();
        assert_eq!(report.verdict, Verdict::OddCellCount);
        assert_eq!(report.flow, None);
        assert!(!has_tiling(" ").unwrap());
    }

    #[test]
    fn test_horizontal_domino() {
        let report = analyze("  ").unwrap();
        assert_eq!(report.verdict, Verdict::Tileable);
        assert_eq!(report.flow, Some(1));
    }

    #[test]
    fn test_two_by_two() {
        assert!(has_tiling("  \n  ").unwrap());
        assert!(has_tiling("  \n  \n").unwrap());
    }

    #[test]
    fn test_diagonal_obstacles() {
        let report = analyze(" #\n# ").unwrap();
        assert_eq!(report.verdict, Verdict::ColorImbalance);
        assert!(!report.is_tileable());
    }

    #[test]
    fn test_three_cells() {
        let report = analyze(" \n  ").unwrap();
        assert_eq!(report.verdict, Verdict::OddCellCount);
        assert_eq!(report.stats.open, 3);
    }

    #[test]
    fn test_empty_floor_is_tileable() {
        assert!(has_tiling("").unwrap());
        assert!(has_tiling("##\n##").unwrap());
    }

    #[test]
    fn test_balanced_but_unmatched() {
        // 中心黑格 (1,1) 被四个白格包围，另外三个黑格孤立
        let floor = "# ## \n   ##\n# ## \n### #";
        let report = analyze(floor).unwrap();

        assert_eq!(report.stats.black, 4);
        assert_eq!(report.stats.white, 4);
        assert_eq!(report.verdict, Verdict::InsufficientMatching);
        assert_eq!(report.flow, Some(1));
    }

    #[test]
    fn test_no_wrap_around_row_end() {
        // (2,1) 白格与 (0,2) 黑格在下标上相邻，但在网格上不相邻
        let report = analyze("###\n## \n ##").unwrap();
        assert_eq!(report.stats.black, 1);
        assert_eq!(report.stats.white, 1);
        assert_eq!(report.verdict, Verdict::InsufficientMatching);
        assert_eq!(report.flow, Some(0));
    }

    #[test]
    fn test_chessboard_with_opposite_corners_removed() {
        let mut rows: Vec<String> = (0..8).map(|_| " ".repeat(8)).collect();
        rows[0].replace_range(0..1, "#");
        rows[7].replace_range(7..8, "#");
        let floor = rows.join("\n");

        let report = analyze(&floor).unwrap();
        assert_eq!(report.verdict, Verdict::ColorImbalance);

        // 去掉相邻两个角则可以铺满
        let mut rows: Vec<String> = (0..8).map(|_| " ".repeat(8)).collect();
        rows[0].replace_range(0..1, "#");
        rows[0].replace_range(7..8, "#");
        assert!(has_tiling(&rows.join("\n")).unwrap());
    }

    #[test]
    fn test_repeatable() {
        let floor = "    \n #  \n  # \n    ";
        let first = analyze(floor).unwrap();
        for _ in 0..3 {
            let again = analyze(floor).unwrap();
            assert_eq!(again.verdict, first.verdict);
            assert_eq!(again.flow, first.flow);
        }
    }

    /// 回溯法：每次覆盖第一个未覆盖的空格子
    fn brute_force(grid: &mut Vec<Vec<bool>>) -> bool {
        let Some((r, c)) = (0..grid.len())
            .flat_map(|r| (0..grid[r].len()).map(move |c| (r, c)))
            .find(|&(r, c)| grid[r][c])
        else {
            return true;
        };

        grid[r][c] = false;
        let mut found = false;
        if c + 1 < grid[r].len() && grid[r][c + 1] {
            grid[r][c + 1] = false;
            found = brute_force(grid);
            grid[r][c + 1] = true;
        }
        if !found && r + 1 < grid.len() && grid[r + 1][c] {
            grid[r + 1][c] = false;
            found = brute_force(grid);
            grid[r + 1][c] = true;
        }
        grid[r][c] = true;
        found
    }

    #[test]
    fn test_matches_brute_force_on_random_floors() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let rows = rng.gen_range(1..=5);
            let columns = rng.gen_range(1..=5);
            let mut grid: Vec<Vec<bool>> = (0..rows)
                .map(|_| (0..columns).map(|_| rng.gen_bool(0.75)).collect())
                .collect();

            let text = grid
                .iter()
                .map(|row| row.iter().map(|&open| if open { ' ' } else { '#' }).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");

            assert_eq!(
                has_tiling(&text).unwrap(),
                brute_force(&mut grid),
                "floor:\n{}",
                text
            );
        }
    }
}
