//! 地板平面解析
//!
//! 文本按行排列，`' '` 为需要覆盖的空格子，其余字符为障碍。
//! 行长取第一个换行符之前的字符数；没有换行符时整段文本为一行。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 空格子字符
pub const OPEN_CELL: char = ' ';

/// 棋盘染色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// (列 + 行) 为偶数
    Black,
    /// (列 + 行) 为奇数
    White,
}

impl Color {
    pub fn of(column: usize, row: usize) -> Self {
        if (column + row) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }
}

/// 空格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// 网格下标（不计换行符）
    pub index: usize,
    /// 文本中的列
    pub column: usize,
    /// 文本中的行
    pub row: usize,
}

impl Cell {
    pub fn color(&self) -> Color {
        Color::of(self.column, self.row)
    }
}

/// 地板统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorStats {
    pub open: usize,
    pub black: usize,
    pub white: usize,
    pub rows: usize,
    pub row_length: usize,
}

/// 解析后的地板
#[derive(Debug, Clone)]
pub struct Floor {
    row_length: usize,
    rows: usize,
    /// 网格下标 -> 空格子
    cells: IndexMap<usize, Cell>,
}

impl Floor {
    /// 解析地板文本
    ///
    /// 不校验各行长度是否一致。
    pub fn parse(text: &str) -> Self {
        let row_length = text.chars().take_while(|&ch| ch != '\n').count();

        let mut cells = IndexMap::new();
        let mut column = 0;
        let mut row = 0;
        let mut index = 0;

        for ch in text.chars() {
            if ch == '\n' {
                row += 1;
                column = 0;
                continue;
            }
            if ch == OPEN_CELL {
                cells.insert(index, Cell { index, column, row });
            }
            column += 1;
            index += 1;
        }

        // 末尾换行不构成新的一行
        let rows = if text.is_empty() || text.ends_with('\n') {
            row
        } else {
            row + 1
        };

        Self {
            row_length,
            rows,
            cells,
        }
    }

    pub fn row_length(&self) -> usize {
        self.row_length
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn open_count(&self) -> usize {
        self.cells.len()
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells().filter(|c| c.color() == color).count()
    }

    pub fn stats(&self) -> FloorStats {
        FloorStats {
            open: self.open_count(),
            black: self.count(Color::Black),
            white: self.count(Color::White),
            rows: self.rows,
            row_length: self.row_length,
        }
    }

    /// 按行长换算的网格坐标 (列, 行)
    ///
    /// 行长为 0（文本以换行开头）时按 1 计算。
    pub fn grid_position(&self, index: usize) -> (usize, usize) {
        let width = self.row_length.max(1);
        (index % width, index / width)
    }

    /// 网格坐标处的空格子；列越界时返回 None
    pub fn cell_at(&self, column: usize, row: usize) -> Option<&Cell> {
        if column >= self.row_length.max(1) {
            return None;
        }
        let index = row.checked_mul(self.row_length.max(1))?.checked_add(column)?;
        self.cells.get(&index)
    }

    /// 网格上的四个相邻坐标：右、左、下、上
    pub fn neighbor_positions(column: usize, row: usize) -> impl Iterator<Item = (usize, usize)> {
        [
            Some((column + 1, row)),
            column.checked_sub(1).map(|c| (c, row)),
            Some((column, row + 1)),
            row.checked_sub(1).map(|r| (column, r)),
        ]
        .into_iter()
        .flatten()
    }
}
