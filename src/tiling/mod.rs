//! 多米诺铺砌模块
//!
//! 地板解析与到二分图匹配（最大流）的归约

mod floor;
mod reducer;

pub use floor::{Cell, Color, Floor, FloorStats, OPEN_CELL};
pub use reducer::{analyze, has_tiling, TilingReport, Verdict};
