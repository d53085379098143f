//! 图核心模块
//!
//! 定义顶点和图（顶点竞技场）的核心数据结构

mod graph;
mod vertex;

pub use graph::{Graph, VertexSet};
pub use vertex::{Vertex, VertexId};
