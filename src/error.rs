//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// 端点句柄不属于该图（相当于空端点）
    #[error("顶点不存在: {0}")]
    UnknownVertex(VertexId),

    #[error("源点或汇点不在顶点集中: {vertex}")]
    EndpointNotInSet { vertex: VertexId },

    #[error("邻接表不一致: 顶点 {vertex} 的邻居 {neighbor} 缺少权重或不存在")]
    InconsistentAdjacency { vertex: VertexId, neighbor: VertexId },

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
