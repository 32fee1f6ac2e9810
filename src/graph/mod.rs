//! 图核心模块
//!
//! 定义顶点、有序顶点存储、有向图索引和迷宫坐标顶点

mod coordinate;
mod index;
mod store;
mod vertex;

pub use coordinate::{grid_maze, Coordinate2D};
pub use index::GraphIndex;
pub use store::{Insertion, VertexStore};
pub use vertex::{Vertex, VertexId};

use crate::error::Result;

/// 可搜索图的能力约定
///
/// 顶点按值去重，边为有向边，路径查询以边数衡量。
pub trait SearchableGraph<T> {
    /// 顶点句柄类型
    type VertexId;

    /// 添加顶点，已存在时返回原有句柄
    fn add_vertex(&mut self, value: T) -> Self::VertexId;

    /// 添加有向边，任一端点不存在时返回 `Error::UnknownVertex`
    fn add_edge(&mut self, from: &T, to: &T) -> Result<()>;

    /// 最短路径，无路径时返回空序列
    fn shortest_path(&self, start: &T, end: &T) -> Vec<T>;

    /// 判断值对应的顶点是否存在
    fn contains(&self, value: &T) -> bool;
}
