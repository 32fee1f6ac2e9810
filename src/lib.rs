//! searchgraph - 面向搜索的泛型有向图
//!
//! - 顶点按值有序存储，二分查找去重插入
//! - 有向邻接表（可按无向边成对写入），顶点以稳定 ID 引用
//! - 二维坐标顶点与网格迷宫构建
//! - BFS 最短路径（按边数）及 DFS / 可达性遍历
//! - CSV / JSON Lines 边列表导入

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult};
pub use error::{Error, Result};
pub use graph::{
    grid_maze, Coordinate2D, GraphIndex, Insertion, SearchableGraph, Vertex, VertexId, VertexStore,
};
pub use import::{EdgeListImporter, ImportStats};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
