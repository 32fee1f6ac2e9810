//! 图算法模块
//!
//! 包含无权路径追踪与可达性遍历

mod path_tracing;

pub use path_tracing::{PathFinder, PathResult};
