//! 二维坐标顶点
//!
//! 迷宫网格中的格子以坐标作为顶点值，按 (x, y) 字典序排序

use super::GraphIndex;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 二维坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate2D<N> {
    // 字段顺序决定派生的排序：先 x 后 y
    pub x: N,
    pub y: N,
}

impl<N> Coordinate2D<N> {
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }
}

impl<N> From<(N, N)> for Coordinate2D<N> {
    fn from((x, y): (N, N)) -> Self {
        Self { x, y }
    }
}

impl<N: fmt::Display> fmt::Display for Coordinate2D<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 由字符网格构建迷宫图
///
/// 每行是一排格子，`#` 为墙，其余字符为通路。第 `y` 行第 `x` 列的通路格
/// 对应顶点 `(x, y)`，上下左右相邻的通路格之间连无向边。
pub fn grid_maze<S: AsRef<str>>(rows: &[S]) -> Result<GraphIndex<Coordinate2D<i32>>> {
    let cells: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.as_ref().chars().map(|c| c != '#').collect())
        .collect();
    let open = |x: usize, y: usize| cells.get(y).and_then(|r| r.get(x)).copied().unwrap_or(false);

    let mut graph = GraphIndex::new();
    for (y, row) in cells.iter().enumerate() {
        for (x, _) in row.iter().enumerate().filter(|&(_, &o)| o) {
            graph.add_vertex(Coordinate2D::new(x as i32, y as i32));
        }
    }

    for (y, row) in cells.iter().enumerate() {
        for (x, _) in row.iter().enumerate().filter(|&(_, &o)| o) {
            let here = Coordinate2D::new(x as i32, y as i32);
            if open(x + 1, y) {
                graph.add_undirected_edge(&here, &Coordinate2D::new(x as i32 + 1, y as i32))?;
            }
            if open(x, y + 1) {
                graph.add_undirected_edge(&here, &Coordinate2D::new(x as i32, y as i32 + 1))?;
            }
        }
    }

    Ok(graph)
}
