//! 路径追踪算法
//!
//! 基于顶点 ID 的无权遍历：BFS 最短路径、DFS 路径、可达性

use crate::graph::{GraphIndex, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, trace};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列（含起点和终点）
    pub vertices: Vec<VertexId>,
    /// 路径长度（边数）
    pub length: usize,
}

impl PathResult {
    fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            length: 0,
        }
    }
}

/// 路径查找器
pub struct PathFinder<'a, T> {
    graph: &'a GraphIndex<T>,
}

impl<'a, T: Ord> PathFinder<'a, T> {
    /// 创建路径查找器
    pub fn new(graph: &'a GraphIndex<T>) -> Self {
        Self { graph }
    }

    fn is_valid(&self, id: VertexId) -> bool {
        id.index() < self.graph.vertex_count()
    }

    /// BFS 最短路径查找
    ///
    /// 入队时即标记已访问，前驱只记录首次发现者；邻居按边插入顺序展开，
    /// 等长路径中优先选择先插入的边。终点被发现时立即停止。
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Option<PathResult> {
        if !self.is_valid(start) || !self.is_valid(end) {
            return None;
        }
        if start == end {
            return Some(PathResult::with_start(start));
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut parent: HashMap<VertexId, VertexId> = HashMap::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            trace!(vertex = %current, frontier = queue.len(), "展开顶点");
            for &neighbor in self.graph.neighbor_ids(current) {
                if visited.insert(neighbor) {
                    parent.insert(neighbor, current);

                    if neighbor == end {
                        let path = Self::reconstruct_path(start, end, &parent);
                        debug!(
                            start = %start,
                            end = %end,
                            length = path.length,
                            visited = visited.len(),
                            "找到最短路径"
                        );
                        return Some(path);
                    }

                    queue.push_back(neighbor);
                }
            }
        }

        debug!(start = %start, end = %end, visited = visited.len(), "无可达路径");
        None
    }

    /// 重构路径
    fn reconstruct_path(
        start: VertexId,
        end: VertexId,
        parent: &HashMap<VertexId, VertexId>,
    ) -> PathResult {
        let mut current = end;
        let mut vertices = vec![end];

        while current != start {
            match parent.get(&current) {
                Some(&prev) => {
                    vertices.push(prev);
                    current = prev;
                }
                None => break,
            }
        }

        vertices.reverse();
        let length = vertices.len() - 1;

        PathResult { vertices, length }
    }

    /// DFS 路径查找（显式栈，不保证最短）
    pub fn dfs_path(&self, start: VertexId, end: VertexId) -> Option<PathResult> {
        if !self.is_valid(start) || !self.is_valid(end) {
            return None;
        }
        if start == end {
            return Some(PathResult::with_start(start));
        }

        let mut visited = HashSet::new();
        let mut stack = vec![start];
        let mut parent: HashMap<VertexId, VertexId> = HashMap::new();
        visited.insert(start);

        while let Some(current) = stack.pop() {
            for &neighbor in self.graph.neighbor_ids(current) {
                if visited.insert(neighbor) {
                    parent.insert(neighbor, current);
                    if neighbor == end {
                        return Some(Self::reconstruct_path(start, end, &parent));
                    }
                    stack.push(neighbor);
                }
            }
        }

        None
    }

    /// BFS 可达顶点（含起点，按发现顺序）
    pub fn bfs_reachable(&self, start: VertexId) -> Vec<VertexId> {
        if !self.is_valid(start) {
            return Vec::new();
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut found = vec![start];
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &neighbor in self.graph.neighbor_ids(current) {
                if visited.insert(neighbor) {
                    found.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        found
    }

    /// DFS 可达顶点（含起点，按发现顺序）
    pub fn dfs_reachable(&self, start: VertexId) -> Vec<VertexId> {
        if !self.is_valid(start) {
            return Vec::new();
        }

        let mut visited = HashSet::new();
        let mut stack = vec![start];
        let mut found = vec![start];
        visited.insert(start);

        while let Some(current) = stack.pop() {
            for &neighbor in self.graph.neighbor_ids(current) {
                if visited.insert(neighbor) {
                    found.push(neighbor);
                    stack.push(neighbor);
                }
            }
        }

        found
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> bool {
        self.shortest_path(start, end).is_some()
    }

    /// 获取恰好 n 跳可达的邻居（BFS 距离为 n）
    pub fn n_hop_neighbors(&self, start: VertexId, n: usize) -> Vec<VertexId> {
        if !self.is_valid(start) {
            return Vec::new();
        }

        let mut current_level = vec![start];
        let mut visited = HashSet::new();
        visited.insert(start);

        for _ in 0..n {
            let mut next_level = Vec::new();
            for &vertex in &current_level {
                for &neighbor in self.graph.neighbor_ids(vertex) {
                    if visited.insert(neighbor) {
                        next_level.push(neighbor);
                    }
                }
            }
            if next_level.is_empty() {
                return next_level;
            }
            current_level = next_level;
        }

        current_level
    }
}
