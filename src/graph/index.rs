//! 图索引
//!
//! 持有顶点存储和有向邻接表，提供边插入与路径查询

use super::store::{Insertion, VertexStore};
use super::vertex::VertexId;
use super::SearchableGraph;
use crate::algorithm::PathFinder;
use crate::error::{Error, Result};
use std::fmt::Debug;
use tracing::debug;

/// 有向图索引
///
/// 邻接表与顶点槽位一一对应，`adjacency[id]` 按插入顺序保存出边目标。
/// 不做内部同步，并发访问需由调用方整体加锁。
#[derive(Debug, Clone)]
pub struct GraphIndex<T> {
    /// 顶点存储
    store: VertexStore<T>,
    /// 出边邻接表
    adjacency: Vec<Vec<VertexId>>,
    /// 边数量（含平行边）
    edge_count: usize,
}

impl<T: Ord> GraphIndex<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            store: VertexStore::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// 按预估顶点数预分配
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            store: VertexStore::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点（幂等）
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        self.insert_vertex(value).id()
    }

    /// 添加顶点并返回是否为新插入
    pub fn insert_vertex(&mut self, value: T) -> Insertion {
        let insertion = self.store.insert(value);
        if let Insertion::Inserted(id) = insertion {
            debug_assert_eq!(id.index(), self.adjacency.len());
            self.adjacency.push(Vec::new());
            debug!(vertex = %id, "添加顶点");
        }
        insertion
    }

    /// 判断顶点是否存在
    pub fn contains(&self, value: &T) -> bool {
        self.store.exists(value)
    }

    /// 按值升序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.store.iter()
    }

    /// 获取顶点存储
    pub fn store(&self) -> &VertexStore<T> {
        &self.store
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    // ==================== 边操作 ====================

    /// 添加有向边，两个端点必须已存在
    ///
    /// 失败时图保持不变；平行边不去重，每次调用都会追加一条。
    pub fn add_edge(&mut self, from: &T, to: &T) -> Result<()>
    where
        T: Debug,
    {
        let src = self.require(from)?;
        let dst = self.require(to)?;

        self.adjacency[src.index()].push(dst);
        self.edge_count += 1;
        debug!(src = %src, dst = %dst, "添加边");

        Ok(())
    }

    /// 添加无向边，即同时追加 a -> b 与 b -> a
    ///
    /// 任一端点不存在时两个方向都不写入；自环只追加一条。
    pub fn add_undirected_edge(&mut self, a: &T, b: &T) -> Result<()>
    where
        T: Debug,
    {
        let u = self.require(a)?;
        let v = self.require(b)?;

        self.adjacency[u.index()].push(v);
        self.edge_count += 1;
        if u != v {
            self.adjacency[v.index()].push(u);
            self.edge_count += 1;
        }
        debug!(a = %u, b = %v, "添加无向边");

        Ok(())
    }

    fn require(&self, value: &T) -> Result<VertexId>
    where
        T: Debug,
    {
        self.store.id_of(value).ok_or_else(|| {
            debug!(value = ?value, "边端点不存在");
            Error::UnknownVertex(format!("{:?}", value))
        })
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 获取出边邻居（按边插入顺序）
    pub fn neighbors(&self, value: &T) -> Vec<&T> {
        match self.store.id_of(value) {
            Some(id) => self
                .neighbor_ids(id)
                .iter()
                .filter_map(|&n| self.value_of(n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, value: &T) -> usize {
        self.store
            .id_of(value)
            .map(|id| self.neighbor_ids(id).len())
            .unwrap_or(0)
    }

    /// 按 ID 获取出边目标
    pub(crate) fn neighbor_ids(&self, id: VertexId) -> &[VertexId] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ==================== 路径查询 ====================

    /// 邻接表与遍历结果中的 ID 均来自本存储，查找失败即为内部错误
    fn value_of(&self, id: VertexId) -> Option<&T> {
        let value = self.store.get(id);
        debug_assert!(value.is_ok(), "邻接表引用了不存在的顶点 {}", id);
        value.ok()
    }

    /// 把 ID 序列映射回顶点值
    fn resolve(&self, ids: &[VertexId]) -> Vec<T>
    where
        T: Clone,
    {
        ids.iter()
            .filter_map(|&id| self.value_of(id).cloned())
            .collect()
    }

    fn endpoints(&self, start: &T, end: &T) -> Option<(VertexId, VertexId)> {
        Some((self.store.id_of(start)?, self.store.id_of(end)?))
    }

    /// BFS 最短路径（按边数），无路径时返回空序列
    pub fn shortest_path(&self, start: &T, end: &T) -> Vec<T>
    where
        T: Clone,
    {
        self.endpoints(start, end)
            .and_then(|(s, e)| PathFinder::new(self).shortest_path(s, e))
            .map(|path| self.resolve(&path.vertices))
            .unwrap_or_default()
    }

    /// DFS 路径（不保证最短），无路径时返回空序列
    pub fn dfs_path(&self, start: &T, end: &T) -> Vec<T>
    where
        T: Clone,
    {
        self.endpoints(start, end)
            .and_then(|(s, e)| PathFinder::new(self).dfs_path(s, e))
            .map(|path| self.resolve(&path.vertices))
            .unwrap_or_default()
    }

    /// BFS 可达顶点（含起点，按发现顺序）
    pub fn bfs_reachable(&self, start: &T) -> Vec<T>
    where
        T: Clone,
    {
        match self.store.id_of(start) {
            Some(s) => self.resolve(&PathFinder::new(self).bfs_reachable(s)),
            None => Vec::new(),
        }
    }

    /// DFS 可达顶点（含起点，按发现顺序）
    pub fn dfs_reachable(&self, start: &T) -> Vec<T>
    where
        T: Clone,
    {
        match self.store.id_of(start) {
            Some(s) => self.resolve(&PathFinder::new(self).dfs_reachable(s)),
            None => Vec::new(),
        }
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: &T, end: &T) -> bool {
        self.endpoints(start, end)
            .map(|(s, e)| PathFinder::new(self).is_reachable(s, e))
            .unwrap_or(false)
    }

    /// 恰好 n 跳可达的顶点（按值升序）
    pub fn n_hop_neighbors(&self, start: &T, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        let Some(s) = self.store.id_of(start) else {
            return Vec::new();
        };
        let hops = PathFinder::new(self).n_hop_neighbors(s, n);
        let mut values = self.resolve(&hops);
        values.sort();
        values
    }
}

impl<T: Ord> Default for GraphIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone + Debug> SearchableGraph<T> for GraphIndex<T> {
    type VertexId = VertexId;

    fn add_vertex(&mut self, value: T) -> VertexId {
        GraphIndex::add_vertex(self, value)
    }

    fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        GraphIndex::add_edge(self, from, to)
    }

    fn shortest_path(&self, start: &T, end: &T) -> Vec<T> {
        GraphIndex::shortest_path(self, start, end)
    }

    fn contains(&self, value: &T) -> bool {
        GraphIndex::contains(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> GraphIndex<i32> {
        let mut graph = GraphIndex::new();
        for v in [5, 3, 8, 1] {
            graph.add_vertex(v);
        }

        graph.add_edge(&1, &3).unwrap();
        graph.add_edge(&3, &5).unwrap();
        graph.add_edge(&5, &8).unwrap();
        graph.add_edge(&1, &8).unwrap();

        graph
    }

    #[test]
    fn test_graph_basic() {
        let graph = create_test_graph();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_shortest_path_scenario() {
        let graph = create_test_graph();

        assert_eq!(graph.shortest_path(&1, &8), vec![1, 8]);
        assert_eq!(graph.shortest_path(&3, &8), vec![3, 5, 8]);
        // 有向边，不存在反向路径
        assert!(graph.shortest_path(&3, &1).is_empty());
    }

    #[test]
    fn test_shortest_path_degenerate() {
        let graph = create_test_graph();

        assert_eq!(graph.shortest_path(&5, &5), vec![5]);
        assert!(graph.shortest_path(&42, &42).is_empty());
    }

    #[test]
    fn test_shortest_path_unknown_endpoint() {
        let graph = create_test_graph();

        assert!(graph.shortest_path(&0, &8).is_empty());
        assert!(graph.shortest_path(&1, &9).is_empty());
    }

    #[test]
    fn test_add_edge_unknown_vertex() {
        let mut graph = create_test_graph();

        let err = graph.add_edge(&1, &99).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex(ref v) if v == "99"));
        assert!(matches!(graph.add_edge(&99, &1), Err(Error::UnknownVertex(_))));

        // 失败不留下部分状态
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.out_degree(&1), 2);
        assert!(!graph.contains(&99));
    }

    #[test]
    fn test_add_edge_one_step() {
        let mut graph = GraphIndex::new();
        graph.add_vertex("x");
        graph.add_vertex("y");
        graph.add_edge(&"x", &"y").unwrap();

        assert_eq!(graph.neighbors(&"x"), vec![&"y"]);
        assert!(graph.neighbors(&"y").is_empty());
        assert_eq!(graph.shortest_path(&"x", &"y"), vec!["x", "y"]);
    }

    #[test]
    fn test_parallel_edges_not_deduplicated() {
        let mut graph = GraphIndex::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&1, &2).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.out_degree(&1), 2);
        assert_eq!(graph.neighbors(&1), vec![&2, &2]);
        assert_eq!(graph.shortest_path(&1, &2), vec![1, 2]);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = GraphIndex::new();
        graph.add_vertex('a');
        graph.add_edge(&'a', &'a').unwrap();

        assert_eq!(graph.out_degree(&'a'), 1);
        assert_eq!(graph.shortest_path(&'a', &'a'), vec!['a']);
    }

    #[test]
    fn test_add_undirected_edge() {
        let mut graph = GraphIndex::new();
        for c in ['a', 'b', 'c'] {
            graph.add_vertex(c);
        }
        graph.add_undirected_edge(&'a', &'b').unwrap();
        graph.add_edge(&'b', &'c').unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(&'a'), vec![&'b']);
        assert_eq!(graph.neighbors(&'b'), vec![&'a', &'c']);
        assert_eq!(graph.shortest_path(&'b', &'a'), vec!['b', 'a']);
        assert_eq!(graph.shortest_path(&'c', &'a'), Vec::<char>::new());
    }

    #[test]
    fn test_add_undirected_edge_unknown_vertex() {
        let mut graph = GraphIndex::new();
        graph.add_vertex(1);
        graph.add_vertex(2);

        assert!(matches!(
            graph.add_undirected_edge(&1, &3),
            Err(Error::UnknownVertex(ref v)) if v == "3"
        ));
        assert!(matches!(graph.add_undirected_edge(&3, &1), Err(Error::UnknownVertex(_))));

        // 两个方向都未写入
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.out_degree(&1), 0);
        assert_eq!(graph.out_degree(&2), 0);
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph = GraphIndex::new();
        graph.add_vertex(7);
        graph.add_undirected_edge(&7, &7).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&7), vec![&7]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "邻接表引用了不存在的顶点")]
    fn test_dangling_adjacency_panics_in_debug() {
        let mut graph = create_test_graph();
        // 人为写入越界 ID，破坏端点必须存在的不变量
        graph.adjacency[0].push(VertexId::new(42));

        let _ = graph.neighbors(&5);
    }

    #[test]
    fn test_insert_vertex_reports_insertion() {
        let mut graph = GraphIndex::new();

        assert!(graph.insert_vertex(4).is_inserted());
        let again = graph.insert_vertex(4);
        assert!(!again.is_inserted());
        assert_eq!(again.id(), graph.add_vertex(4));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = create_test_graph();
        let id = graph.store().id_of(&3).unwrap();

        assert_eq!(graph.add_vertex(3), id);
        assert_eq!(graph.vertex_count(), 4);
        // 重复插入不影响已有出边
        assert_eq!(graph.neighbors(&3), vec![&5]);
    }

    #[test]
    fn test_searchable_graph_trait() {
        fn build<G: SearchableGraph<char>>(graph: &mut G) {
            for c in ['c', 'a', 'b'] {
                graph.add_vertex(c);
            }
            graph.add_edge(&'a', &'b').unwrap();
            graph.add_edge(&'b', &'c').unwrap();
        }

        let mut graph = GraphIndex::new();
        build(&mut graph);

        assert!(SearchableGraph::contains(&graph, &'b'));
        assert_eq!(SearchableGraph::shortest_path(&graph, &'a', &'c'), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_traversals() {
        let graph = create_test_graph();

        assert_eq!(graph.bfs_reachable(&1), vec![1, 3, 8, 5]);
        assert_eq!(graph.dfs_reachable(&1), vec![1, 3, 8, 5]);
        assert!(graph.bfs_reachable(&100).is_empty());
        assert!(graph.is_reachable(&3, &8));
        assert!(!graph.is_reachable(&8, &3));
        assert_eq!(graph.n_hop_neighbors(&1, 1), vec![3, 8]);
        assert_eq!(graph.n_hop_neighbors(&1, 2), vec![5]);
        assert!(graph.n_hop_neighbors(&0, 1).is_empty());
    }

    #[test]
    fn test_dfs_path() {
        let graph = create_test_graph();

        let path = graph.dfs_path(&1, &8);
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&8));
        assert!(graph.dfs_path(&8, &1).is_empty());
        assert_eq!(graph.dfs_path(&3, &3), vec![3]);
    }
}
