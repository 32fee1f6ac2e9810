//! 顶点定义
//!
//! 顶点由值唯一确定，`VertexId` 是其在存储中的稳定句柄

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（存储内唯一，插入后不变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// 作为存储槽位下标
    pub(crate) fn index(&self) -> usize {
        self.as_u64() as usize
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 顶点
///
/// 只持有值；ID 由所在槽位决定
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    /// 顶点值（插入后不可变）
    value: T,
}

impl<T> Vertex<T> {
    /// 创建新顶点
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// 获取顶点值
    pub fn value(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_basic() {
        let v = Vertex::new("a".to_string());
        let id = VertexId::new(3);

        assert_eq!(v.value(), "a");
        assert_eq!(id.as_u64(), 3);
        assert_eq!(id.index(), 3);
    }

    #[test]
    fn test_vertex_id_display() {
        assert_eq!(VertexId::from(7).to_string(), "#7");
        assert!(VertexId::new(1) < VertexId::new(2));
    }
}
