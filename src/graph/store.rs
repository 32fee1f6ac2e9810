//! 顶点存储
//!
//! 顶点按值升序维护，插入时二分查找定位并去重。
//! 顶点本体存放在按 ID 下标的槽位中，排序视图只保存 ID，
//! 因此排序插入不会改变已有顶点的 ID。

use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use std::cmp::Ordering;

/// 插入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// 新插入的顶点
    Inserted(VertexId),
    /// 已存在等值顶点，未做修改
    Existing(VertexId),
}

impl Insertion {
    /// 插入或已存在顶点的 ID
    pub fn id(&self) -> VertexId {
        match self {
            Insertion::Inserted(id) | Insertion::Existing(id) => *id,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

/// 有序顶点存储
#[derive(Debug, Clone)]
pub struct VertexStore<T> {
    /// 顶点槽位，下标即 VertexId
    slots: Vec<Vertex<T>>,
    /// 按值升序排列的顶点 ID
    order: Vec<VertexId>,
}

impl<T: Ord> VertexStore<T> {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            order: Vec::new(),
        }
    }

    /// 预分配容量
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// 二分查找：Ok 为等值顶点所在位置，Err 为保持有序的插入位置
    fn search(&self, value: &T) -> std::result::Result<usize, usize> {
        let mut left = 0;
        let mut right = self.order.len();

        while left < right {
            let middle = left + (right - left) / 2;
            match self.slots[self.order[middle].index()].value().cmp(value) {
                Ordering::Equal => return Ok(middle),
                Ordering::Greater => right = middle,
                Ordering::Less => left = middle + 1,
            }
        }

        Err(left)
    }

    /// 插入顶点，已存在等值顶点时为空操作
    pub fn insert(&mut self, value: T) -> Insertion {
        match self.search(&value) {
            Ok(pos) => Insertion::Existing(self.order[pos]),
            Err(pos) => {
                let id = VertexId::new(self.slots.len() as u64);
                self.slots.push(Vertex::new(value));
                self.order.insert(pos, id);
                Insertion::Inserted(id)
            }
        }
    }

    /// 判断值是否存在
    pub fn exists(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// 通过值查找顶点 ID
    pub fn id_of(&self, value: &T) -> Option<VertexId> {
        self.search(value).ok().map(|pos| self.order[pos])
    }

    /// 通过 ID 获取顶点值
    pub fn get(&self, id: VertexId) -> Result<&T> {
        self.slots
            .get(id.index())
            .map(|v| v.value())
            .ok_or_else(|| Error::NotFound(format!("顶点 {}", id)))
    }

    /// 顶点数量
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 按值升序遍历
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().map(move |id| self.slots[id.index()].value())
    }

    /// 按值升序遍历顶点 ID
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }
}

impl<T: Ord> Default for VertexStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
