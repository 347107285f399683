//! 顶点定义
//!
//! 邻接表示中的顶点记录：标签 + 自有的出边映射（目标标签 -> 权重）。
//! 记录只持有其他顶点的标签，从不引用其他记录。

use crate::error::{Error, Result};
use crate::types::{Label, Weight, NO_EDGE};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// 顶点记录
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    /// 顶点标签
    label: V,
    /// 出边：目标标签 -> 权重（保持插入顺序）
    edges: IndexMap<V, Weight>,
}

impl<V: Label> Vertex<V> {
    /// 创建无出边的顶点
    pub fn new(label: V) -> Self {
        Self {
            label,
            edges: IndexMap::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &V {
        &self.label
    }

    /// 到目标顶点的边权重，无边时为 0
    pub fn weight_to(&self, target: &V) -> Weight {
        self.edges.get(target).copied().unwrap_or(NO_EDGE)
    }

    /// 新增或覆盖到目标顶点的出边，返回原权重
    pub fn set_edge(&mut self, target: V, weight: Weight) -> Result<Weight> {
        if weight <= 0 {
            return Err(Error::InvalidArgument(format!(
                "边 {:?} -> {:?} 的权重必须为正数, 实际为 {}",
                self.label, target, weight
            )));
        }
        Ok(self.edges.insert(target, weight).unwrap_or(NO_EDGE))
    }

    /// 移除到目标顶点的出边，返回原权重
    pub fn remove_edge(&mut self, target: &V) -> Weight {
        self.edges.shift_remove(target).unwrap_or(NO_EDGE)
    }

    /// 出边快照
    pub fn targets(&self) -> HashMap<V, Weight> {
        self.edges.iter().map(|(t, &w)| (t.clone(), w)).collect()
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// 遍历出边
    pub fn edges(&self) -> impl Iterator<Item = (&V, Weight)> {
        self.edges.iter().map(|(t, &w)| (t, w))
    }
}

impl<V: Label + fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {{ ", self.label)?;
        for (i, (target, weight)) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", target, weight)?;
        }
        write!(f, " }}")
    }
}
