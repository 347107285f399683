//! 邻接表表示
//!
//! 每个顶点记录持有自己的出边映射。顶点记录按标签存放在保持插入顺序的
//! `IndexMap` 中，定位记录为 O(1)；`sources` 需要扫描所有记录。

use super::vertex::Vertex;
use super::{validate_weight, Graph};
use crate::error::Result;
use crate::types::{Label, Weight, NO_EDGE};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace};

/// 基于邻接表的有向带权图
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    /// 标签 -> 顶点记录
    records: IndexMap<V, Vertex<V>>,
}

impl<V: Label> AdjacencyGraph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 按顶点容量提示创建空图
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            records: IndexMap::with_capacity(vertices),
        }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.records.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.records.values().map(Vertex::out_degree).sum()
    }

    /// 获取顶点记录
    pub fn vertex(&self, label: &V) -> Option<&Vertex<V>> {
        self.records.get(label)
    }

    /// 定位或创建顶点记录，返回其在 `records` 中的位置
    fn find_or_add(&mut self, label: V) -> usize {
        match self.records.entry(label) {
            Entry::Occupied(occupied) => occupied.index(),
            Entry::Vacant(vacant) => {
                let index = vacant.index();
                let label = vacant.key().clone();
                vacant.insert(Vertex::new(label));
                index
            }
        }
    }

    /// 表示不变量检查（仅调试构建）
    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        for (label, record) in &self.records {
            assert_eq!(label, record.label(), "顶点记录的标签与索引键不一致");
            for (target, weight) in record.edges() {
                assert!(
                    self.records.contains_key(target),
                    "边 {:?} -> {:?} 的目标顶点不存在",
                    label,
                    target
                );
                assert!(weight > 0, "边 {:?} -> {:?} 的权重必须为正数", label, target);
            }
        }
    }
}

impl<V: Label> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label> Graph<V> for AdjacencyGraph<V> {
    fn add(&mut self, vertex: V) -> bool {
        if self.records.contains_key(&vertex) {
            return false;
        }
        self.records.insert(vertex.clone(), Vertex::new(vertex));
        #[cfg(debug_assertions)]
        self.check_rep();
        true
    }

    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight> {
        validate_weight(&source, &target, weight)?;

        let index = self.find_or_add(source.clone());
        self.find_or_add(target.clone());
        let record = &mut self.records[index];
        let previous = if weight == NO_EDGE {
            record.remove_edge(&target)
        } else {
            record.set_edge(target.clone(), weight)?
        };

        trace!(?source, ?target, weight, previous, "设置边");
        #[cfg(debug_assertions)]
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &V) -> bool {
        let Some(removed) = self.records.shift_remove(vertex) else {
            return false;
        };

        let mut incoming = 0;
        for record in self.records.values_mut() {
            if record.remove_edge(vertex) != NO_EDGE {
                incoming += 1;
            }
        }
        debug!(
            ?vertex,
            dropped = removed.out_degree() + incoming,
            "删除顶点"
        );

        #[cfg(debug_assertions)]
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.records.keys().cloned().collect()
    }

    fn sources(&self, target: &V) -> HashMap<V, Weight> {
        self.records
            .values()
            .filter_map(|record| {
                let weight = record.weight_to(target);
                (weight > 0).then(|| (record.label().clone(), weight))
            })
            .collect()
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        self.records
            .get(source)
            .map(Vertex::targets)
            .unwrap_or_default()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.records.contains_key(vertex)
    }
}

impl<V: Label + fmt::Display> fmt::Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices:")?;
        for record in self.records.values() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
