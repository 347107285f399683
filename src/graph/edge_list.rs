//! 边列表表示
//!
//! 顶点集合 + 边记录序列。`set`、`sources`、`targets`、`remove` 均线性扫描边序列。

use super::edge::Edge;
use super::{validate_weight, Graph};
use crate::error::Result;
use crate::types::{Label, Weight, NO_EDGE};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace};

/// 基于边列表的有向带权图
#[derive(Debug, Clone)]
pub struct EdgeListGraph<V> {
    /// 顶点集合（保持插入顺序，仅影响调试输出）
    vertices: IndexSet<V>,
    /// 边记录序列
    edges: Vec<Edge<V>>,
}

impl<V: Label> EdgeListGraph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// 按容量提示创建空图
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: IndexSet::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 遍历所有边
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> {
        self.edges.iter()
    }

    /// 表示不变量检查（仅调试构建）
    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        let mut pairs = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            assert!(
                self.vertices.contains(edge.source()),
                "边的源顶点 {:?} 不在顶点集合中",
                edge.source()
            );
            assert!(
                self.vertices.contains(edge.target()),
                "边的目标顶点 {:?} 不在顶点集合中",
                edge.target()
            );
            assert!(edge.weight() > 0, "边权重必须为正数: {:?}", edge);
            assert!(
                pairs.insert((edge.source(), edge.target())),
                "重复的边 {:?} -> {:?}",
                edge.source(),
                edge.target()
            );
        }
    }
}

impl<V: Label> Default for EdgeListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label> Graph<V> for EdgeListGraph<V> {
    fn add(&mut self, vertex: V) -> bool {
        let added = self.vertices.insert(vertex);
        #[cfg(debug_assertions)]
        self.check_rep();
        added
    }

    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight> {
        validate_weight(&source, &target, weight)?;

        self.vertices.insert(source.clone());
        self.vertices.insert(target.clone());

        let position = self.edges.iter().position(|e| e.connects(&source, &target));
        let previous = match position {
            Some(index) => {
                let previous = self.edges[index].weight();
                if weight == NO_EDGE {
                    self.edges.remove(index);
                } else {
                    self.edges[index] = Edge::new(source.clone(), target.clone(), weight)?;
                }
                previous
            }
            None => {
                if weight > 0 {
                    let edge = Edge::new(source.clone(), target.clone(), weight)?;
                    self.edges.push(edge);
                }
                NO_EDGE
            }
        };

        trace!(?source, ?target, weight, previous, "设置边");
        #[cfg(debug_assertions)]
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &V) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));
        debug!(?vertex, dropped = before - self.edges.len(), "删除顶点");

        #[cfg(debug_assertions)]
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &V) -> HashMap<V, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }
}

impl<V: Label + fmt::Display> fmt::Display for EdgeListGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: [")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Edges:")?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}
