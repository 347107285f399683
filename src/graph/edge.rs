//! 边定义
//!
//! 边记录是不可变的 (source, target, weight) 三元组，权重变化时整体替换

use crate::error::{Error, Result};
use crate::types::{Label, Weight};
use std::fmt;

/// 有向带权边
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    /// 源顶点
    source: V,
    /// 目标顶点
    target: V,
    /// 权重（恒为正）
    weight: Weight,
}

impl<V: Label> Edge<V> {
    /// 创建新边，权重必须为正
    pub fn new(source: V, target: V, weight: Weight) -> Result<Self> {
        if weight <= 0 {
            return Err(Error::InvalidArgument(format!(
                "边 {:?} -> {:?} 的权重必须为正数, 实际为 {}",
                source, target, weight
            )));
        }
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// 获取源顶点
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 获取目标顶点
    pub fn target(&self) -> &V {
        &self.target
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否连接给定的有序点对
    pub fn connects(&self, source: &V, target: &V) -> bool {
        &self.source == source && &self.target == target
    }

    /// 顶点是否为该边的任一端点
    pub fn touches(&self, vertex: &V) -> bool {
        &self.source == vertex || &self.target == vertex
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (weight {})", self.source, self.target, self.weight)
    }
}
