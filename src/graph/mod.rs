//! 图核心模块
//!
//! 定义可变有向带权图的统一接口，以及两种可互换的内部表示：
//! - [`EdgeListGraph`]：顶点集合 + 边记录序列
//! - [`AdjacencyGraph`]：每个顶点记录持有自己的出边映射
//!
//! 两种表示对任意操作序列的可观察结果完全一致。

mod adjacency;
mod edge;
mod edge_list;
mod vertex;

pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use edge_list::EdgeListGraph;
pub use vertex::Vertex;

use crate::config::{GraphConfig, Representation};
use crate::error::{Error, Result};
use crate::types::{Label, Weight, NO_EDGE};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 可变有向带权图
///
/// 顶点由不透明标签标识；边权重恒为正，权重 0 表示“无边”。
/// 所有查询返回的集合/映射都是快照，修改它们不会影响图本身。
pub trait Graph<V: Label> {
    /// 添加顶点（无边）。新插入返回 true，已存在返回 false。
    fn add(&mut self, vertex: V) -> bool;

    /// 新增、更新或删除有向边 `source -> target`，返回调用前的权重（无边为 0）。
    ///
    /// - 权重为负：返回 [`Error::InvalidArgument`](crate::Error::InvalidArgument)，图保持不变
    /// - 不存在的端点会先被隐式添加
    /// - 权重为正：创建或覆盖该边
    /// - 权重为 0：删除该边（若存在）
    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight>;

    /// 删除顶点及所有以其为源或目标的边。顶点不存在时返回 false。
    fn remove(&mut self, vertex: &V) -> bool;

    /// 所有顶点标签的快照，无顺序保证
    fn vertices(&self) -> HashSet<V>;

    /// 所有指向 `target` 的源顶点及对应边权重
    fn sources(&self, target: &V) -> HashMap<V, Weight>;

    /// `source` 指向的所有目标顶点及对应边权重
    fn targets(&self, source: &V) -> HashMap<V, Weight>;

    /// 顶点是否存在
    fn contains(&self, vertex: &V) -> bool {
        self.vertices().contains(vertex)
    }

    /// 边 `source -> target` 的权重，无边为 0
    fn weight(&self, source: &V, target: &V) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(NO_EDGE)
    }
}

impl<V: Label, G: Graph<V> + ?Sized> Graph<V> for Box<G> {
    fn add(&mut self, vertex: V) -> bool {
        (**self).add(vertex)
    }

    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight> {
        (**self).set(source, target, weight)
    }

    fn remove(&mut self, vertex: &V) -> bool {
        (**self).remove(vertex)
    }

    fn vertices(&self) -> HashSet<V> {
        (**self).vertices()
    }

    fn sources(&self, target: &V) -> HashMap<V, Weight> {
        (**self).sources(target)
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        (**self).targets(source)
    }

    fn contains(&self, vertex: &V) -> bool {
        (**self).contains(vertex)
    }

    fn weight(&self, source: &V, target: &V) -> Weight {
        (**self).weight(source, target)
    }
}

/// 校验 `set` 的权重参数：负权重被拒绝
pub(crate) fn validate_weight<V: Label>(source: &V, target: &V, weight: Weight) -> Result<()> {
    if weight < 0 {
        debug!(?source, ?target, weight, "拒绝负权重");
        return Err(Error::InvalidArgument(format!(
            "边 {:?} -> {:?} 的权重不能为负数, 实际为 {}",
            source, target, weight
        )));
    }
    Ok(())
}

/// 按配置构建图
pub fn build<V: Label + 'static>(config: &GraphConfig) -> Box<dyn Graph<V>> {
    debug!(
        representation = ?config.representation,
        vertex_capacity = config.vertex_capacity,
        edge_capacity = config.edge_capacity,
        "构建图"
    );
    match config.representation {
        Representation::EdgeList => Box::new(EdgeListGraph::with_capacity(
            config.vertex_capacity,
            config.edge_capacity,
        )),
        Representation::Adjacency => {
            Box::new(AdjacencyGraph::with_capacity(config.vertex_capacity))
        }
    }
}

/// 使用默认表示创建空图
pub fn empty<V: Label + 'static>() -> Box<dyn Graph<V>> {
    build(&GraphConfig::default())
}
