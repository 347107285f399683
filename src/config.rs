//! 图配置
//!
//! 选择底层表示并提供预分配容量提示

use serde::{Deserialize, Serialize};

/// 图的内部表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// 顶点集合 + 边记录序列
    EdgeList,
    /// 每个顶点持有自己的出边映射
    #[default]
    Adjacency,
}

/// 图配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 内部表示
    pub representation: Representation,
    /// 预分配的顶点容量
    pub vertex_capacity: usize,
    /// 预分配的边容量（邻接表示中忽略）
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub fn new(representation: Representation) -> Self {
        Self {
            representation,
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, vertices: usize, edges: usize) -> Self {
        self.vertex_capacity = vertices;
        self.edge_capacity = edges;
        self
    }
}
