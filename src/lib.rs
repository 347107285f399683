//! wgraph - 可变有向带权图
//!
//! 同一抽象数据类型的两种可互换表示：
//! - 边列表：顶点集合 + 边记录序列
//! - 邻接表：每个顶点持有自己的出边映射
//!
//! 只定义存储与修改语义，不包含图算法。

pub mod config;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use config::{GraphConfig, Representation};
pub use error::{Error, Result};
pub use graph::{AdjacencyGraph, Edge, EdgeListGraph, Graph, Vertex};
pub use types::{Label, Weight, NO_EDGE};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
