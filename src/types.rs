//! 通用类型定义

use std::fmt::Debug;
use std::hash::Hash;

/// 边权重
///
/// 存储中的边权重恒为正数；0 表示“无边”，从不落入存储。
pub type Weight = i64;

/// 无边哨兵值
pub const NO_EDGE: Weight = 0;

/// 顶点标签
///
/// 标签是不透明的标识符，除身份外不携带任何数据。
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}
