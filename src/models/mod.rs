//! 数据模型模块

mod api;

pub use api::*;
