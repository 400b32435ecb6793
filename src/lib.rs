//! zcanvas - 浮动编辑窗口画布引擎
//!
//! 模块结构：
//! - kernel: 无头核心（State, Action, Effect, Store）
//! - app: 应用层（Canvas 外壳：执行 Effect、轮询防抖）
//! - logging: tracing 初始化

pub mod app;
pub mod kernel;
pub mod logging;
