//! # Xense Tools - 共享显示与统计工具
//!
//! **依赖原则**: 只处理纯数据，不依赖 `xense-sdk`
//!
//! ## 包含模块
//!
//! - `display` - 终端显示格式化（纯函数）
//! - `rate` - 刷新率统计

pub mod display;
pub mod rate;

// 重新导出常用类型
pub use display::{analog_value, position_line, quaternion_line};
pub use rate::{RefreshRate, RefreshStatistics};
