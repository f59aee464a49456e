//! Prelude - 常用类型的便捷导入
//!
//! 大多数用户应该使用这个模块来导入常用类型：
//!
//! ```rust
//! use xense_sdk::prelude::*;
//! ```

pub use crate::builder::SessionBuilder;
pub use crate::session::Session;
pub use crate::types::{Hand, Pose, TrackingSnapshot};

// 运行时后端 Trait（自定义后端时实现）
pub use crate::runtime::XrRuntime;

// 错误类型
pub use crate::error::{RuntimeError, ServiceError, SessionError};

#[cfg(any(test, feature = "mock"))]
pub use crate::runtime::mock::{MockProbe, MockRuntime};

#[cfg(feature = "native-service")]
pub use crate::runtime::native::NativeRuntime;
