//! Xense SDK - XenseVR PC 服务 Rust SDK
//!
//! 通过本机的 XenseVR PC 服务读取头显与手柄的追踪数据（位姿、扳机、握把）。
//!
//! # 架构设计
//!
//! 本 SDK 采用分层架构，从底层到高层：
//!
//! - **运行时层** (`runtime`): 后端抽象，对应 PC 服务 C SDK 的九个调用
//!   （`init`、七个读取、`close`），提供原生 FFI 后端和模拟后端
//! - **会话层** (`session`): RAII 会话句柄，类型化读取接口，
//!   保证 close 在所有退出路径上恰好执行一次
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use xense_sdk::prelude::*;
//!
//! # fn main() -> xense_sdk::error::Result<()> {
//! let mut session = SessionBuilder::new().open()?;
//! let pose = session.headset_pose()?;
//! let trigger = session.trigger(Hand::Left)?;
//! session.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! 没有安装 PC 服务的机器可以使用模拟运行时（`mock` feature，默认开启）：
//!
//! ```rust
//! use xense_sdk::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> xense_sdk::error::Result<()> {
//! let mut session = SessionBuilder::new()
//!     .with_runtime(MockRuntime::new())
//!     .warmup(Duration::ZERO)
//!     .open()?;
//! let snapshot = session.snapshot()?;
//! assert!((0.0..=1.0).contains(&snapshot.left_trigger));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod runtime;
pub mod session;
pub mod types;

// Prelude 模块
pub mod prelude;

// 重新导出常用类型
pub use builder::SessionBuilder;
pub use error::{RuntimeError, ServiceError, ServiceErrorKind, ServiceStatus, SessionError};
pub use runtime::{RawPose, XrRuntime};
pub use session::Session;
pub use types::{Hand, Pose, TrackingSnapshot};

#[cfg(any(test, feature = "mock"))]
pub use runtime::mock::{MockProbe, MockRuntime};

#[cfg(feature = "native-service")]
pub use runtime::native::NativeRuntime;
