//! Session Builder
//!
//! 链式 API 创建 [`Session`]，负责选择后端、执行初始化和预热等待，
//! 并处理 init 失败时的清理。

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::runtime::XrRuntime;
use crate::session::Session;

/// Session Builder
///
/// # 示例
///
/// ```rust,no_run
/// use xense_sdk::SessionBuilder;
/// use std::time::Duration;
///
/// # fn main() -> xense_sdk::error::Result<()> {
/// // 使用默认配置（native-service feature 开启时连接真实 PC 服务）
/// let session = SessionBuilder::new().open()?;
///
/// // 缩短预热等待
/// let session = SessionBuilder::new()
///     .warmup(Duration::from_millis(100))
///     .open()?;
/// # Ok(())
/// # }
/// ```
pub struct SessionBuilder {
    runtime: Option<Box<dyn XrRuntime>>,
    warmup: Duration,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            runtime: None,
            warmup: Duration::from_secs(1),
        }
    }

    /// 指定运行时后端（模拟运行时或自定义实现）
    ///
    /// 不调用时使用原生 PC 服务后端（需要 `native-service` feature）。
    pub fn with_runtime(mut self, runtime: impl XrRuntime + 'static) -> Self {
        self.runtime = Some(Box::new(runtime));
        self
    }

    /// 设置 init 之后的预热等待（默认 1 秒）
    ///
    /// 服务在 init 返回后需要一点时间填充首批追踪数据，立即读取会拿到
    /// 全零位姿。测试场景可以设为 `Duration::ZERO`。
    pub fn warmup(mut self, warmup: Duration) -> Self {
        self.warmup = warmup;
        self
    }

    /// 初始化运行时并返回会话
    ///
    /// init 失败时同样会调用一次 close（close 无前置条件），然后返回
    /// 错误；此时不可能发生任何读取。
    pub fn open(self) -> Result<Session> {
        let mut runtime = match self.runtime {
            Some(runtime) => runtime,
            None => default_runtime()?,
        };

        if let Err(init_err) = runtime.init() {
            if let Err(close_err) = runtime.close() {
                warn!(error = %close_err, "close after failed init reported an error");
            }
            return Err(init_err.into());
        }
        debug!("XR runtime initialized");

        if !self.warmup.is_zero() {
            std::thread::sleep(self.warmup);
        }

        Ok(Session {
            runtime,
            closed: false,
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "native-service")]
fn default_runtime() -> Result<Box<dyn XrRuntime>> {
    Ok(Box::new(crate::runtime::native::NativeRuntime::new()))
}

#[cfg(not(feature = "native-service"))]
fn default_runtime() -> Result<Box<dyn XrRuntime>> {
    Err(crate::error::SessionError::NoBackend)
}
