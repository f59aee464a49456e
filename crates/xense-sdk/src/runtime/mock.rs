//! 模拟运行时（开发与测试）
//!
//! 不依赖真实 PC 服务。输出由内部 tick 计数驱动的确定性轨迹：
//! 相同的调用序列总是得到相同的数据，测试可以精确断言。
//! 支持注入 init 失败和第 N 次读取之后的读取失败，并通过
//! [`MockProbe`] 暴露调用计数。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{RawPose, XrRuntime};
use crate::error::{RuntimeError, ServiceError, ServiceErrorKind};

/// 头显基准位置（站立高度）
const HEADSET_BASE: [f32; 3] = [0.0, 1.65, 0.0];
/// 左手柄基准位置
const LEFT_BASE: [f32; 3] = [-0.25, 1.05, -0.35];
/// 右手柄基准位置
const RIGHT_BASE: [f32; 3] = [0.25, 1.05, -0.35];

/// 调用计数（测试通过 [`MockProbe`] 观察）
#[derive(Debug, Default)]
struct MockCounters {
    init_calls: AtomicU64,
    read_calls: AtomicU64,
    close_calls: AtomicU64,
}

/// 调用计数的只读句柄
///
/// 运行时被移入会话之后，测试仍可通过事先克隆的句柄读取计数。
#[derive(Debug, Clone)]
pub struct MockProbe {
    counters: Arc<MockCounters>,
}

impl MockProbe {
    pub fn init_calls(&self) -> u64 {
        self.counters.init_calls.load(Ordering::Relaxed)
    }

    pub fn read_calls(&self) -> u64 {
        self.counters.read_calls.load(Ordering::Relaxed)
    }

    pub fn close_calls(&self) -> u64 {
        self.counters.close_calls.load(Ordering::Relaxed)
    }
}

/// 模拟运行时
pub struct MockRuntime {
    initialized: bool,
    tick: u64,
    fail_init: Option<ServiceErrorKind>,
    fail_reads_after: Option<u64>,
    counters: Arc<MockCounters>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            initialized: false,
            tick: 0,
            fail_init: None,
            fail_reads_after: None,
            counters: Arc::new(MockCounters::default()),
        }
    }

    /// 让 `init` 返回指定分类的服务错误（初始化失败路径测试）
    pub fn fail_init(mut self, kind: ServiceErrorKind) -> Self {
        self.fail_init = Some(kind);
        self
    }

    /// 前 `reads` 次读取成功，之后的读取返回 TrackingLost
    pub fn fail_reads_after(mut self, reads: u64) -> Self {
        self.fail_reads_after = Some(reads);
        self
    }

    /// 获取调用计数句柄（在把运行时交给会话之前克隆）
    pub fn probe(&self) -> MockProbe {
        MockProbe {
            counters: self.counters.clone(),
        }
    }

    /// 读取前置检查：初始化状态、计数、失败注入，然后推进 tick
    fn begin_read(&mut self) -> Result<(), RuntimeError> {
        if !self.initialized {
            return Err(RuntimeError::NotInitialized);
        }
        let reads = self.counters.read_calls.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(limit) = self.fail_reads_after {
            if reads > limit {
                return Err(ServiceError::new(
                    ServiceErrorKind::TrackingLost,
                    "simulated tracking loss",
                )
                .into());
            }
        }
        self.tick += 1;
        Ok(())
    }

    /// 基准位置附近的小幅摆动 + 缓慢的偏航振荡
    fn animated_pose(&self, base: [f32; 3]) -> RawPose {
        let phase = self.tick as f32 * 0.02;
        let yaw = 0.1 * phase.sin();
        let half = yaw * 0.5;
        [
            base[0] + 0.05 * phase.sin(),
            base[1] + 0.02 * (phase * 0.5).cos(),
            base[2],
            0.0,
            half.sin(),
            0.0,
            half.cos(),
        ]
    }

    /// [0, 1] 范围内的正弦扫描
    fn animated_analog(&self, phase_offset: f32) -> f32 {
        let phase = self.tick as f32 * 0.05 + phase_offset;
        (0.5 + 0.5 * phase.sin()).clamp(0.0, 1.0)
    }
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl XrRuntime for MockRuntime {
    fn init(&mut self) -> Result<(), RuntimeError> {
        self.counters.init_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(kind) = self.fail_init {
            return Err(ServiceError::new(kind, "simulated init failure").into());
        }
        if self.initialized {
            return Err(RuntimeError::AlreadyInitialized);
        }
        self.initialized = true;
        Ok(())
    }

    fn left_controller_pose(&mut self) -> Result<RawPose, RuntimeError> {
        self.begin_read()?;
        Ok(self.animated_pose(LEFT_BASE))
    }

    fn right_controller_pose(&mut self) -> Result<RawPose, RuntimeError> {
        self.begin_read()?;
        Ok(self.animated_pose(RIGHT_BASE))
    }

    fn headset_pose(&mut self) -> Result<RawPose, RuntimeError> {
        self.begin_read()?;
        Ok(self.animated_pose(HEADSET_BASE))
    }

    fn left_trigger(&mut self) -> Result<f32, RuntimeError> {
        self.begin_read()?;
        Ok(self.animated_analog(0.0))
    }

    fn right_trigger(&mut self) -> Result<f32, RuntimeError> {
        self.begin_read()?;
        Ok(self.animated_analog(1.0))
    }

    fn left_grip(&mut self) -> Result<f32, RuntimeError> {
        self.begin_read()?;
        Ok(self.animated_analog(2.0))
    }

    fn right_grip(&mut self) -> Result<f32, RuntimeError> {
        self.begin_read()?;
        Ok(self.animated_analog(3.0))
    }

    fn close(&mut self) -> Result<(), RuntimeError> {
        // close 无前置条件：未初始化时调用同样计数并成功返回
        self.counters.close_calls.fetch_add(1, Ordering::Relaxed);
        self.initialized = false;
        Ok(())
    }
}
