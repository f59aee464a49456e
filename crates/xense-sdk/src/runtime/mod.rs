//! XR 运行时后端抽象
//!
//! 对应 PC 服务 C SDK 的九个调用：`init`、七个读取、`close`。
//! 后端只负责按服务的原始格式搬运数据；类型化由会话层完成。

use crate::error::RuntimeError;
use crate::types::POSE_ELEMENTS;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(feature = "native-service")]
pub mod native;

/// 原始位姿数组（位置 x, y, z + 四元数 qx, qy, qz, qw）
pub type RawPose = [f32; POSE_ELEMENTS];

/// XR 运行时后端统一接口
///
/// 除 `init` 和 `close` 外，所有读取都要求运行时已初始化；
/// 每个读取都是独立的非阻塞操作，返回服务端最近一次已知值。
/// `close` 没有前置条件，未初始化时调用也必须安全。
pub trait XrRuntime: Send {
    fn init(&mut self) -> Result<(), RuntimeError>;
    fn left_controller_pose(&mut self) -> Result<RawPose, RuntimeError>;
    fn right_controller_pose(&mut self) -> Result<RawPose, RuntimeError>;
    fn headset_pose(&mut self) -> Result<RawPose, RuntimeError>;
    fn left_trigger(&mut self) -> Result<f32, RuntimeError>;
    fn right_trigger(&mut self) -> Result<f32, RuntimeError>;
    fn left_grip(&mut self) -> Result<f32, RuntimeError>;
    fn right_grip(&mut self) -> Result<f32, RuntimeError>;
    fn close(&mut self) -> Result<(), RuntimeError>;
}
