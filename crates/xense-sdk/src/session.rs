//! XR 会话：生命周期与类型化读取
//!
//! 会话只存在于"已初始化"状态：[`SessionBuilder`](crate::SessionBuilder)
//! 的 `open` 失败时不会产生 `Session` 实例，因此读取不可能发生在 init
//! 之前。`close` 在所有退出路径上恰好执行一次：显式 `close` 或 Drop，
//! 二者不会重复。

use tracing::warn;

use crate::error::{Result, RuntimeError};
use crate::runtime::XrRuntime;
use crate::types::{Hand, Pose, TrackingSnapshot};

/// XR 会话句柄（RAII）
///
/// 所有读取都是独立的非阻塞操作，返回服务端最近一次已知值。
pub struct Session {
    pub(crate) runtime: Box<dyn XrRuntime>,
    pub(crate) closed: bool,
}

impl Session {
    /// 创建 [`SessionBuilder`](crate::SessionBuilder)
    pub fn builder() -> crate::SessionBuilder {
        crate::SessionBuilder::new()
    }

    /// 头显位姿
    pub fn headset_pose(&mut self) -> Result<Pose> {
        Ok(Pose::from_array(self.runtime.headset_pose()?))
    }

    /// 手柄位姿
    pub fn controller_pose(&mut self, hand: Hand) -> Result<Pose> {
        let raw = match hand {
            Hand::Left => self.runtime.left_controller_pose()?,
            Hand::Right => self.runtime.right_controller_pose()?,
        };
        Ok(Pose::from_array(raw))
    }

    /// 扳机值 [0, 1]
    pub fn trigger(&mut self, hand: Hand) -> Result<f32> {
        let value = match hand {
            Hand::Left => self.runtime.left_trigger()?,
            Hand::Right => self.runtime.right_trigger()?,
        };
        Ok(value)
    }

    /// 握把值 [0, 1]
    pub fn grip(&mut self, hand: Hand) -> Result<f32> {
        let value = match hand {
            Hand::Left => self.runtime.left_grip()?,
            Hand::Right => self.runtime.right_grip()?,
        };
        Ok(value)
    }

    /// 一次完整的追踪快照
    ///
    /// 依次执行七次独立读取（左手柄、右手柄、头显、左右扳机、左右握把）。
    /// 字段之间没有时间一致性保证。
    pub fn snapshot(&mut self) -> Result<TrackingSnapshot> {
        Ok(TrackingSnapshot {
            left_controller: self.controller_pose(Hand::Left)?,
            right_controller: self.controller_pose(Hand::Right)?,
            headset: self.headset_pose()?,
            left_trigger: self.trigger(Hand::Left)?,
            right_trigger: self.trigger(Hand::Right)?,
            left_grip: self.grip(Hand::Left)?,
            right_grip: self.grip(Hand::Right)?,
        })
    }

    /// 显式关闭会话，返回服务端的关闭结果
    ///
    /// Drop 也会关闭会话，但会吞掉错误；需要感知关闭错误时用本方法。
    pub fn close(mut self) -> Result<()> {
        self.close_once()?;
        Ok(())
    }

    fn close_once(&mut self) -> std::result::Result<(), RuntimeError> {
        if self.closed {
            return Ok(());
        }
        // 先置位再调用：即使 close 出错也不再重试，保证恰好一次
        self.closed = true;
        self.runtime.close()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.close_once() {
            warn!(error = %e, "XR session close failed during drop");
        }
    }
}
