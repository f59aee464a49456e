//! PC 服务原生后端（FFI）
//!
//! 绑定本机安装的 `xensevr_pc_service_sdk` 动态库。服务端状态是进程级
//! 全局的；这里额外维护一份初始化标记，把调用顺序错误在 SDK 层暴露为
//! 明确的 [`RuntimeError`]，而不是依赖服务端的未定义行为。

use std::ffi::c_int;

use super::{RawPose, XrRuntime};
use crate::error::RuntimeError;
use crate::types::POSE_ELEMENTS;

#[link(name = "xensevr_pc_service_sdk")]
unsafe extern "C" {
    fn xrt_init() -> c_int;
    fn xrt_get_left_controller_pose(out_pose: *mut f32) -> c_int;
    fn xrt_get_right_controller_pose(out_pose: *mut f32) -> c_int;
    fn xrt_get_headset_pose(out_pose: *mut f32) -> c_int;
    fn xrt_get_left_trigger(out_value: *mut f32) -> c_int;
    fn xrt_get_right_trigger(out_value: *mut f32) -> c_int;
    fn xrt_get_left_grip(out_value: *mut f32) -> c_int;
    fn xrt_get_right_grip(out_value: *mut f32) -> c_int;
    fn xrt_close() -> c_int;
}

/// 检查服务返回码
fn check(code: c_int) -> Result<(), RuntimeError> {
    match RuntimeError::from_status(code) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}

/// 原生运行时句柄
pub struct NativeRuntime {
    initialized: bool,
}

impl NativeRuntime {
    pub fn new() -> Self {
        Self { initialized: false }
    }

    fn read_pose(
        &mut self,
        read: unsafe extern "C" fn(*mut f32) -> c_int,
    ) -> Result<RawPose, RuntimeError> {
        if !self.initialized {
            return Err(RuntimeError::NotInitialized);
        }
        let mut out = [0.0f32; POSE_ELEMENTS];
        // SAFETY: 服务约定写满 7 个 f32，out 缓冲区正好 7 个元素
        check(unsafe { read(out.as_mut_ptr()) })?;
        Ok(out)
    }

    fn read_scalar(
        &mut self,
        read: unsafe extern "C" fn(*mut f32) -> c_int,
    ) -> Result<f32, RuntimeError> {
        if !self.initialized {
            return Err(RuntimeError::NotInitialized);
        }
        let mut out = 0.0f32;
        // SAFETY: 服务约定写入单个 f32
        check(unsafe { read(&mut out) })?;
        Ok(out)
    }
}

impl Default for NativeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl XrRuntime for NativeRuntime {
    fn init(&mut self) -> Result<(), RuntimeError> {
        if self.initialized {
            return Err(RuntimeError::AlreadyInitialized);
        }
        check(unsafe { xrt_init() })?;
        self.initialized = true;
        Ok(())
    }

    fn left_controller_pose(&mut self) -> Result<RawPose, RuntimeError> {
        self.read_pose(xrt_get_left_controller_pose)
    }

    fn right_controller_pose(&mut self) -> Result<RawPose, RuntimeError> {
        self.read_pose(xrt_get_right_controller_pose)
    }

    fn headset_pose(&mut self) -> Result<RawPose, RuntimeError> {
        self.read_pose(xrt_get_headset_pose)
    }

    fn left_trigger(&mut self) -> Result<f32, RuntimeError> {
        self.read_scalar(xrt_get_left_trigger)
    }

    fn right_trigger(&mut self) -> Result<f32, RuntimeError> {
        self.read_scalar(xrt_get_right_trigger)
    }

    fn left_grip(&mut self) -> Result<f32, RuntimeError> {
        self.read_scalar(xrt_get_left_grip)
    }

    fn right_grip(&mut self) -> Result<f32, RuntimeError> {
        self.read_scalar(xrt_get_right_grip)
    }

    fn close(&mut self) -> Result<(), RuntimeError> {
        // close 无前置条件，重复关闭由服务端自行处理
        let code = unsafe { xrt_close() };
        self.initialized = false;
        check(code)
    }
}
