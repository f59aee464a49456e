//! 错误类型与服务状态码定义

use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror::Error;

/// PC 服务返回的状态码
///
/// 与 C SDK 头文件中的定义一致：0 表示成功，负值表示错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum ServiceStatus {
    /// 成功
    Ok = 0,
    /// 尚未调用 init（或 init 失败后继续调用了读取接口）
    NotInitialized = -1,
    /// 重复调用 init
    AlreadyInitialized = -2,
    /// PC 服务未运行或连接断开
    ServiceUnavailable = -3,
    /// 头显或手柄未连接
    DeviceNotFound = -4,
    /// 追踪丢失（设备在但暂时拿不到位姿）
    TrackingLost = -5,
    /// 服务内部错误
    InternalError = -128,
}

/// 服务/后端错误的结构化分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    Unknown,
    Unavailable,
    DeviceNotFound,
    TrackingLost,
    InvalidResponse,
    Internal,
}

/// 结构化服务错误
#[derive(Error, Debug, Clone)]
#[error("{kind:?}: {message}")]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: String,
}

impl ServiceError {
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// 致命错误：重试不会有结果，应当结束会话
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::Unavailable | ServiceErrorKind::DeviceNotFound
        )
    }
}

impl From<String> for ServiceError {
    fn from(message: String) -> Self {
        Self::new(ServiceErrorKind::Unknown, message)
    }
}

impl From<&str> for ServiceError {
    fn from(message: &str) -> Self {
        Self::new(ServiceErrorKind::Unknown, message)
    }
}

/// 运行时层统一错误类型
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// 服务端错误
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// 调用顺序错误：init 之前发起了读取
    #[error("Runtime not initialized")]
    NotInitialized,

    /// 重复初始化
    #[error("Runtime already initialized")]
    AlreadyInitialized,

    /// 服务返回了未知状态码
    #[error("Unknown service status code: {0}")]
    UnknownStatus(i32),
}

impl RuntimeError {
    /// 将服务状态码转换为错误；`Ok`(0) 返回 `None`
    pub fn from_status(code: i32) -> Option<RuntimeError> {
        match ServiceStatus::try_from(code) {
            Ok(ServiceStatus::Ok) => None,
            Ok(ServiceStatus::NotInitialized) => Some(RuntimeError::NotInitialized),
            Ok(ServiceStatus::AlreadyInitialized) => Some(RuntimeError::AlreadyInitialized),
            Ok(ServiceStatus::ServiceUnavailable) => Some(
                ServiceError::new(ServiceErrorKind::Unavailable, "XR service is not running")
                    .into(),
            ),
            Ok(ServiceStatus::DeviceNotFound) => Some(
                ServiceError::new(
                    ServiceErrorKind::DeviceNotFound,
                    "headset or controller not connected",
                )
                .into(),
            ),
            Ok(ServiceStatus::TrackingLost) => Some(
                ServiceError::new(ServiceErrorKind::TrackingLost, "tracking lost").into(),
            ),
            Ok(ServiceStatus::InternalError) => Some(
                ServiceError::new(ServiceErrorKind::Internal, "service internal error").into(),
            ),
            Err(_) => Some(RuntimeError::UnknownStatus(code)),
        }
    }
}

/// 会话层错误类型
#[derive(Error, Debug)]
pub enum SessionError {
    /// 运行时错误
    #[error("XR runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// 没有可用的运行时后端
    #[error(
        "no runtime backend available: enable the `native-service` feature \
         or supply one via `SessionBuilder::with_runtime`"
    )]
    NoBackend,
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// 状态码与 i32 的往返转换
    #[test]
    fn test_service_status_roundtrip() {
        for status in [
            ServiceStatus::Ok,
            ServiceStatus::NotInitialized,
            ServiceStatus::AlreadyInitialized,
            ServiceStatus::ServiceUnavailable,
            ServiceStatus::DeviceNotFound,
            ServiceStatus::TrackingLost,
            ServiceStatus::InternalError,
        ] {
            let code: i32 = status.into();
            assert_eq!(ServiceStatus::try_from(code).unwrap(), status);
        }
    }

    /// 未知状态码被拒绝
    #[test]
    fn test_service_status_unknown_code() {
        assert!(ServiceStatus::try_from(-42).is_err());
        assert!(ServiceStatus::try_from(1).is_err());
    }

    #[test]
    fn test_from_status_ok_is_none() {
        assert!(RuntimeError::from_status(0).is_none());
    }

    #[test]
    fn test_from_status_maps_ordering_errors() {
        assert!(matches!(
            RuntimeError::from_status(-1),
            Some(RuntimeError::NotInitialized)
        ));
        assert!(matches!(
            RuntimeError::from_status(-2),
            Some(RuntimeError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_from_status_maps_service_errors() {
        match RuntimeError::from_status(-3) {
            Some(RuntimeError::Service(e)) => {
                assert_eq!(e.kind, ServiceErrorKind::Unavailable);
                assert!(e.is_fatal());
            }
            other => panic!("expected Service variant, got {other:?}"),
        }

        match RuntimeError::from_status(-5) {
            Some(RuntimeError::Service(e)) => {
                assert_eq!(e.kind, ServiceErrorKind::TrackingLost);
                assert!(!e.is_fatal());
            }
            other => panic!("expected Service variant, got {other:?}"),
        }
    }

    #[test]
    fn test_from_status_unknown_code() {
        assert!(matches!(
            RuntimeError::from_status(-99),
            Some(RuntimeError::UnknownStatus(-99))
        ));
    }

    /// 测试 Display 实现
    #[test]
    fn test_error_display() {
        let err = RuntimeError::NotInitialized;
        assert_eq!(format!("{err}"), "Runtime not initialized");

        let err: RuntimeError =
            ServiceError::new(ServiceErrorKind::DeviceNotFound, "no headset").into();
        let msg = format!("{err}");
        assert!(msg.contains("DeviceNotFound") && msg.contains("no headset"));

        let err = SessionError::Runtime(RuntimeError::UnknownStatus(-7));
        assert!(format!("{err}").contains("-7"));
    }
}
