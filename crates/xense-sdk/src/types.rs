//! 数据模型：位姿与追踪快照

use serde::Serialize;

/// 位姿数组元素个数（位置 3 + 四元数 4）
pub const POSE_ELEMENTS: usize = 7;

/// 位姿：位置 + 四元数姿态
///
/// 每次读取得到的都是一次性快照，读取后即与运行时无关。
/// 四元数默认已归一化（由服务保证，SDK 不做校验）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    /// 位置 [x, y, z]（米）
    pub position: [f32; 3],
    /// 姿态四元数 [qx, qy, qz, qw]
    pub orientation: [f32; 4],
}

impl Pose {
    /// 从服务返回的 7 元素数组构造（前 3 个是位置，后 4 个是四元数）
    pub fn from_array(raw: [f32; POSE_ELEMENTS]) -> Self {
        Self {
            position: [raw[0], raw[1], raw[2]],
            orientation: [raw[3], raw[4], raw[5], raw[6]],
        }
    }

    /// 转回 7 元素数组，字段顺序与服务一致
    pub fn to_array(&self) -> [f32; POSE_ELEMENTS] {
        let [x, y, z] = self.position;
        let [qx, qy, qz, qw] = self.orientation;
        [x, y, z, qx, qy, qz, qw]
    }
}

impl Default for Pose {
    /// 单位位姿：原点位置 + 单位四元数
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            orientation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// 左右手标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn label(&self) -> &'static str {
        match self {
            Hand::Left => "Left",
            Hand::Right => "Right",
        }
    }
}

/// 一次轮询得到的完整追踪快照
///
/// **注意**：七个字段来自七次独立的非阻塞读取，彼此之间没有时间一致性保证
/// （各字段是读取时刻服务端"最近一次已知值"）。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TrackingSnapshot {
    /// 左手柄位姿
    pub left_controller: Pose,
    /// 右手柄位姿
    pub right_controller: Pose,
    /// 头显位姿
    pub headset: Pose,
    /// 左扳机 [0, 1]
    pub left_trigger: f32,
    /// 右扳机 [0, 1]
    pub right_trigger: f32,
    /// 左握把 [0, 1]
    pub left_grip: f32,
    /// 右握把 [0, 1]
    pub right_grip: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_from_array_field_order() {
        let pose = Pose::from_array([1.0, 2.0, 3.0, 0.1, 0.2, 0.3, 0.9]);
        assert_eq!(pose.position, [1.0, 2.0, 3.0]);
        assert_eq!(pose.orientation, [0.1, 0.2, 0.3, 0.9]);
    }

    #[test]
    fn test_pose_to_array_roundtrip() {
        let raw = [0.5, -1.5, 2.25, 0.0, 0.0, 0.0, 1.0];
        assert_eq!(Pose::from_array(raw).to_array(), raw);
    }

    #[test]
    fn test_pose_default_is_identity() {
        let pose = Pose::default();
        assert_eq!(pose.position, [0.0; 3]);
        assert_eq!(pose.orientation, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hand_label() {
        assert_eq!(Hand::Left.label(), "Left");
        assert_eq!(Hand::Right.label(), "Right");
    }

    #[test]
    fn test_snapshot_default() {
        let snapshot = TrackingSnapshot::default();
        assert_eq!(snapshot.headset, Pose::default());
        assert_eq!(snapshot.left_trigger, 0.0);
        assert_eq!(snapshot.right_grip, 0.0);
    }
}
