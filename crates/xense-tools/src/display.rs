//! 终端显示格式化
//!
//! 字段宽度与 PC 服务自带的演示脚本保持一致：
//! 位姿分量 8 字符宽、4 位小数；模拟量（扳机/握把）6 字符宽、3 位小数。

/// 位置行：`x=  1.0000  y=  2.0000  z=  3.0000`
pub fn position_line(position: &[f32; 3]) -> String {
    format!(
        "x={:8.4}  y={:8.4}  z={:8.4}",
        position[0], position[1], position[2]
    )
}

/// 四元数行：`qx=  0.0000 qy=  0.0000 qz=  0.0000 qw=  1.0000`
pub fn quaternion_line(orientation: &[f32; 4]) -> String {
    format!(
        "qx={:8.4} qy={:8.4} qz={:8.4} qw={:8.4}",
        orientation[0], orientation[1], orientation[2], orientation[3]
    )
}

/// 模拟量（扳机/握把）：` 0.500`
pub fn analog_value(value: f32) -> String {
    format!("{value:6.3}")
}
