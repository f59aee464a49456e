//! 终端屏幕渲染
//!
//! 每帧先清屏再整屏重绘。所有数值格式化由 `xense-tools` 的纯函数完成，
//! 这里只负责排版。

use std::io::{self, Write};

use xense_sdk::{Pose, TrackingSnapshot};
use xense_tools::display::{analog_value, position_line, quaternion_line};

/// 清屏并把光标移回左上角
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const RULE: &str = "============================================================";

/// 单帧屏幕内容
pub struct ScreenView<'a> {
    pub iteration: u64,
    pub snapshot: &'a TrackingSnapshot,
    pub rate_hz: f64,
}

/// 渲染一帧
pub fn render<W: Write>(out: &mut W, view: &ScreenView<'_>) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;

    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "  XenseVR Controller Data  |  Iteration: {}  |  {:6.2} Hz",
        view.iteration, view.rate_hz
    )?;
    writeln!(out, "{RULE}")?;

    let s = view.snapshot;
    write_pose_block(out, "Left Controller Pose", &s.left_controller)?;
    write_pose_block(out, "Right Controller Pose", &s.right_controller)?;
    write_pose_block(out, "Headset Pose", &s.headset)?;

    writeln!(out)?;
    writeln!(out, "[Inputs]")?;
    writeln!(
        out,
        "  Left  Trigger: {}    Grip: {}",
        analog_value(s.left_trigger),
        analog_value(s.left_grip)
    )?;
    writeln!(
        out,
        "  Right Trigger: {}    Grip: {}",
        analog_value(s.right_trigger),
        analog_value(s.right_grip)
    )?;

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "  Press Ctrl+C to exit")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

fn write_pose_block<W: Write>(out: &mut W, label: &str, pose: &Pose) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{label}]")?;
    writeln!(out, "  Position:    {}", position_line(&pose.position))?;
    writeln!(out, "  Quaternion: {}", quaternion_line(&pose.orientation))?;
    Ok(())
}
