//! 轮询循环
//!
//! 固定间隔轮询会话并输出。间隔不做漂移补偿：实际周期 = 间隔 +
//! 读取/渲染耗时。循环只在 `running` 置为 false（Ctrl+C）或读取
//! 失败时结束，不会自行终止。

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use xense_sdk::{Session, SessionError, TrackingSnapshot};
use xense_tools::rate::RefreshStatistics;

use crate::screen::{self, ScreenView};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 清屏重绘的终端界面
    Screen,
    /// 每帧一行 JSON（不清屏）
    Json,
}

/// 循环配置
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub interval: Duration,
    pub output: OutputFormat,
}

/// 循环结束摘要（仅在被中断的干净退出时返回）
#[derive(Debug, Clone, Copy)]
pub struct LoopSummary {
    pub iterations: u64,
}

/// 监控循环错误
#[derive(Error, Debug)]
pub enum MonitorError {
    /// 会话读取错误（来自 XR 运行时）
    #[error("XR session error: {0}")]
    Session(#[from] SessionError),

    /// 输出写入错误
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 编码错误
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON 输出的单帧记录
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    iteration: u64,
    #[serde(flatten)]
    snapshot: &'a TrackingSnapshot,
}

/// 运行监控循环，直到 `running` 变为 false 或某次读取失败
pub fn run<W: Write>(
    session: &mut Session,
    config: &MonitorConfig,
    running: &AtomicBool,
    out: &mut W,
) -> Result<LoopSummary, MonitorError> {
    let stats = RefreshStatistics::new();
    let mut iterations = 0u64;

    while running.load(Ordering::SeqCst) {
        iterations += 1;

        let snapshot = session.snapshot()?;

        match config.output {
            OutputFormat::Screen => {
                let view = ScreenView {
                    iteration: iterations,
                    snapshot: &snapshot,
                    rate_hz: stats.calculate().hz,
                };
                screen::render(out, &view)?;
            }
            OutputFormat::Json => {
                let record = JsonRecord {
                    iteration: iterations,
                    snapshot: &snapshot,
                };
                serde_json::to_writer(&mut *out, &record)?;
                out.write_all(b"\n")?;
            }
        }
        out.flush()?;
        stats.record_frame();

        spin_sleep::sleep(config.interval);
    }

    Ok(LoopSummary { iterations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use xense_sdk::{MockRuntime, SessionBuilder};

    fn open_mock(runtime: MockRuntime) -> Session {
        SessionBuilder::new()
            .with_runtime(runtime)
            .warmup(Duration::ZERO)
            .open()
            .expect("mock session should open")
    }

    fn config(output: OutputFormat) -> MonitorConfig {
        MonitorConfig {
            interval: Duration::from_millis(1),
            output,
        }
    }

    fn count_redraws(output: &[u8]) -> usize {
        String::from_utf8_lossy(output)
            .matches(screen::CLEAR_SCREEN)
            .count()
    }

    #[test]
    fn test_cleared_flag_exits_without_reads() {
        let runtime = MockRuntime::new();
        let probe = runtime.probe();
        let mut session = open_mock(runtime);
        let running = AtomicBool::new(false);
        let mut out = Vec::new();

        let summary = run(&mut session, &config(OutputFormat::Screen), &running, &mut out)
            .expect("loop should exit cleanly");
        assert_eq!(summary.iterations, 0);
        assert_eq!(probe.read_calls(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_interrupt_stops_loop() {
        let mut session = open_mock(MockRuntime::new());
        let running = Arc::new(AtomicBool::new(true));
        let mut out = Vec::new();

        let r = running.clone();
        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            r.store(false, Ordering::SeqCst);
        });

        let summary = run(&mut session, &config(OutputFormat::Screen), &running, &mut out)
            .expect("loop should exit cleanly after interrupt");
        stopper.join().unwrap();

        assert!(summary.iterations >= 1);
        assert_eq!(count_redraws(&out) as u64, summary.iterations);
    }

    #[test]
    fn test_read_failure_stops_loop_after_rendered_frames() {
        // 两帧（14 次读取）后注入失败：应渲染恰好 2 帧，然后返回错误
        let runtime = MockRuntime::new().fail_reads_after(14);
        let mut session = open_mock(runtime);
        let running = AtomicBool::new(true);
        let mut out = Vec::new();

        let err = run(&mut session, &config(OutputFormat::Screen), &running, &mut out)
            .err()
            .expect("loop should fail on injected read error");
        assert!(matches!(err, MonitorError::Session(_)));
        assert_eq!(count_redraws(&out), 2);
    }

    #[test]
    fn test_json_output_one_line_per_frame() {
        let runtime = MockRuntime::new().fail_reads_after(21);
        let mut session = open_mock(runtime);
        let running = AtomicBool::new(true);
        let mut out = Vec::new();

        let _ = run(&mut session, &config(OutputFormat::Json), &running, &mut out);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["iteration"], 1);
        assert!(value["headset"]["position"].is_array());
        assert!(value["left_trigger"].is_number());
    }
}
