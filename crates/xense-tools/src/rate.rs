//! 刷新率统计
//!
//! 固定时间窗口计数：从创建或 `reset` 开始统计平均刷新率，
//! 用于在监控界面上显示实际的重绘频率（轮询间隔 + 读取/渲染耗时
//! 共同决定，通常略低于 1000 / interval_ms）。

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

/// 刷新率统计器
///
/// 原子计数，记录端无锁。
#[derive(Debug)]
pub struct RefreshStatistics {
    frames: AtomicU64,
    window_start: Instant,
}

impl RefreshStatistics {
    pub fn new() -> Self {
        Self {
            frames: AtomicU64::new(0),
            window_start: Instant::now(),
        }
    }

    /// 记录一帧
    pub fn record_frame(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    /// 当前窗口的平均刷新率
    pub fn calculate(&self) -> RefreshRate {
        // 避免除零（至少 1ms）
        let elapsed_secs = self.window_start.elapsed().as_secs_f64().max(0.001);
        let frames = self.frames.load(Ordering::Relaxed);
        RefreshRate {
            hz: frames as f64 / elapsed_secs,
            frames,
            elapsed_secs,
        }
    }

    /// 重置统计窗口
    pub fn reset(&mut self) {
        self.frames.store(0, Ordering::Relaxed);
        self.window_start = Instant::now();
    }

    /// 统计窗口经过的时间
    pub fn elapsed(&self) -> Duration {
        self.window_start.elapsed()
    }
}

impl Default for RefreshStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// 刷新率计算结果
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RefreshRate {
    /// 平均刷新率（Hz）
    pub hz: f64,
    /// 窗口内的帧数
    pub frames: u64,
    /// 窗口长度（秒）
    pub elapsed_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_starts_at_zero() {
        let stats = RefreshStatistics::new();
        let rate = stats.calculate();
        assert_eq!(rate.frames, 0);
        assert_eq!(rate.hz, 0.0);
    }

    #[test]
    fn test_record_frame_counts() {
        let stats = RefreshStatistics::new();
        for _ in 0..10 {
            stats.record_frame();
        }
        assert_eq!(stats.calculate().frames, 10);
    }

    #[test]
    fn test_rate_approximates_frame_frequency() {
        let stats = RefreshStatistics::new();

        // 100 帧，至少 200ms 窗口 → 不超过 500Hz
        for _ in 0..100 {
            stats.record_frame();
        }
        thread::sleep(Duration::from_millis(200));

        let rate = stats.calculate();
        assert_eq!(rate.frames, 100);
        assert!(rate.elapsed_secs >= 0.2);
        // CI 环境下 sleep 可能偏长，只校验上界和正值
        assert!(rate.hz > 0.0);
        assert!(rate.hz <= 500.0 + 1.0, "hz = {}", rate.hz);
    }

    #[test]
    fn test_reset_clears_window() {
        let mut stats = RefreshStatistics::new();
        stats.record_frame();
        stats.record_frame();
        assert_eq!(stats.calculate().frames, 2);

        stats.reset();
        assert_eq!(stats.calculate().frames, 0);
    }

    #[test]
    fn test_elapsed_grows() {
        let stats = RefreshStatistics::new();
        thread::sleep(Duration::from_millis(50));
        assert!(stats.elapsed().as_millis() >= 50);
    }
}
