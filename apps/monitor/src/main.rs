//! # Xense Monitor
//!
//! XenseVR 头显/手柄追踪数据的终端实时监控工具。
//!
//! 按固定间隔轮询会话并整屏重绘位姿与输入状态，Ctrl+C 优雅退出，
//! 无论以何种方式结束，会话都恰好关闭一次。
//!
//! 使用方式：
//! ```bash
//! # 连接真实 PC 服务（需要 native-service feature）
//! cargo run -p xense-monitor --features native-service
//!
//! # 模拟运行时（无需硬件）
//! cargo run -p xense-monitor -- --mock
//!
//! # 每帧一行 JSON，方便管道处理
//! cargo run -p xense-monitor -- --mock --json
//! ```

mod poll;
mod screen;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use xense_sdk::SessionBuilder;

use poll::{MonitorConfig, MonitorError, OutputFormat};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "xense-monitor")]
#[command(about = "Terminal monitor for XenseVR headset and controller tracking", long_about = None)]
#[command(version)]
struct Args {
    /// 轮询间隔（毫秒）
    #[arg(long, default_value_t = 20)]
    interval_ms: u64,

    /// 使用模拟运行时（无需安装 PC 服务）
    #[arg(long)]
    mock: bool,

    /// 每帧输出一行 JSON（不清屏重绘）
    #[arg(long)]
    json: bool,

    /// 跳过 init 之后的预热等待
    #[arg(long)]
    no_warmup: bool,
}

fn main() -> anyhow::Result<()> {
    // 初始化日志（写到 stderr，stdout 留给监控画面）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("xense_monitor=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Ctrl+C 处理：只翻转标志，由循环自己退出
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    println!("Initializing XR session...");
    let mut builder = SessionBuilder::new();
    if args.no_warmup {
        builder = builder.warmup(Duration::ZERO);
    }
    if args.mock {
        info!("using mock runtime");
        builder = builder.with_runtime(xense_sdk::MockRuntime::new());
    }
    let mut session = builder.open().context("failed to initialize XR session")?;
    println!("Session initialized.");

    let config = MonitorConfig {
        interval: Duration::from_millis(args.interval_ms),
        output: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Screen
        },
    };

    let stdout = std::io::stdout();
    let outcome = poll::run(&mut session, &config, &running, &mut stdout.lock());

    match &outcome {
        Ok(summary) => {
            debug!(iterations = summary.iterations, "monitor loop interrupted");
            println!("\n\nInterrupted by user.");
        }
        Err(MonitorError::Session(e)) => eprintln!("Runtime error: {e}"),
        Err(e) => eprintln!("An unexpected error occurred: {e}"),
    }

    // 无论哪条退出路径，会话都在这里恰好关闭一次
    println!("\nClosing session...");
    if let Err(e) = session.close() {
        warn!(error = %e, "session close reported an error");
    }
    println!("Session closed.");

    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
