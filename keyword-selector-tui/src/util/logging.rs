//! 日志初始化
//!
//! TUI 占用终端，日志只能写文件：
//! `<data_local_dir>/keyword-selector-tui/logs/keyword-selector-tui.log`，按天滚动。
//! 级别由环境变量 `KEYWORD_SELECTOR_LOG` 控制（EnvFilter 语法），默认 `info`。
//!
//! core 库使用 `log` 门面，tracing-subscriber 的 `tracing-log` 桥接会把它们一并收集。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志级别环境变量
pub const LOG_ENV: &str = "KEYWORD_SELECTOR_LOG";

const LOG_FILE: &str = "keyword-selector-tui.log";

/// 日志目录
pub fn log_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Cannot determine local data directory")?;
    Ok(base.join("keyword-selector-tui").join("logs"))
}

/// 初始化文件日志
///
/// 返回的 guard 必须存活到程序结束，drop 时会刷新缓冲。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    log::info!("Logging to {}", dir.display());
    Ok(guard)
}
