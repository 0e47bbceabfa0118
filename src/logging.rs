//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入 ~/.tasklist/logs/tasklist.log。
//! 过滤规则读 `TASKLIST_LOG`，默认 `tasklist=info`。

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, TaskListError};
use crate::storage;

/// 日志过滤环境变量
pub const LOG_ENV: &str = "TASKLIST_LOG";

const DEFAULT_DIRECTIVE: &str = "tasklist=info";

/// 在默认位置初始化日志，返回日志文件路径
pub fn init() -> Result<PathBuf> {
    let path = storage::ensure_log_dir()?.join("tasklist.log");
    init_at(&path)?;
    Ok(path)
}

/// 初始化日志写入指定文件（追加）
pub fn init_at(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TaskListError::config(format!("logger already set: {}", e)))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_at_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        // 其他测试可能已设置全局 subscriber，这里只关心文件被创建
        let _ = init_at(&path);
        assert!(path.exists());
    }
}
