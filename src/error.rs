//! 统一错误类型定义
//!
//! 任务操作本身从不报错（无效输入静默忽略），这里的错误只来自
//! 配置读写、日志初始化和终端 I/O。

use std::io;
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum TaskListError {
    /// I/O 错误（终端、配置文件、日志文件）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TaskListError>;

impl TaskListError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
