//! 应用配置持久化
//!
//! 只保存偏好设置（主题、默认过滤器），任务本身不落盘。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{app_dir, load_toml, save_toml};
use crate::error::Result;
use crate::model::TaskFilter;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 任务列表配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// 启动时使用的过滤器
    #[serde(default = "default_filter_name")]
    pub default_filter: String,
}

fn default_filter_name() -> String {
    TaskFilter::All.name().to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter_name(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}

/// 加载配置（不存在或无法解析则返回默认值）
pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(e) => {
            warn!("config path unavailable: {}", e);
            Config::default()
        }
    }
}

/// 从指定路径加载配置
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match load_toml(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), "ignoring unreadable config: {}", e);
            Config::default()
        }
    }
}

/// 保存配置到指定路径
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    save_toml(path, config)
}
