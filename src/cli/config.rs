//! config 子命令实现

use crate::error::Result;
use crate::storage::config::{self, Config};

/// 输出生效的配置（TOML）及配置文件路径
pub fn execute(effective: &Config) -> Result<()> {
    let path = config::config_path()?;
    let exists = if path.exists() { "" } else { " (not created yet)" };
    println!("# {}{}", path.display(), exists);
    print!("{}", render(effective)?);
    Ok(())
}

fn render(effective: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(effective)?)
}
