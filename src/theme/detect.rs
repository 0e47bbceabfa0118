//! 终端深色模式检测

use std::process::Command;

/// 检测系统/终端是否为深色模式
///
/// 优先读取终端设置的 `COLORFGBG`（如 "15;0"），否则在 macOS 上查询
/// AppleInterfaceStyle。都无法判断时视为深色，终端多数如此。
pub fn detect_system_theme() -> bool {
    if let Some(dark) = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| dark_from_colorfgbg(&v))
    {
        return dark;
    }

    if cfg!(target_os = "macos") {
        return Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout)
                        .trim()
                        .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(false);
    }

    true
}

/// 解析 `COLORFGBG`，最后一段是背景色编号（0-6 或 8 为深色）
fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg < 7 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_system_theme() {
        // 只是确保函数不会 panic
        let _is_dark = detect_system_theme();
    }

    #[test]
    fn test_dark_from_colorfgbg() {
        assert_eq!(dark_from_colorfgbg("15;0"), Some(true));
        assert_eq!(dark_from_colorfgbg("0;15"), Some(false));
        assert_eq!(dark_from_colorfgbg("15;default;8"), Some(true));
        assert_eq!(dark_from_colorfgbg("garbage"), None);
    }
}
