//! UI 状态管理
//!
//! 管理所有与 UI 显示相关的状态：主题、颜色、Toast、主题选择器。

use std::time::{Duration, Instant};

use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 默认显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 打开选择器前的主题（取消时恢复）
    theme_before_selector: Theme,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    pub last_system_dark: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            show_theme_selector: false,
            theme_selector_index: 0,
            theme_before_selector: theme,
            last_system_dark: detect_system_theme(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);
    }

    /// 打开主题选择器，定位到当前主题
    pub fn open_theme_selector(&mut self) {
        self.theme_before_selector = self.theme;
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 主题选择器 - 选择上一个（实时预览）
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + len - 1) % len;
        self.preview_selected_theme();
    }

    /// 主题选择器 - 选择下一个（实时预览）
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        self.preview_selected_theme();
    }

    /// 主题选择器 - 确认，返回选中的主题
    pub fn theme_selector_confirm(&mut self) -> Theme {
        self.preview_selected_theme();
        self.show_theme_selector = false;
        self.theme
    }

    /// 主题选择器 - 取消，恢复原主题
    pub fn theme_selector_cancel(&mut self) {
        self.set_theme(self.theme_before_selector);
        self.show_theme_selector = false;
    }

    fn preview_selected_theme(&mut self) {
        if let Some(theme) = Theme::all().get(self.theme_selector_index) {
            self.set_theme(*theme);
        }
    }

    /// 检查系统主题变化（只在 Auto 模式下生效）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
