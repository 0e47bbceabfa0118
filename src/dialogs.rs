//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。

pub use crate::ui::components::confirm_dialog::ConfirmType;
pub use crate::ui::components::new_task_dialog::{DraftField, NewTaskData};

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// New Task 弹窗（输入内容保存在任务列表的草稿里）
    pub new_task_dialog: Option<NewTaskData>,
    /// 确认弹窗
    pub confirm_dialog: Option<ConfirmType>,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Tests
// ============================================================================
