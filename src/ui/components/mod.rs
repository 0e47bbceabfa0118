/// 截断字符串到指定最大长度，超出部分用省略号替代
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max_len.saturating_sub(1)).collect::<String>())
    }
}

pub mod confirm_dialog;
pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod new_task_dialog;
pub mod tabs;
pub mod task_table;
pub mod theme_selector;
pub mod toast;
