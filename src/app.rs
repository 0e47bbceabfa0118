use std::path::PathBuf;

use ratatui::widgets::ListState;
use tracing::{info, warn};

use crate::dialogs::{ConfirmType, DialogState, DraftField, NewTaskData};
use crate::model::{Task, TaskFilter, TaskList};
use crate::storage::config::{self, Config};
use crate::theme::Theme;
use crate::ui_state::UiState;

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表
    pub tasks: TaskList,
    /// 列表选择状态（索引对应过滤后的视图）
    pub list_state: ListState,
    /// UI 状态（主题、Toast）
    pub ui: UiState,
    /// 对话框状态
    pub dialogs: DialogState,
    /// 配置文件路径（None 时不保存）
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let theme = Theme::from_name(&config.theme.name);
        let mut tasks = TaskList::new();
        tasks.set_filter(config.tasks.default_filter.clone());

        Self {
            should_quit: false,
            tasks,
            list_state: ListState::default(),
            ui: UiState::new(theme),
            dialogs: DialogState::new(),
            config_path,
        }
    }

    // ========== Selection ==========

    /// 过滤后可见的任务数
    pub fn visible_len(&self) -> usize {
        self.tasks.filtered_tasks().len()
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.list_state.selected()?;
        self.tasks.filtered_tasks().get(index).copied()
    }

    /// 让选中项落在可见范围内；列表为空时取消选中
    pub fn ensure_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let index = self.list_state.selected().unwrap_or(0).min(len - 1);
        self.list_state.select(Some(index));
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 选中第一项
    pub fn select_first(&mut self) {
        if self.visible_len() > 0 {
            self.list_state.select(Some(0));
        }
    }

    /// 选中最后一项
    pub fn select_last(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    /// 按 ID 选中任务（不可见时保持原选择）
    fn select_task_id(&mut self, id: u64) {
        if let Some(index) = self.tasks.filtered_tasks().iter().position(|t| t.id == id) {
            self.list_state.select(Some(index));
        }
    }

    // ========== Filter ==========

    /// 切换到指定过滤器
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.tasks.set_filter(filter.name());
        self.list_state.select(None);
        self.ensure_selection();
    }

    /// 切换到下一个过滤器
    pub fn next_filter(&mut self) {
        self.set_filter(self.tasks.active_filter().next());
    }

    /// 切换到上一个过滤器
    pub fn prev_filter(&mut self) {
        self.set_filter(self.tasks.active_filter().prev());
    }

    // ========== Task actions ==========

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        if let Some(completed) = self.tasks.toggle_task(id) {
            // 当前过滤器下任务可能消失
            self.ensure_selection();
            let label = if completed { "Done" } else { "Reopened" };
            if let Some(task) = self.tasks.get(id) {
                let message = format!("{}: {}", label, task.title.trim());
                self.ui.show_toast(message);
            }
        }
    }

    /// 请求删除选中任务（弹出确认框）
    pub fn request_delete_selected(&mut self) {
        let confirm = self.selected_task().map(|task| ConfirmType::DeleteTask {
            id: task.id,
            title: task.title.trim().to_string(),
        });
        if confirm.is_some() {
            self.dialogs.confirm_dialog = confirm;
        }
    }

    /// 确认弹窗 - 确认
    pub fn confirm_dialog_yes(&mut self) {
        let Some(confirm) = self.dialogs.confirm_dialog.take() else {
            return;
        };
        match confirm {
            ConfirmType::DeleteTask { id, title } => {
                let deleted = match self.tasks.get(id).cloned() {
                    Some(task) => self.tasks.delete_task(&task),
                    None => false,
                };
                if deleted {
                    self.ui.show_toast(format!("Deleted: {}", title));
                }
                self.ensure_selection();
            }
        }
    }

    /// 确认弹窗 - 取消
    pub fn confirm_dialog_no(&mut self) {
        self.dialogs.confirm_dialog = None;
    }

    // ========== New Task Dialog ==========

    /// 打开 New Task 弹窗（保留上次未提交的草稿）
    pub fn open_new_task_dialog(&mut self) {
        self.dialogs.new_task_dialog = Some(NewTaskData::default());
    }

    /// 关闭 New Task 弹窗，草稿不清空
    pub fn close_new_task_dialog(&mut self) {
        self.dialogs.new_task_dialog = None;
    }

    /// 切换输入焦点
    pub fn new_task_switch_field(&mut self) {
        if let Some(data) = self.dialogs.new_task_dialog.as_mut() {
            data.focus = data.focus.other();
        }
    }

    /// 当前焦点对应的草稿
    fn focused_draft(&mut self) -> Option<&mut String> {
        let focus = self.dialogs.new_task_dialog.as_ref()?.focus;
        Some(match focus {
            DraftField::Title => &mut self.tasks.task_title,
            DraftField::Description => &mut self.tasks.task_description,
        })
    }

    /// New Task 输入字符
    pub fn new_task_input_char(&mut self, c: char) {
        if let Some(draft) = self.focused_draft() {
            draft.push(c);
        }
    }

    /// New Task 删除字符
    pub fn new_task_delete_char(&mut self) {
        if let Some(draft) = self.focused_draft() {
            draft.pop();
        }
    }

    /// 提交 New Task；标题为空时什么都不做，弹窗保持打开
    pub fn submit_new_task(&mut self) {
        let Some(id) = self.tasks.add_task() else {
            return;
        };
        self.close_new_task_dialog();
        self.select_task_id(id);
        self.ensure_selection();
        if let Some(task) = self.tasks.get(id) {
            let message = format!("Added: {}", task.title.trim());
            self.ui.show_toast(message);
        }
    }

    // ========== Theme ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.ui.open_theme_selector();
    }

    /// 确认主题并写入配置
    pub fn theme_selector_confirm(&mut self) {
        let theme = self.ui.theme_selector_confirm();
        info!(theme = theme.label(), "theme changed");
        self.ui.show_toast(format!("Theme: {}", theme.label()));
        self.save_theme(theme);
    }

    /// 只改写文件里的主题，命令行覆盖的其他值不落盘
    fn save_theme(&mut self, theme: Theme) {
        let Some(path) = self.config_path.as_ref() else {
            return;
        };
        let mut on_disk = config::load_config_from(path);
        on_disk.theme.name = theme.label().to_string();
        if let Err(e) = config::save_config_to(path, &on_disk) {
            warn!("failed to save config: {}", e);
            self.ui.show_toast("Failed to save config");
        }
    }

    // ========== Misc ==========

    /// 每次事件循环调用：清理过期 Toast，跟随系统主题
    pub fn tick(&mut self) {
        self.ui.clear_expired_toast();
        self.ui.check_system_theme();
    }

    /// 显示/隐藏帮助
    pub fn toggle_help(&mut self) {
        self.dialogs.show_help = !self.dialogs.show_help;
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut config = Config::default();
        config.theme.name = "Dark".to_string();
        App::new(config, None)
    }

    fn add(app: &mut App, title: &str) {
        app.open_new_task_dialog();
        for c in title.chars() {
            app.new_task_input_char(c);
        }
        app.submit_new_task();
    }

    #[test]
    fn test_new_uses_config() {
        let mut config = Config::default();
        config.theme.name = "Nord".to_string();
        config.tasks.default_filter = "pending".to_string();
        let app = App::new(config, None);

        assert_eq!(app.ui.theme, Theme::Nord);
        assert_eq!(app.tasks.filter(), "pending");
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn test_dialog_writes_drafts() {
        let mut app = app();
        app.open_new_task_dialog();
        for c in "Write".chars() {
            app.new_task_input_char(c);
        }
        app.new_task_switch_field();
        for c in "docs".chars() {
            app.new_task_input_char(c);
        }
        app.new_task_delete_char();

        assert_eq!(app.tasks.task_title, "Write");
        assert_eq!(app.tasks.task_description, "doc");
    }

    #[test]
    fn test_submit_adds_and_selects() {
        let mut app = app();
        add(&mut app, "First");
        add(&mut app, "Second");

        assert_eq!(app.tasks.tasks.len(), 2);
        assert!(app.dialogs.new_task_dialog.is_none());
        assert_eq!(app.selected_task().map(|t| t.id), Some(2));
        assert_eq!(app.ui.toast.as_ref().unwrap().message, "Added: Second");
    }

    #[test]
    fn test_submit_blank_title_keeps_dialog_open() {
        let mut app = app();
        add(&mut app, "   ");

        assert!(app.tasks.tasks.is_empty());
        assert!(app.dialogs.new_task_dialog.is_some());
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn test_cancel_keeps_drafts() {
        let mut app = app();
        app.open_new_task_dialog();
        app.new_task_input_char('x');
        app.close_new_task_dialog();
        app.open_new_task_dialog();

        assert_eq!(app.tasks.task_title, "x");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        add(&mut app, "a");
        add(&mut app, "b");
        add(&mut app, "c");

        app.select_first();
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(2));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
        app.select_last();
        assert_eq!(app.selected_task().map(|t| t.title.as_str()), Some("c"));
    }

    #[test]
    fn test_toggle_under_pending_filter_clamps_selection() {
        let mut app = app();
        add(&mut app, "a");
        add(&mut app, "b");
        app.set_filter(TaskFilter::Pending);
        app.select_last();

        app.toggle_selected();

        assert_eq!(app.visible_len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(app.tasks.get(2).is_some_and(|t| t.completed));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = app();
        add(&mut app, "a");
        add(&mut app, "b");
        app.select_first();

        app.request_delete_selected();
        assert!(matches!(
            app.dialogs.confirm_dialog,
            Some(ConfirmType::DeleteTask { id: 1, .. })
        ));
        app.confirm_dialog_no();
        assert_eq!(app.tasks.tasks.len(), 2);

        app.request_delete_selected();
        app.confirm_dialog_yes();
        assert_eq!(app.tasks.tasks.len(), 1);
        assert_eq!(app.tasks.tasks[0].title, "b");
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_delete_last_task_clears_selection() {
        let mut app = app();
        add(&mut app, "only");
        app.request_delete_selected();
        app.confirm_dialog_yes();

        assert!(app.tasks.tasks.is_empty());
        assert!(app.list_state.selected().is_none());
        assert!(app.selected_task().is_none());
    }

    #[test]
    fn test_confirm_delete_of_vanished_task() {
        let mut app = app();
        add(&mut app, "gone");
        add(&mut app, "kept");
        app.select_first();
        app.request_delete_selected();
        app.tasks.delete_task_by_id(1);
        app.ui.toast = None;

        app.confirm_dialog_yes();

        assert!(app.dialogs.confirm_dialog.is_none());
        assert_eq!(app.tasks.tasks.len(), 1);
        assert_eq!(app.tasks.tasks[0].title, "kept");
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn test_filter_cycle() {
        let mut app = app();
        assert_eq!(app.tasks.active_filter(), TaskFilter::All);
        app.next_filter();
        assert_eq!(app.tasks.filter(), "pending");
        app.next_filter();
        assert_eq!(app.tasks.filter(), "completed");
        app.prev_filter();
        assert_eq!(app.tasks.filter(), "pending");
    }

    #[test]
    fn test_theme_confirm_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.theme.name = "Dark".to_string();
        let mut app = App::new(config, Some(path.clone()));

        app.open_theme_selector();
        app.ui.theme_selector_next();
        app.theme_selector_confirm();

        assert_eq!(config::load_config_from(&path).theme.name, "Light");
    }

    #[test]
    fn test_theme_save_keeps_file_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut on_disk = Config::default();
        on_disk.tasks.default_filter = "completed".to_string();
        config::save_config_to(&path, &on_disk).unwrap();

        // 命令行临时指定的过滤器
        let mut effective = on_disk.clone();
        effective.theme.name = "Dark".to_string();
        effective.tasks.default_filter = "pending".to_string();
        let mut app = App::new(effective, Some(path.clone()));

        app.open_theme_selector();
        app.theme_selector_confirm();

        let saved = config::load_config_from(&path);
        assert_eq!(saved.theme.name, "Dark");
        assert_eq!(saved.tasks.default_filter, "completed");
    }
}
