use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::model::TaskFilter;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    app.tick();

    if event::poll(POLL_TIMEOUT)? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    Ok(!app.should_quit)
}

/// 按键分发：弹窗优先，其次是主列表
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C 在任何状态下都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.dialogs.show_help {
        handle_help_key(app, key);
        return;
    }

    if app.dialogs.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    if app.dialogs.new_task_dialog.is_some() {
        handle_new_task_dialog_key(app, key);
        return;
    }

    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 主列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // 任务操作
        KeyCode::Char('n') => app.open_new_task_dialog(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete_selected(),

        // 过滤器
        KeyCode::Char('1') => app.set_filter(TaskFilter::All),
        KeyCode::Char('2') => app.set_filter(TaskFilter::Pending),
        KeyCode::Char('3') => app.set_filter(TaskFilter::Completed),
        KeyCode::Char('f') | KeyCode::Right | KeyCode::Tab => app.next_filter(),
        KeyCode::Left | KeyCode::BackTab => app.prev_filter(),

        KeyCode::Char('t') | KeyCode::Char('T') => app.open_theme_selector(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// 帮助面板：任意关闭键
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            app.toggle_help();
        }
        _ => {}
    }
}

/// 确认弹窗
fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_dialog_yes(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_dialog_no(),
        _ => {}
    }
}

/// New Task 弹窗：字符全部写入当前草稿
fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_new_task_dialog(),
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Tab | KeyCode::BackTab => app.new_task_switch_field(),
        KeyCode::Backspace => app.new_task_delete_char(),
        KeyCode::Char(c) => app.new_task_input_char(c),
        _ => {}
    }
}

/// 主题选择器
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.ui.theme_selector_next(),
        KeyCode::Char('k') | KeyCode::Up => app.ui.theme_selector_prev(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc | KeyCode::Char('q') => app.ui.theme_selector_cancel(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::Config;
    use crate::theme::Theme;

    fn app() -> App {
        let mut config = Config::default();
        config.theme.name = "Dark".to_string();
        App::new(config, None)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_task_via_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        // 'q' 在弹窗里是普通字符
        type_str(&mut app, "quick");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "notes");
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.tasks.tasks.len(), 1);
        assert_eq!(app.tasks.tasks[0].title, "quick");
        assert_eq!(app.tasks.tasks[0].description, "notes");
        assert!(app.dialogs.new_task_dialog.is_none());
    }

    #[test]
    fn test_enter_on_blank_title_is_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "  ");
        press(&mut app, KeyCode::Enter);

        assert!(app.tasks.tasks.is_empty());
        assert!(app.dialogs.new_task_dialog.is_some());
    }

    #[test]
    fn test_toggle_filter_and_delete() {
        let mut app = app();
        for title in ["a", "b", "c"] {
            press(&mut app, KeyCode::Char('n'));
            type_str(&mut app, title);
            press(&mut app, KeyCode::Enter);
        }

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.tasks.tasks[0].completed);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.visible_len(), 1);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.visible_len(), 2);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.tasks.tasks.len(), 2);
        assert_eq!(app.tasks.tasks[0].title, "a");
        assert_eq!(app.tasks.tasks[1].title, "c");
    }

    #[test]
    fn test_confirm_cancel() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "keep");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tasks.tasks.len(), 1);
        assert!(app.dialogs.confirm_dialog.is_none());
    }

    #[test]
    fn test_help_blocks_list_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.dialogs.new_task_dialog.is_none());
        press(&mut app, KeyCode::Esc);
        assert!(!app.dialogs.show_help);
    }

    #[test]
    fn test_theme_selector_escape_restores() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.ui.theme, Theme::Light);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui.theme, Theme::Dark);
    }

    #[test]
    fn test_q_quits_from_list() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert!(app.tasks.task_title.is_empty());
    }
}
