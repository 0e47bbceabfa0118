use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    confirm_dialog, empty_state, footer, header, help_panel, new_task_dialog, tabs, task_table,
    theme_selector, toast,
};

/// 渲染任务页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, tabs_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let counts = app.tasks.counts();
    let filter = app.tasks.active_filter();
    let visible = app.tasks.filtered_tasks();

    header::render(frame, header_area, counts, colors);
    tabs::render(frame, tabs_area, filter, counts, colors);

    if visible.is_empty() {
        empty_state::render(frame, list_area, filter, colors);
    } else {
        task_table::render(
            frame,
            list_area,
            &visible,
            app.list_state.selected(),
            colors,
        );
    }

    footer::render(frame, footer_area, !visible.is_empty(), colors);

    // 弹窗层
    if let Some(ref data) = app.dialogs.new_task_dialog {
        new_task_dialog::render(
            frame,
            data,
            &app.tasks.task_title,
            &app.tasks.task_description,
            colors,
        );
    }

    if let Some(ref confirm) = app.dialogs.confirm_dialog {
        confirm_dialog::render(frame, confirm, colors);
    }

    if app.ui.show_theme_selector {
        theme_selector::render(frame, app.ui.theme_selector_index, colors);
    }

    if app.dialogs.show_help {
        help_panel::render(frame, colors);
    }

    if let Some(ref t) = app.ui.toast {
        toast::render(frame, &t.message, colors);
    }
}
