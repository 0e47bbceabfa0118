use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::truncate;
use crate::model::Task;
use crate::theme::ThemeColors;

/// 描述列最多显示的字符数
const DESCRIPTION_MAX: usize = 48;

/// 渲染任务表格
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    selected_index: Option<usize>,
    colors: &ThemeColors,
) {
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 状态图标
        Cell::from("#"),
        Cell::from("TITLE"),
        Cell::from("DESCRIPTION"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            let icon_style = if task.completed {
                Style::default().fg(colors.status_done)
            } else {
                Style::default().fg(colors.status_pending)
            };

            // 已完成的任务划掉标题
            let title_style = if task.completed {
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            let row_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(task.icon()).style(icon_style),
                Cell::from(task.id.to_string()).style(Style::default().fg(colors.muted)),
                Cell::from(task.title.trim().to_string()).style(title_style),
                Cell::from(truncate(&task.description, DESCRIPTION_MAX))
                    .style(Style::default().fg(colors.muted)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2), // 选择器
        Constraint::Length(2), // 状态图标
        Constraint::Length(5), // ID
        Constraint::Fill(2),   // TITLE
        Constraint::Fill(3),   // DESCRIPTION
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(Style::default().bg(colors.bg_secondary));

    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}
