use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::TaskFilter;
use crate::theme::ThemeColors;

/// 渲染空状态（提示文字垂直居中）
pub fn render(frame: &mut Frame, area: Rect, filter: TaskFilter, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            empty_message(filter),
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " n ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a task", Style::default().fg(colors.text)),
        ]),
    ];

    let height = (lines.len() as u16).min(inner_area.height);
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(height) / 2,
        width: inner_area.width,
        height,
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_area,
    );
}

/// 根据过滤器给出空列表提示
pub fn empty_message(filter: TaskFilter) -> &'static str {
    match filter {
        TaskFilter::All => "No tasks yet",
        TaskFilter::Pending => "Nothing pending",
        TaskFilter::Completed => "No completed tasks",
    }
}
