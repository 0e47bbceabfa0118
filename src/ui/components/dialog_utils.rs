//! Dialog 组件共享工具函数

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 计算居中 dialog 区域（不超过 frame 大小）
pub fn center_dialog(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    Rect::new(
        frame_area.x + (frame_area.width - width) / 2,
        frame_area.y + (frame_area.height - height) / 2,
        width,
        height,
    )
}

/// 清除背景并渲染带标题的边框，返回内部可用区域
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    colors: &ThemeColors,
) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 快捷键提示 spans，格式为 [(快捷键, 描述), ...]
pub fn hint_spans(hints: &[(&str, &str)], separator: &str, colors: &ThemeColors) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(separator.to_string()));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));
    }
    spans
}

/// 渲染居中的提示行
pub fn render_hint(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], colors: &ThemeColors) {
    let hint = Paragraph::new(Line::from(hint_spans(hints, "  ", colors)))
        .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}
