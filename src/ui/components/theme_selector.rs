//! 主题选择器组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::theme::{Theme, ThemeColors};

/// 渲染主题选择器弹窗
pub fn render(frame: &mut Frame, selected_index: usize, colors: &ThemeColors) {
    let themes = Theme::all();

    // 边框 + 列表 + 空行 + 提示
    let popup_area = center_dialog(frame.area(), 30, themes.len() as u16 + 4);
    let inner_area = render_dialog_frame(frame, popup_area, " Theme ", colors.highlight, colors);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            if i == selected_index {
                Line::from(Span::styled(
                    format!("❯ {}", theme.label()),
                    Style::default()
                        .fg(colors.highlight)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", theme.label()),
                    Style::default().fg(colors.text),
                ))
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left),
        list_area,
    );

    render_hint(frame, hint_area, &[("Enter", "select"), ("Esc", "cancel")], colors);
}
