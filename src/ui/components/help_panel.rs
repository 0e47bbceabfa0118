//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame};
use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 38;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let lines = build_help_lines(colors);
    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, lines.len() as u16 + 2);
    let inner = render_dialog_frame(frame, panel_area, " Help ", colors.highlight, colors);

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("g / G", "First / last", colors),
        Line::from(""),
        section_header("Tasks", colors),
        key_line("n", "New task", colors),
        key_line("Space", "Toggle done", colors),
        key_line("x / Del", "Delete task", colors),
        Line::from(""),
        section_header("Filter", colors),
        key_line("1 / 2 / 3", "All / Pending / Done", colors),
        key_line("← / → / f", "Cycle filter", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Theme", colors),
        key_line("?", "Toggle help", colors),
        key_line("q", "Quit", colors),
    ]
}

fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {:<12}", key), Style::default().fg(colors.text)),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
