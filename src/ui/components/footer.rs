use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::dialog_utils::hint_spans;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, has_items: bool, colors: &ThemeColors) {
    let mut spans = vec![Span::raw("  ")];
    spans.extend(hint_spans(get_shortcuts(has_items), "   ", colors));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(has_items: bool) -> &'static [(&'static str, &'static str)] {
    if has_items {
        &[
            ("n", "new"),
            ("Space", "done"),
            ("x", "delete"),
            ("f", "filter"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        &[("n", "new"), ("f", "filter"), ("?", "help"), ("q", "quit")]
    }
}
