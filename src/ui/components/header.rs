use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::TaskCounts;
use crate::theme::ThemeColors;

/// Header 高度：上边框 + 1 行内容
pub const HEADER_HEIGHT: u16 = 2;

/// 渲染顶部标题栏（应用名 + 任务统计）
pub fn render(frame: &mut Frame, area: Rect, counts: TaskCounts, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        " ☰ tasklist",
        Style::default()
            .fg(colors.logo)
            .add_modifier(Modifier::BOLD),
    );
    let right = Span::styled(
        format!("{} pending · {} total ", counts.pending, counts.all),
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let padding_len = (inner_area.width as usize).saturating_sub(left.width() + right.width());
    let line = Line::from(vec![left, Span::raw(" ".repeat(padding_len)), right]);

    frame.render_widget(Paragraph::new(line), inner_area);
}
