//! New Task 弹窗组件
//!
//! 输入内容直接写入任务列表的草稿字段，这里只记录焦点。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::theme::ThemeColors;

/// 草稿字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Description,
}

impl DraftField {
    /// 另一个字段（Tab 切换）
    pub fn other(&self) -> Self {
        match self {
            DraftField::Title => DraftField::Description,
            DraftField::Description => DraftField::Title,
        }
    }
}

/// New Task 弹窗数据
#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    /// 当前输入焦点
    pub focus: DraftField,
}

/// 渲染 New Task 弹窗
pub fn render(
    frame: &mut Frame,
    data: &NewTaskData,
    title: &str,
    description: &str,
    colors: &ThemeColors,
) {
    let popup_width = 60u16.min(frame.area().width.saturating_sub(4));
    let popup_area = center_dialog(frame.area(), popup_width, 9);
    let inner_area = render_dialog_frame(frame, popup_area, " New Task ", colors.highlight, colors);

    // 空行 + 标题 + 描述 + 空行 + 状态行 + 空行 + 提示行
    let [_, title_area, desc_area, _, status_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    render_field(
        frame,
        title_area,
        "Title",
        title,
        data.focus == DraftField::Title,
        colors,
    );
    render_field(
        frame,
        desc_area,
        "Notes",
        description,
        data.focus == DraftField::Description,
        colors,
    );

    // 标题为空时提交不会生效，这里只做灰色提示
    let status = if title.trim().is_empty() {
        Span::styled("  (enter a title)", Style::default().fg(colors.muted))
    } else {
        Span::styled("  ready", Style::default().fg(colors.status_done))
    };
    frame.render_widget(Paragraph::new(Line::from(status)), status_area);

    render_hint(
        frame,
        hint_area,
        &[("Enter", "add"), ("Tab", "switch field"), ("Esc", "close")],
        colors,
    );
}

/// 渲染单行输入: "  Label: {value}█"
fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    colors: &ThemeColors,
) {
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };

    // 只保留能显示的尾部
    let max_value = (area.width as usize).saturating_sub(label.chars().count() + 6);
    let skip = value.chars().count().saturating_sub(max_value);
    let visible: String = value.chars().skip(skip).collect();

    let mut spans = vec![
        Span::styled(format!("  {}: ", label), label_style),
        Span::styled(visible, Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_field_other() {
        assert_eq!(DraftField::Title.other(), DraftField::Description);
        assert_eq!(DraftField::Description.other(), DraftField::Title);
        assert_eq!(NewTaskData::default().focus, DraftField::Title);
    }
}
