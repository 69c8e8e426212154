//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { id } => render_confirm_delete(frame, id.get()),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染删除确认弹窗
fn render_confirm_delete(frame: &mut Frame, id: u32) {
    let c = colors();
    let area = centered_rect(50, 7, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Stack ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete stack {id}? This action cannot be undone."),
            Style::default().fg(c.fg),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Enter] Confirm",
                Style::default().fg(c.error).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[Esc] Cancel", Style::default().fg(c.muted)),
        ])
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(content), inner);
}
