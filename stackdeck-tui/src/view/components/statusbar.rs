//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, StatusKind};
use crate::view::theme::colors;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.border)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Style::default().fg(c.muted)));
    }

    // 状态消息显示在右侧；成功与错误配色互斥
    if let Some(msg) = app.status.current() {
        let style = match msg.kind {
            StatusKind::Success => Style::default().fg(c.success),
            StatusKind::Error => Style::default().fg(c.error),
        };
        spans.push(Span::styled(" │ ", Style::default().fg(c.border)));
        let text = match msg.kind {
            StatusKind::Success => msg.text.clone(),
            StatusKind::Error => format!("Error: {}", msg.text),
        };
        spans.push(Span::styled(text, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Enter", "Confirm"), ("Esc", "Cancel")];
    }

    if app.stacks.input.active {
        return vec![("0-9", "Type ID"), ("Enter/Esc", "Done")];
    }

    vec![
        ("↑↓", "Select"),
        ("c", "Create"),
        ("r", "Refresh"),
        ("s", "Start"),
        ("x", "Stop"),
        ("d", "Delete"),
        ("i", "Target ID"),
        ("q", "Quit"),
    ]
}
