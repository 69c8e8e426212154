//! 服务器列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use stackdeck_client::DesiredState;

use crate::model::{App, StackAction, StackRow};
use crate::view::spinner;
use crate::view::theme::colors;

/// 渲染服务器列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 目标输入行
            Constraint::Min(1),    // 列表
        ])
        .split(area);

    render_header(app, frame, layout[0]);

    if app.stacks.rows.is_empty() {
        render_empty(app, frame, layout[1]);
    } else {
        render_list(app, frame, layout[1]);
    }
}

/// 渲染目标输入行与页面级忙碌指示
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let input = &app.stacks.input;

    let mut spans = vec![Span::styled("  Target ID: ", Style::default().fg(c.muted))];

    let input_style = if input.active {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    } else {
        Style::default().fg(c.fg)
    };
    let shown = if input.buffer.is_empty() && !input.active {
        Span::styled("(selection)", Style::default().fg(c.muted))
    } else {
        Span::styled(format!("{}_", input.buffer), input_style)
    };
    spans.push(shown);

    if app.stacks.create_busy {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} creating", spinner(app.spinner_frame)),
            Style::default().fg(c.highlight),
        ));
    }
    if app.stacks.list_busy {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} refreshing", spinner(app.spinner_frame)),
            Style::default().fg(c.highlight),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 渲染空状态占位
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let message = if app.stacks.list_busy {
        format!("  {} Loading servers…", spinner(app.spinner_frame))
    } else {
        "  No servers available".to_string()
    };

    let content = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Press c to create a new stack",
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .stacks
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| render_row(app, row, i == app.stacks.selected))
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.stacks.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 渲染一行（一个 stack 的卡片）
fn render_row<'a>(app: &App, row: &'a StackRow, is_selected: bool) -> ListItem<'a> {
    let c = colors();
    let stack = &row.stack;

    let title_style = if is_selected {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    };
    let muted = Style::default().fg(c.muted);

    // 第一行：标识 + 地址 + 操作提示
    let mut title_spans = vec![
        Span::raw("  "),
        Span::styled(format!("Stack {}", stack.stack_id), title_style),
        Span::raw("  "),
        Span::styled(
            format!(
                "IP: {}",
                stack.wan_ip.as_deref().unwrap_or("Not available")
            ),
            muted,
        ),
        Span::raw("  "),
    ];

    match row.busy {
        Some(action) => {
            let verb = match action {
                StackAction::Start => "starting",
                StackAction::Stop => "stopping",
                StackAction::Delete => "deleting",
            };
            title_spans.push(Span::styled(
                format!("{} {verb}…", spinner(app.spinner_frame)),
                Style::default().fg(c.highlight),
            ));
        }
        None => {
            let toggle = match stack.toggle_target() {
                DesiredState::Running => "[s] Start",
                DesiredState::Stopped => "[x] Stop",
            };
            title_spans.push(Span::styled(
                format!("{toggle}  [d] Delete"),
                Style::default().fg(c.muted),
            ));
        }
    }

    // 第二行：各服务状态
    let mut service_spans = vec![Span::raw("    ")];
    for (name, status) in &stack.services {
        let color = if status.is_stopped() { c.error } else { c.success };
        let port = status
            .port
            .map(|p| format!(" (port {p})"))
            .unwrap_or_default();
        service_spans.push(Span::styled(
            format!("{}: {}{port}", service_label(name), status.status),
            Style::default().fg(color),
        ));
        service_spans.push(Span::raw("   "));
    }

    ListItem::new(vec![
        Line::from(title_spans),
        Line::from(service_spans),
        Line::from(""),
    ])
}

/// 服务名的展示标签
fn service_label(name: &str) -> &str {
    match name {
        "minecraft_server" => "Minecraft Server",
        "sftp_server" => "SFTP Server",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ratatui::{backend::TestBackend, buffer::Cell, Terminal};

    use stackdeck_client::{ServiceStatus, Stack, StackId};

    use super::*;
    use crate::config::TuiConfig;

    /// 渲染到测试后端并把整个缓冲区拼成一个字符串
    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render(app, frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(Cell::symbol)
            .collect()
    }

    fn stack(id: u32) -> Stack {
        let mut services = BTreeMap::new();
        services.insert(
            "minecraft_server".to_string(),
            ServiceStatus {
                status: "running".to_string(),
                port: Some(25565),
            },
        );
        Stack {
            stack_id: StackId::try_from(id).unwrap(),
            wan_ip: Some("203.0.113.7".to_string()),
            services,
        }
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let app = App::new(&TuiConfig::default());
        let text = draw(&app);
        assert!(text.contains("No servers available"));
        assert!(text.contains("Press c to create a new stack"));
    }

    #[test]
    fn test_empty_list_while_loading_shows_progress() {
        let mut app = App::new(&TuiConfig::default());
        app.stacks.list_busy = true;
        let text = draw(&app);
        assert!(text.contains("Loading servers"));
        assert!(!text.contains("No servers available"));
    }

    #[test]
    fn test_rows_replace_placeholder() {
        let mut app = App::new(&TuiConfig::default());
        app.stacks.set_stacks(vec![stack(3)]);
        let text = draw(&app);
        assert!(text.contains("Stack 3"));
        assert!(text.contains("IP: 203.0.113.7"));
        assert!(text.contains("Minecraft Server: running"));
        assert!(!text.contains("No servers available"));
    }
}
