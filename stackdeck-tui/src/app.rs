//! 应用主循环
//!
//! 每轮循环：渲染 UI → 检查退出 → 等待下一条消息（终端输入、
//! Backend 完成事件或时钟滴答）→ Update 处理 → 执行返回的 API 调用。
//!
//! 时钟滴答约每 100ms 一次，驱动加载动画和状态消息的自动隐藏。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::interval;

use crate::backend::ApiService;
use crate::event;
use crate::message::{AppMessage, BackendEvent, OpMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    api: &ApiService,
    mut backend_rx: UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    let mut event_rx = event::spawn_event_channel();
    let mut tick = interval(Duration::from_millis(100));

    // 启动时加载一次列表
    if let Some(call) = update::update(app, AppMessage::Op(OpMessage::Refresh)) {
        api.dispatch(call);
    }

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待下一条消息
        let msg = tokio::select! {
            _ = tick.tick() => AppMessage::Tick,
            Some(event) = event_rx.recv() => event::handle_event(event, app),
            Some(event) = backend_rx.recv() => AppMessage::Backend(event),
        };

        // 4. 更新状态并执行副作用
        if let Some(call) = update::update(app, msg) {
            api.dispatch(call);
        }
    }

    Ok(())
}
