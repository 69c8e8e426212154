//! Stackdeck TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: API 调用 (`backend/`)
//!
//! Update 是纯函数：接受消息、修改 Model，并返回要执行的 API 调用
//! （`Option<ApiCall>`）。主循环把返回的调用交给 Backend 层异步执行，
//! 完成后以 `BackendEvent` 消息回流，保证所有状态变更都走同一条路径。

mod app;
mod backend;
mod config;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::sync::mpsc;

use backend::ApiService;
use config::TuiConfig;
use stackdeck_client::{Endpoints, StackClient};
use util::TerminalGuard;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载配置并创建 API 客户端
    let config = TuiConfig::load();
    let endpoints = Endpoints::new(&config.api_base)?;
    let client = StackClient::new(endpoints);

    // 2. Backend 完成事件通道
    let (backend_tx, backend_rx) = mpsc::unbounded_channel();
    let api = ApiService::new(client, backend_tx);

    // 3. 初始化终端（守卫在离开作用域时恢复终端）
    let mut terminal = TerminalGuard::new()?;

    // 4. 创建应用实例并运行主循环
    let mut app = model::App::new(&config);
    app::run(terminal.terminal_mut(), &mut app, &api, backend_rx).await
}
