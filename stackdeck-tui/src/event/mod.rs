//! Event 层：输入处理
//!
//! 一个独立线程轮询 crossterm 事件并送入通道，主循环用
//! `tokio::select!` 同时等待输入、Backend 完成事件和时钟滴答。

mod handler;
mod keymap;

use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;

pub use handler::handle_event;

/// 启动终端事件轮询线程
pub fn spawn_event_channel() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel(64);

    std::thread::spawn(move || loop {
        let ready = crossterm::event::poll(Duration::from_millis(100)).unwrap_or(false);
        if !ready {
            continue;
        }

        if let Ok(event) = crossterm::event::read() {
            if tx.blocking_send(event).is_err() {
                // 接收端关闭说明应用正在退出
                break;
            }
        }
    });

    rx
}
