//! 事件处理器

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::message::{AppMessage, ModalMessage, OpMessage};
use crate::model::App;

use super::keymap::DefaultKeymap;

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，自动重绘
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何状态下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 弹窗打开时优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // ID 输入模式下按键进入输入框
    if app.stacks.input.active {
        return handle_input_keys(key);
    }

    handle_normal_keys(key)
}

/// 弹窗按键：Enter/y 确认，Esc/n 取消
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Esc | KeyCode::Char('n') => AppMessage::Modal(ModalMessage::Cancel),
        _ => AppMessage::Noop,
    }
}

/// ID 输入模式按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::LeaveIdInput,
        KeyCode::Backspace => AppMessage::InputBackspace,
        KeyCode::Char(c) => AppMessage::InputChar(c),
        _ => AppMessage::Noop,
    }
}

/// 普通模式按键
fn handle_normal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::CREATE.matches(&key) {
        return AppMessage::Op(OpMessage::Create);
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Op(OpMessage::Refresh);
    }
    if DefaultKeymap::START.matches(&key) {
        return AppMessage::Op(OpMessage::Start);
    }
    if DefaultKeymap::STOP.matches(&key) {
        return AppMessage::Op(OpMessage::Stop);
    }
    if DefaultKeymap::DELETE.matches(&key) {
        return AppMessage::Op(OpMessage::Delete);
    }
    if DefaultKeymap::ID_INPUT.matches(&key) {
        return AppMessage::EnterIdInput;
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::SelectPrevious,
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::SelectNext,
        KeyCode::Home => AppMessage::SelectFirst,
        KeyCode::End => AppMessage::SelectLast,
        // Esc: 清空输入框并隐藏状态消息
        KeyCode::Esc => AppMessage::Dismiss,
        _ => AppMessage::Noop,
    }
}
