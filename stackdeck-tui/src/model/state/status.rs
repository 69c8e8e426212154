//! 状态消息区状态
//!
//! 同一时刻最多显示一条消息；成功与错误互斥。重新显示会原子地替换
//! 旧消息及其隐藏时刻，因此旧的定时不会提前隐藏新消息。

use std::time::{Duration, Instant};

/// 消息类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// 一条正在显示的状态消息
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// 消息文本
    pub text: String,
    /// 类别（决定配色）
    pub kind: StatusKind,
    /// 到达此时刻后自动隐藏
    expires_at: Instant,
}

/// 状态消息区
#[derive(Debug)]
pub struct StatusState {
    current: Option<StatusMessage>,
    ttl: Duration,
}

impl StatusState {
    /// 创建状态区，`ttl` 为自动隐藏延迟
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// 显示成功消息
    pub fn success(&mut self, text: impl Into<String>) {
        self.show_at(text, StatusKind::Success, Instant::now());
    }

    /// 显示错误消息
    pub fn error(&mut self, text: impl Into<String>) {
        self.show_at(text, StatusKind::Error, Instant::now());
    }

    /// 在指定时刻显示消息（测试注入时间用）
    pub fn show_at(&mut self, text: impl Into<String>, kind: StatusKind, now: Instant) {
        self.current = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at: now + self.ttl,
        });
    }

    /// 时钟滴答：到期则隐藏
    pub fn tick(&mut self) {
        self.expire_at(Instant::now());
    }

    /// 在指定时刻检查到期（测试注入时间用）
    pub fn expire_at(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|msg| now >= msg.expires_at)
        {
            self.current = None;
        }
    }

    /// 立即隐藏
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// 当前显示的消息
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}
