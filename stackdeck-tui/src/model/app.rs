//! 应用主状态结构

use std::time::Duration;

use crate::config::TuiConfig;

use super::state::{ModalState, StacksState, StatusState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 服务器列表状态
    pub stacks: StacksState,

    /// 状态消息区
    pub status: StatusState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 加载动画帧计数（随 Tick 递增）
    pub spinner_frame: usize,
}

impl App {
    /// 根据配置创建应用实例
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            should_quit: false,
            stacks: StacksState::new(),
            status: StatusState::new(Duration::from_millis(config.auto_hide_delay_ms)),
            modal: ModalState::new(),
            spinner_frame: 0,
        }
    }

    /// 时钟滴答：推进动画帧并检查消息到期
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.status.tick();
    }
}
