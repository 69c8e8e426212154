//! 弹窗/对话框状态

use stackdeck_client::StackId;

/// 弹窗类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// 删除确认（不可逆操作，确认前不会发出请求）
    ConfirmDelete { id: StackId },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 打开弹窗
    pub fn open(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗并返回之前的内容
    pub fn take(&mut self) -> Option<Modal> {
        self.active.take()
    }
}
