//! 弹窗消息

/// 弹窗子消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 确认当前弹窗的操作
    Confirm,
    /// 取消并关闭弹窗（静默放弃，不显示任何消息）
    Cancel,
}
