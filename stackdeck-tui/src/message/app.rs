//! 主消息枚举

use super::{BackendEvent, ModalMessage, OpMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 时钟滴答（动画帧 + 状态消息到期检查）
    Tick,

    /// Stack 操作（创建/刷新/启动/停止/删除）
    Op(OpMessage),

    /// 弹窗子消息
    Modal(ModalMessage),

    /// Backend 异步调用完成
    Backend(BackendEvent),

    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== ID 输入框 ==========
    /// 进入 ID 输入模式
    EnterIdInput,
    /// 离开 ID 输入模式（保留已输入内容）
    LeaveIdInput,
    /// 输入一个字符
    InputChar(char),
    /// 删除一个字符
    InputBackspace,

    /// 清空输入框并隐藏状态消息
    Dismiss,

    /// 无操作，用于代替 `Option::None`
    Noop,
}
