//! Stack 操作消息
//!
//! 对应面向用户的五个操作。每次调用都经过同一条路径：
//! 校验目标 → (拒绝 | 发起请求) → (成功 | 失败) → 回到空闲。

/// Stack 操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMessage {
    /// 创建新 stack（无输入）
    Create,
    /// 刷新服务器列表（无输入）
    Refresh,
    /// 启动目标 stack（目标来自输入框或当前选中行）
    Start,
    /// 停止目标 stack
    Stop,
    /// 删除目标 stack（需要弹窗确认）
    Delete,
}
