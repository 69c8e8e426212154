//! 服务器列表页面状态

use stackdeck_client::{ClientError, Stack, StackId};

/// 单行（单个 stack）上正在进行的操作
///
/// 每一行自己持有忙碌标记，不存在以 UI 句柄为键的全局映射。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAction {
    Start,
    Stop,
    Delete,
}

/// 列表中的一行：stack 数据 + 行内忙碌标记
#[derive(Debug, Clone)]
pub struct StackRow {
    /// 服务端返回的 stack 记录
    pub stack: Stack,
    /// 该行正在进行的操作；`Some` 期间行内按键被忽略
    pub busy: Option<StackAction>,
}

/// Stack ID 输入框状态
#[derive(Debug, Default, Clone)]
pub struct IdInput {
    /// 是否处于编辑模式
    pub active: bool,
    /// 当前输入内容（在使用时才校验）
    pub buffer: String,
}

impl IdInput {
    /// 追加一个字符
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// 删除最后一个字符
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// 清空输入
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

/// 服务器列表页面状态
#[derive(Debug, Default)]
pub struct StacksState {
    /// 列表行
    pub rows: Vec<StackRow>,
    /// 当前选中的索引
    pub selected: usize,
    /// 列表刷新是否进行中
    pub list_busy: bool,
    /// 在途刷新结束后是否需要再刷新一次（变更发生在响应之前时置位）
    pub refresh_queued: bool,
    /// 创建操作是否进行中
    pub create_busy: bool,
    /// 共享的 Stack ID 输入框
    pub input: IdInput,
}

impl StacksState {
    /// 创建新的列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected < self.rows.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self.rows.len() - 1;
        }
    }

    /// 获取当前选中的行
    pub fn selected_row(&self) -> Option<&StackRow> {
        self.rows.get(self.selected)
    }

    /// 按 id 查找行
    pub fn row_mut(&mut self, id: StackId) -> Option<&mut StackRow> {
        self.rows.iter_mut().find(|row| row.stack.stack_id == id)
    }

    /// 该 id 对应的行是否忙碌（行已消失视为不忙碌）
    pub fn is_row_busy(&self, id: StackId) -> bool {
        self.rows
            .iter()
            .find(|row| row.stack.stack_id == id)
            .is_some_and(|row| row.busy.is_some())
    }

    /// 标记行忙碌；行不存在时为空操作（按 id 操作允许列表中没有对应行）
    pub fn mark_busy(&mut self, id: StackId, action: StackAction) {
        if let Some(row) = self.row_mut(id) {
            row.busy = Some(action);
        }
    }

    /// 清除行忙碌标记；行不存在时为空操作
    pub fn clear_busy(&mut self, id: StackId) {
        if let Some(row) = self.row_mut(id) {
            row.busy = None;
        }
    }

    /// 用新的列表替换当前内容
    ///
    /// 保留仍然存在的行的忙碌标记（独立按钮的请求可能仍在途中），
    /// 并把选中位置收敛到有效范围。
    pub fn set_stacks(&mut self, stacks: Vec<Stack>) {
        let busy: Vec<(StackId, StackAction)> = self
            .rows
            .iter()
            .filter_map(|row| row.busy.map(|action| (row.stack.stack_id, action)))
            .collect();

        self.rows = stacks
            .into_iter()
            .map(|stack| StackRow { stack, busy: None })
            .collect();

        for (id, action) in busy {
            self.mark_busy(id, action);
        }

        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    /// 解析操作目标：优先取输入框内容，其次取当前选中行
    ///
    /// 输入框非空但不是正整数时返回校验错误；两者都没有时
    /// 同样按校验失败处理（不会发出任何请求）。
    pub fn resolve_target(&self) -> Result<StackId, ClientError> {
        if !self.input.buffer.trim().is_empty() {
            return StackId::parse(&self.input.buffer);
        }

        self.selected_row()
            .map(|row| row.stack.stack_id)
            .ok_or_else(|| ClientError::InvalidStackId {
                input: String::new(),
            })
    }
}
