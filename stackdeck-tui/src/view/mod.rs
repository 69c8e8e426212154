//! View 层：UI 渲染
//!
//! View 只读取 Model，不做任何修改。

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;

/// 加载动画帧
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 当前动画帧字符
pub(crate) fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
