//! 工具模块

mod terminal;

pub use terminal::{Term, TerminalGuard};
