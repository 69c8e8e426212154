//! 终端初始化与恢复
//!
//! [`TerminalGuard`] 创建时进入原始模式与备用屏幕，销毁时恢复终端，
//! 因此主循环提前返回或出错时终端同样会被还原。

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 终端守卫：持有终端，并在离开作用域时恢复终端状态
pub struct TerminalGuard {
    terminal: Term,
}

impl TerminalGuard {
    /// 进入原始模式与备用屏幕
    ///
    /// 中途任何一步失败时先还原已生效的部分再返回错误。
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e.into())
            }
        }
    }

    /// 可变访问内部终端
    pub fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // 恢复失败时无处可显示错误，只记录日志
        if let Err(e) = disable_raw_mode() {
            log::error!("failed to disable raw mode: {e}");
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            log::error!("failed to leave alternate screen: {e}");
        }
        let _ = self.terminal.show_cursor();
    }
}
