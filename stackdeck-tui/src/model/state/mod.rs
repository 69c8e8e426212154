//! 页面状态模块

mod modal;
mod stacks;
mod status;

pub use modal::{Modal, ModalState};
pub use stacks::{IdInput, StackAction, StackRow, StacksState};
pub use status::{StatusKind, StatusMessage, StatusState};
