//! Model 层：应用状态
//!
//! Model 只存放数据，不包含任何 IO。所有修改都由 Update 层完成。

mod app;
pub mod state;

pub use app::App;
pub use state::{Modal, ModalState, StackAction, StackRow, StacksState, StatusKind, StatusState};
